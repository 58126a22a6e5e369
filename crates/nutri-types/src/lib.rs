pub mod message;
pub mod event;
pub mod upload;
pub mod config;
pub mod error;


pub use error::NutriError;
pub type Result<T> = std::result::Result<T, NutriError>;

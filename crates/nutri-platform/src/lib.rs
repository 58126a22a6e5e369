//! Browser adapters for the nutri-core ports, plus small browser helpers
//! (file picker, external links, timers).

pub mod llm;
pub mod auth;
pub mod cloudinary;
pub mod summary;
pub mod speech;
pub mod picker;
pub mod browser;

pub use llm::GeminiProvider;
pub use auth::HttpPasswordReset;
pub use cloudinary::CloudinaryUploader;
pub use summary::HttpSummary;
pub use speech::SpeechDictation;

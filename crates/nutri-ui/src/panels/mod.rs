pub mod chat;
pub mod reset;
pub mod scan;
pub mod toast;

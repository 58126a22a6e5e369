use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutriError {
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("No response text from AI.")]
    EmptyResponse,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl NutriError {
    /// Message supplied by the remote service, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            NutriError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for showing to the user after a prefix such as
    /// "Failed to upload image: ".
    pub fn detail(&self) -> String {
        match self.server_message() {
            Some(m) => m.to_string(),
            None => match self {
                NutriError::Network(m)
                | NutriError::Generation(m)
                | NutriError::MalformedResponse(m)
                | NutriError::Config(m)
                | NutriError::Validation(m) => m.clone(),
                other => other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for NutriError {
    fn from(e: serde_json::Error) -> Self {
        NutriError::Serialization(e.to_string())
    }
}

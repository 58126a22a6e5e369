//! Port traits at the boundary between NutriAI controllers and browser services.
//!
//! These traits are defined here in `nutri-core` (pure Rust).
//! Implementations live in `nutri-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::Serialize;
use nutri_types::{
    Result,
    config::{ChatConfig, GenerationConfig, SafetySetting, UploadCredentials},
    upload::SelectedFile,
};

// ─── Generative Port ─────────────────────────────────────────

/// One stateless generation call: persona + fixed parameters + a single prompt turn
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: String,
    pub generation: GenerationConfig,
    pub safety: Vec<SafetySetting>,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(config: &ChatConfig, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            system_instruction: config.system_prompt.clone(),
            generation: config.generation,
            safety: config.safety.clone(),
            prompt: prompt.into(),
        }
    }
}

#[async_trait(?Send)]
pub trait GenerativePort {
    /// Returns the reply text. Implementations may return an empty string;
    /// the chat controller treats that as a failure.
    async fn generate(&self, req: GenerateRequest) -> Result<String>;
}

// ─── Password Reset Port ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetRequest {
    pub email: String,
}

#[async_trait(?Send)]
pub trait PasswordResetPort {
    /// Returns the confirmation message supplied by the server, if any
    async fn request_reset(&self, req: ResetRequest) -> Result<Option<String>>;
}

// ─── Image Host Port ─────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub credentials: UploadCredentials,
}

#[async_trait(?Send)]
pub trait ImageHostPort {
    /// Uploads the file and returns the secure retrieval URL
    async fn upload(&self, req: UploadRequest) -> Result<String>;
}

// ─── Summary Port ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    pub link: String,
}

#[async_trait(?Send)]
pub trait SummaryPort {
    /// Returns the analysis text for the image at `req.link`
    async fn summarize(&self, req: SummaryRequest) -> Result<String>;
}

// ─── Dictation Port ──────────────────────────────────────────

/// Platform speech recognition. Results arrive asynchronously as
/// `DictationTranscript` / `DictationEnded` events on the event bus.
pub trait DictationPort {
    /// Whether the platform offers speech recognition at all
    fn is_available(&self) -> bool;

    /// Begin a non-continuous session with interim results
    fn start(&self) -> Result<()>;

    fn stop(&self);
}

//! Chat session controller.
//!
//! Owns the transcript and the request lifecycle for the nutrition assistant:
//! 1. `begin_submit` appends the user utterance and produces a request
//! 2. the caller sends it through a `GenerativePort`
//! 3. `finish_submit` appends the reply, or the fallback notice on failure
//!
//! Each call is stateless from the service's point of view; no history is sent.

use std::rc::Rc;
use nutri_types::{
    NutriError, Result,
    config::ChatConfig,
    message::Message,
};
use crate::ports::{DictationPort, GenerateRequest, GenerativePort};

pub const FALLBACK_REPLY: &str = "Oops, something went wrong. Try again?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Ready,
    /// No generative client could be configured; terminal for this session
    Unavailable(String),
}

pub struct ChatSession {
    config: Rc<ChatConfig>,
    transcript: Vec<Message>,
    /// Text in the input field; dictation replaces it wholesale
    pub input: String,
    loading: bool,
    last_error: Option<String>,
    dictation_active: bool,
    availability: Availability,
}

impl ChatSession {
    /// A ready session, opened with a locally synthesized greeting.
    pub fn new(config: Rc<ChatConfig>, user_name: Option<&str>) -> Self {
        let greeting = Message::greeting(config.greeting(user_name));
        Self {
            config,
            transcript: vec![greeting],
            input: String::new(),
            loading: false,
            last_error: None,
            dictation_active: false,
            availability: Availability::Ready,
        }
    }

    /// A session whose client failed to initialize. Shows a single error entry
    /// and never issues requests.
    pub fn unavailable(config: Rc<ChatConfig>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            config,
            transcript: vec![Message::error(format!("Error: {}", reason))],
            input: String::new(),
            loading: false,
            last_error: Some(reason.clone()),
            dictation_active: false,
            availability: Availability::Unavailable(reason),
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_dictating(&self) -> bool {
        self.dictation_active
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn is_ready(&self) -> bool {
        self.availability == Availability::Ready
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Whether the send control should be enabled
    pub fn can_send(&self) -> bool {
        self.is_ready() && !self.loading && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate and record the utterance. Returns `None` (and changes nothing)
    /// when the utterance is blank, a request is pending, or the session is
    /// unavailable.
    pub fn begin_submit(&mut self, utterance: &str) -> Option<GenerateRequest> {
        let text = utterance.trim();
        if text.is_empty() {
            return None;
        }
        if self.loading {
            log::warn!("Chat submit ignored: a request is already pending");
            return None;
        }
        if !self.is_ready() {
            return None;
        }

        self.transcript.push(Message::user(text));
        self.input.clear();
        self.loading = true;
        self.last_error = None;

        Some(GenerateRequest::new(&self.config, text))
    }

    /// Apply the outcome of the request produced by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<String>) {
        if !self.loading {
            log::warn!("Generation result arrived with no request pending; ignored");
            return;
        }
        self.loading = false;

        let outcome = result.and_then(|text| {
            if text.trim().is_empty() {
                Err(NutriError::EmptyResponse)
            } else {
                Ok(text)
            }
        });

        match outcome {
            Ok(text) => self.transcript.push(Message::reply(text)),
            Err(e) => {
                log::error!("Generation failed: {}", e);
                self.last_error = Some(e.to_string());
                self.transcript.push(Message::fallback(FALLBACK_REPLY));
            }
        }
    }

    /// Submit the utterance and wait for the reply. Returns `false` when the
    /// submission was rejected by the preconditions.
    pub async fn submit(&mut self, utterance: &str, llm: &dyn GenerativePort) -> bool {
        let Some(req) = self.begin_submit(utterance) else {
            return false;
        };
        let result = llm.generate(req).await;
        self.finish_submit(result);
        true
    }

    /// Submit whatever is currently in the input field
    pub fn begin_submit_input(&mut self) -> Option<GenerateRequest> {
        let text = std::mem::take(&mut self.input);
        let req = self.begin_submit(&text);
        if req.is_none() {
            self.input = text;
        }
        req
    }

    // ─── Dictation ───────────────────────────────────────────

    /// Start or stop speech input. No-op when the platform has no recognizer.
    pub fn toggle_dictation(&mut self, dictation: &dyn DictationPort) {
        if !dictation.is_available() {
            return;
        }
        if self.dictation_active {
            dictation.stop();
            self.dictation_active = false;
            return;
        }
        match dictation.start() {
            Ok(()) => self.dictation_active = true,
            Err(e) => {
                log::error!("Could not start dictation: {}", e);
                self.dictation_active = false;
            }
        }
    }

    /// Interim and final results replace the pending input
    pub fn apply_transcript(&mut self, text: impl Into<String>) {
        if self.dictation_active {
            self.input = text.into();
        }
    }

    pub fn dictation_ended(&mut self) {
        self.dictation_active = false;
    }
}

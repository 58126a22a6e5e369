use serde::{Deserialize, Serialize};

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Why an entry is in the transcript. Drives rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Typed or dictated by the user
    Utterance,
    /// Locally synthesized welcome text
    Greeting,
    /// Text returned by the generative service
    Reply,
    /// Fixed notice appended when a generation request fails
    Fallback,
    /// The session could not be configured
    Error,
}

/// A single transcript entry. Never mutated once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub kind: MessageKind,
    pub created_at: String,
}

impl Message {
    fn new(text: impl Into<String>, sender: Sender, kind: MessageKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            kind,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, MessageKind::Utterance)
    }

    pub fn reply(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant, MessageKind::Reply)
    }

    pub fn greeting(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant, MessageKind::Greeting)
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant, MessageKind::Fallback)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant, MessageKind::Error)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

//! UI-level state that the controllers do not own: which screen is shown and
//! per-view presentation caches.

use nutri_core::chat::ChatSession;
use nutri_core::reset::ResetForm;
use nutri_core::scan::ScanPipeline;
use nutri_types::message::Message;

use crate::markdown::MessageBody;

/// Canned prompts offered in the chat sidebar
pub const SUGGESTIONS: [&str; 6] = [
    "How many calories in an apple?",
    "Suggest a low-carb meal",
    "What are the benefits of spinach?",
    "How much protein in chicken?",
    "Healthy snack ideas?",
    "What's a good smoothie recipe?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Scan,
    ResetPassword,
}

impl Screen {
    pub fn all() -> [Screen; 3] {
        [Screen::Chat, Screen::Scan, Screen::ResetPassword]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Chat => "NutriChat AI",
            Screen::Scan => "Scan",
            Screen::ResetPassword => "Forgot Password",
        }
    }
}

/// Chat view presentation state.
///
/// The transcript is append-only, so rendered bodies are cached by position
/// and a length change is the only signal that new messages arrived.
pub struct ChatView {
    bodies: Vec<MessageBody>,
    scroll_to_latest: bool,
    pub show_suggestions: bool,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            scroll_to_latest: false,
            show_suggestions: true,
        }
    }

    /// Parse bodies for newly appended messages. Returns true when the
    /// transcript grew since the last call.
    pub fn sync(&mut self, transcript: &[Message]) -> bool {
        if transcript.len() < self.bodies.len() {
            log::debug!("Transcript shrank to {} entries; re-rendering", transcript.len());
            self.bodies.clear();
        }
        if transcript.len() == self.bodies.len() {
            return false;
        }
        let start = self.bodies.len();
        self.bodies
            .extend(transcript[start..].iter().map(MessageBody::for_message));
        self.scroll_to_latest = true;
        true
    }

    pub fn bodies(&self) -> &[MessageBody] {
        &self.bodies
    }

    /// Consume the pending scroll request
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_latest)
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

/// State visible to UI panels
pub struct UiState {
    pub screen: Screen,
    pub chat: ChatView,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Chat,
            chat: ChatView::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the app should schedule a timed repaint. Dictation callbacks and
/// toast timers publish events without waking egui; request tasks and the
/// file picker wake it themselves and are covered only while their
/// controller reports work in flight.
pub fn needs_polling(chat: &ChatSession, reset: &ResetForm, scan: &ScanPipeline) -> bool {
    chat.is_loading()
        || chat.is_dictating()
        || reset.is_pending()
        || scan.is_busy()
        || scan.toast().is_some()
}

use crate::{Result, upload::SelectedFile};

/// Events delivered to the UI thread.
/// Async tasks and browser callbacks emit these; the app drains them each frame
/// and feeds them to the owning controller.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The generative service answered (or failed)
    GenerationFinished { result: Result<String> },

    /// The reset endpoint answered; `Ok` carries the optional server message
    ResetFinished { result: Result<Option<String>> },

    /// The image host answered; `Ok` carries the secure URL
    UploadFinished { result: Result<String> },

    /// The summary endpoint answered; `Ok` carries the analysis text
    SummaryFinished { result: Result<String> },

    /// The file picker closed; `None` means the user cancelled
    FilePicked { file: Option<SelectedFile> },

    /// A file was chosen but its contents could not be read
    FileReadFailed { message: String },

    /// Interim or final speech-recognition transcript
    DictationTranscript { text: String },

    /// Speech recognition stopped
    DictationEnded,

    /// Speech recognition reported an error
    DictationError { message: String },

    /// The toast with this id has been on screen long enough
    ToastExpired { id: u64 },
}

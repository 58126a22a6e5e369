//! Upload-and-summarize pipeline.
//!
//! Explicit state machine:
//!
//! ```text
//! Idle ─select─▶ FileSelected ─upload─▶ Uploading ─ok─▶ Uploaded(url) ─▶ Summarizing ─ok─▶ Summarized
//!                     │                     │                                  │
//!                     └──── no creds ──▶ Errored ◀──────── err ────────────────┘
//! ```
//!
//! Entering `Uploaded` immediately starts the summary: `finish_upload` returns
//! the `SummaryRequest` the caller must send.

use nutri_types::{
    Result,
    config::UploadCredentials,
    upload::SelectedFile,
};
use crate::ports::{ImageHostPort, SummaryPort, SummaryRequest, UploadRequest};

pub const TOAST_DURATION_MS: u32 = 3000;

pub const INVALID_FILE: &str = "Please select a valid image file (e.g., JPG, PNG, GIF).";
pub const NO_FILE: &str = "Please select a file first.";
pub const FILE_READ_FAILED: &str = "Could not read the selected file";
pub const MISSING_CREDENTIALS: &str = "Cloudinary credentials are not configured. Please set \
    NUTRI_CLOUDINARY_CLOUD_NAME and NUTRI_CLOUDINARY_UPLOAD_PRESET at build time.";
pub const UPLOAD_TOAST: &str = "Image uploaded successfully! 🎉 Generating AI summary...";
pub const SUMMARY_TOAST: &str = "AI Summary generated successfully! 🎉";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    FileSelected,
    Uploading,
    Uploaded(String),
    Summarizing,
    Summarized,
    Errored,
}

impl ScanPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, ScanPhase::Uploading | ScanPhase::Uploaded(_) | ScanPhase::Summarizing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

pub struct ScanPipeline {
    credentials: Option<UploadCredentials>,
    phase: ScanPhase,
    file: Option<SelectedFile>,
    image_url: Option<String>,
    summary: Option<String>,
    error: Option<String>,
    toast: Option<Toast>,
    next_toast_id: u64,
}

impl ScanPipeline {
    pub fn new(credentials: Option<UploadCredentials>) -> Self {
        Self {
            credentials,
            phase: ScanPhase::Idle,
            file: None,
            image_url: None,
            summary: None,
            error: None,
            toast: None,
            next_toast_id: 0,
        }
    }

    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn can_upload(&self) -> bool {
        !self.is_busy() && self.file.is_some()
    }

    fn transition(&mut self, next: ScanPhase) {
        log::debug!("scan: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn show_toast(&mut self, text: &str) {
        self.next_toast_id += 1;
        self.toast = Some(Toast {
            id: self.next_toast_id,
            text: text.to_string(),
        });
    }

    /// Dismiss the toast if it is still the one that was scheduled
    pub fn expire_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.transition(ScanPhase::Errored);
    }

    /// Handle a file-picker result. `None` means the user cancelled.
    /// Returns `false` when the selection was ignored because a request is in flight.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> bool {
        if self.is_busy() {
            log::warn!("File selection ignored while {:?}", self.phase);
            return false;
        }

        match file {
            None => {
                self.file = None;
                if self.phase == ScanPhase::FileSelected {
                    self.transition(ScanPhase::Idle);
                }
            }
            Some(f) if !f.is_image() => {
                log::warn!("Rejected non-image file {} ({})", f.name, f.mime_type);
                self.file = None;
                self.toast = None;
                self.fail(INVALID_FILE.to_string());
            }
            Some(f) => {
                self.file = Some(f);
                self.image_url = None;
                self.summary = None;
                self.error = None;
                self.toast = None;
                self.transition(ScanPhase::FileSelected);
            }
        }
        true
    }

    /// A chosen file could not be loaded into memory. Treated like a rejected
    /// selection: the pending file is dropped, earlier results stay.
    pub fn file_read_failed(&mut self, detail: &str) -> bool {
        if self.is_busy() {
            log::warn!("File read failure ignored while {:?}", self.phase);
            return false;
        }
        self.file = None;
        self.toast = None;
        self.fail(format!("{}: {}", FILE_READ_FAILED, detail));
        true
    }

    /// Validate and start the upload. No request is produced when no file is
    /// selected or the upload credentials are missing.
    pub fn begin_upload(&mut self) -> Option<UploadRequest> {
        if self.is_busy() {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.fail(NO_FILE.to_string());
            return None;
        };
        let Some(credentials) = self.credentials.clone() else {
            log::error!("Upload attempted without image-host credentials");
            self.fail(MISSING_CREDENTIALS.to_string());
            return None;
        };

        self.error = None;
        self.toast = None;
        self.image_url = None;
        self.summary = None;
        self.transition(ScanPhase::Uploading);

        Some(UploadRequest { file, credentials })
    }

    /// Apply the upload outcome. On success the pipeline moves straight on to
    /// summarizing and returns the request to send.
    pub fn finish_upload(&mut self, result: Result<String>) -> Option<SummaryRequest> {
        if self.phase != ScanPhase::Uploading {
            log::warn!("Upload result ignored in phase {:?}", self.phase);
            return None;
        }

        match result {
            Ok(url) => {
                log::info!("Image uploaded: {}", url);
                self.file = None;
                self.image_url = Some(url.clone());
                self.show_toast(UPLOAD_TOAST);
                self.transition(ScanPhase::Uploaded(url));
                Some(self.start_summary())
            }
            Err(e) => {
                log::error!("Image upload failed: {}", e);
                self.image_url = None;
                self.summary = None;
                self.fail(format!("Failed to upload image: {}", e.detail()));
                None
            }
        }
    }

    fn start_summary(&mut self) -> SummaryRequest {
        let link = match &self.phase {
            ScanPhase::Uploaded(url) => url.clone(),
            _ => self.image_url.clone().unwrap_or_default(),
        };
        self.summary = None;
        self.error = None;
        self.transition(ScanPhase::Summarizing);
        SummaryRequest { link }
    }

    pub fn finish_summary(&mut self, result: Result<String>) {
        if self.phase != ScanPhase::Summarizing {
            log::warn!("Summary result ignored in phase {:?}", self.phase);
            return;
        }

        match result {
            Ok(analysis) => {
                self.summary = Some(analysis);
                self.show_toast(SUMMARY_TOAST);
                self.transition(ScanPhase::Summarized);
            }
            Err(e) => {
                log::error!("Summary generation failed: {}", e);
                self.summary = None;
                self.fail(format!("Failed to generate AI summary: {}", e.detail()));
            }
        }
    }

    /// Run upload then summary to completion. Returns `false` when the upload
    /// was rejected before any network call.
    pub async fn upload(&mut self, host: &dyn ImageHostPort, summarizer: &dyn SummaryPort) -> bool {
        let Some(req) = self.begin_upload() else {
            return false;
        };
        let uploaded = host.upload(req).await;
        if let Some(summary_req) = self.finish_upload(uploaded) {
            let summarized = summarizer.summarize(summary_req).await;
            self.finish_summary(summarized);
        }
        true
    }
}

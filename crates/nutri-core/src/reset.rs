//! Password-reset request form.

use nutri_types::Result;
use crate::ports::{PasswordResetPort, ResetRequest};

pub const DEFAULT_SUCCESS: &str = "Reset link sent! Check your email.";
pub const DEFAULT_FAILURE: &str = "Failed to send reset email.";
pub const EMAIL_REQUIRED: &str = "Please enter your email address.";

#[derive(Debug, Default)]
pub struct ResetForm {
    pub email: String,
    pending: bool,
    message: Option<String>,
    error: Option<String>,
}

impl ResetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Confirmation shown after a successful request
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_request(&mut self) -> Option<ResetRequest> {
        if self.pending {
            return None;
        }
        self.message = None;
        self.error = None;

        let email = self.email.trim();
        if email.is_empty() {
            self.error = Some(EMAIL_REQUIRED.to_string());
            return None;
        }

        self.pending = true;
        Some(ResetRequest {
            email: email.to_string(),
        })
    }

    pub fn finish_request(&mut self, result: Result<Option<String>>) {
        self.pending = false;
        match result {
            Ok(server_message) => {
                self.message = Some(
                    server_message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_SUCCESS.to_string()),
                );
                self.email.clear();
            }
            Err(e) => {
                log::error!("Password reset request failed: {}", e);
                self.error = Some(
                    e.server_message()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or(DEFAULT_FAILURE)
                        .to_string(),
                );
            }
        }
    }

    /// Send the request for the current email and wait for the answer.
    pub async fn submit(&mut self, port: &dyn PasswordResetPort) -> bool {
        let Some(req) = self.begin_request() else {
            return false;
        };
        let result = port.request_reset(req).await;
        self.finish_request(result);
        true
    }
}

//! Password-reset endpoint adapter (`POST /auth/forgot-password`).

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use nutri_core::ports::{PasswordResetPort, ResetRequest};
use nutri_types::{NutriError, Result};

pub struct HttpPasswordReset {
    endpoint: String,
}

impl HttpPasswordReset {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// Both success and error bodies carry an optional `message`
#[derive(Deserialize, Default)]
pub struct MessageBody {
    pub message: Option<String>,
}

#[async_trait(?Send)]
impl PasswordResetPort for HttpPasswordReset {
    async fn request_reset(&self, req: ResetRequest) -> Result<Option<String>> {
        let response = Request::post(&self.endpoint)
            .json(&req)
            .map_err(|e| NutriError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| NutriError::Network(e.to_string()))?;

        // A body that is not JSON just means "no message"
        let body: MessageBody = response.json().await.unwrap_or_default();

        if !response.ok() {
            return Err(NutriError::Http {
                status: response.status(),
                message: body.message,
            });
        }

        Ok(body.message)
    }
}

//! Image-summary endpoint adapter: `POST {link}` → `{analysis}`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use nutri_core::ports::{SummaryPort, SummaryRequest};
use nutri_types::{NutriError, Result};

pub struct HttpSummary {
    endpoint: String,
}

impl HttpSummary {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct SummaryBody {
    pub analysis: Option<String>,
    pub message: Option<String>,
}

#[async_trait(?Send)]
impl SummaryPort for HttpSummary {
    async fn summarize(&self, req: SummaryRequest) -> Result<String> {
        let response = Request::post(&self.endpoint)
            .json(&req)
            .map_err(|e| NutriError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| NutriError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body: SummaryBody = match response.json().await {
            Ok(b) => b,
            Err(e) if ok => return Err(NutriError::MalformedResponse(e.to_string())),
            Err(_) => SummaryBody::default(),
        };

        interpret(ok, status, body)
    }
}

/// Map a decoded reply to the analysis text or an error
pub fn interpret(ok: bool, status: u16, body: SummaryBody) -> Result<String> {
    if !ok {
        return Err(NutriError::Http {
            status,
            message: Some(body.message.unwrap_or_else(|| "Unknown error".to_string())),
        });
    }
    body.analysis
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| NutriError::MalformedResponse("response has no analysis".to_string()))
}

//! Gemini `generateContent` adapter.
//!
//! Sends one stateless request per utterance: persona as `systemInstruction`,
//! the utterance as the only `contents` turn, plus the fixed decoding and
//! safety settings. Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use nutri_core::ports::{GenerateRequest, GenerativePort};
use nutri_types::{NutriError, Result};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Fails when no API key is configured; the chat screen then stays unavailable.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                NutriError::Config(
                    "Gemini API key is not configured (set NUTRI_GEMINI_API_KEY)".to_string(),
                )
            })?;
        Ok(Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            self.api_key
        )
    }
}

#[async_trait(?Send)]
impl GenerativePort for GeminiProvider {
    async fn generate(&self, req: GenerateRequest) -> Result<String> {
        let url = self.endpoint(&req.model);
        let body = build_request_body(&req);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| NutriError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| NutriError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(NutriError::Generation(format!(
                "HTTP {}: {}",
                status,
                api_error_message(&text).unwrap_or(text)
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| NutriError::MalformedResponse(e.to_string()))?;

        parse_response(data)
    }
}

/// Request body in the `generateContent` wire format
pub fn build_request_body(req: &GenerateRequest) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": req.system_instruction }],
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": req.prompt }],
        }],
        "generationConfig": req.generation,
        "safetySettings": req.safety,
    })
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    prompt_feedback: Option<ApiPromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    content: Option<ApiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPromptFeedback {
    block_reason: Option<String>,
}

/// Extract the reply text. Blocked prompts and missing candidates are errors;
/// an empty text is returned as-is for the controller to judge.
pub fn parse_response(data: Value) -> Result<String> {
    let api: ApiResponse = serde_json::from_value(data)
        .map_err(|e| NutriError::MalformedResponse(e.to_string()))?;

    if let Some(reason) = api.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(NutriError::Generation(format!("Prompt blocked: {}", reason)));
    }

    let candidate = api
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| NutriError::Generation("No candidates in response".to_string()))?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") && candidate.content.is_none() {
        return Err(NutriError::Generation("Response blocked by safety settings".to_string()));
    }

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}

/// `{"error": {"message": "..."}}` as returned on non-2xx
fn api_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(String::from)
}

//! LLM (Gemini) API client module
//!
//! Encapsulates the single `generateContent` call used to summarize a review.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::AppConfig;
use crate::errors::{ReviewError, SummaryFailure};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating review summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    model_name: String,
    api_base: String,
    temperature: f32,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: String,
        model_name: String,
        api_base: String,
        temperature: f32,
    ) -> Result<Self, ReviewError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ReviewError::Config(format!("Failed to build Gemini HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            model_name,
            api_base: api_base.trim_end_matches('/').to_string(),
            temperature,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ReviewError> {
        Self::new(
            config.google_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_api_base.clone(),
            config.temperature,
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model_name
        )
    }

    /// Sends `prompt` once and returns the generated text with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryFailure`] describing why no summary was produced. The call is
    /// never retried.
    pub async fn generate_summary(&self, prompt: &str) -> Result<String, SummaryFailure> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating summary with {} ({} chars, ~{} tokens)",
            self.model_name,
            prompt.chars().count(),
            estimate_tokens(prompt)
        );

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": self.temperature
            }
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(classify_error_status(status, error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummaryFailure::MalformedResponse(format!("Failed to parse Gemini response: {e}"))
        })?;

        if let Some(usage) = response_json.get("usageMetadata") {
            debug!("Gemini usage: {}", usage);
        }

        let text = extract_text(&response_json)?;
        let summary = text.trim();
        if summary.is_empty() {
            return Err(SummaryFailure::EmptyResponse);
        }
        Ok(summary.to_string())
    }
}

fn classify_error_status(status: StatusCode, body: String) -> SummaryFailure {
    if status == StatusCode::TOO_MANY_REQUESTS || body.contains("RESOURCE_EXHAUSTED") {
        warn!("Gemini quota exceeded (status {status})");
        return SummaryFailure::QuotaExceeded(body);
    }
    SummaryFailure::Service {
        status: status.as_u16(),
        body,
    }
}

/// Pull the generated text out of a `generateContent` response body.
pub(crate) fn extract_text(response_json: &Value) -> Result<String, SummaryFailure> {
    if let Some(reason) = response_json
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .and_then(Value::as_str)
    {
        return Err(SummaryFailure::Blocked(reason.to_string()));
    }

    let candidate = response_json
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .ok_or_else(|| SummaryFailure::MalformedResponse("No candidates in response".to_string()))?;

    let parts: Vec<&str> = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter(|p| !p.get("thought").and_then(Value::as_bool).unwrap_or(false))
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if parts.is_empty() {
        let finish_reason = candidate
            .get("finishReason")
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN");
        if BLOCKING_FINISH_REASONS.contains(&finish_reason) {
            return Err(SummaryFailure::Blocked(finish_reason.to_string()));
        }
        return Err(SummaryFailure::MalformedResponse(format!(
            "No text in response (finish reason {finish_reason})"
        )));
    }

    Ok(parts.concat())
}

use async_trait::async_trait;
use tracing::warn;

use crate::ai::LlmClient;
use crate::core::config::AppConfig;
use crate::errors::{ReviewError, SummaryFailure};
use crate::prompt::build_summary_prompt;

/// Turns one review body into a short summary.
///
/// A blank `Ok` value is treated by the run as [`SummaryFailure::EmptyResponse`].
#[async_trait]
pub trait Summarize {
    async fn summarize(&self, raw_text: &str) -> Result<String, SummaryFailure>;
}

/// Summarizer backed by the Gemini API: truncate, fill the template, call once.
pub struct ReviewSummarizer {
    client: LlmClient,
}

impl ReviewSummarizer {
    #[must_use]
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ReviewError> {
        Ok(Self::new(LlmClient::from_config(config)?))
    }
}

#[async_trait]
impl Summarize for ReviewSummarizer {
    async fn summarize(&self, raw_text: &str) -> Result<String, SummaryFailure> {
        let prompt = build_summary_prompt(raw_text);
        self.client.generate_summary(&prompt).await.inspect_err(|e| {
            warn!("AI summarization failed: {}", e);
        })
    }
}

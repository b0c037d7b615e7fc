use thiserror::Error;

/// Errors that abort a summarization run.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to connect to the review database: {0}")]
    Connection(String),

    #[error("Failed to access the review database: {0}")]
    Database(String),
}

impl From<sqlx::Error> for ReviewError {
    fn from(error: sqlx::Error) -> Self {
        ReviewError::Database(error.to_string())
    }
}

/// Why a single review produced no summary. The run skips the review and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryFailure {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Gemini quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Gemini API error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),

    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini returned an empty summary")]
    EmptyResponse,
}

impl From<reqwest::Error> for SummaryFailure {
    fn from(error: reqwest::Error) -> Self {
        SummaryFailure::Http(format!("Gemini API request failed: {error}"))
    }
}

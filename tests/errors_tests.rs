use std::error::Error;
use review_summarizer::errors::{ReviewError, SummaryFailure};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    assert_error(&ReviewError::Config("test error".to_string()));
    assert_error(&SummaryFailure::EmptyResponse);
}

#[test]
fn test_review_error_display() {
    let error = ReviewError::Config("GOOGLE_API_KEY environment variable is not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: GOOGLE_API_KEY environment variable is not set"
    );

    let error = ReviewError::Connection("Access denied".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to connect to the review database: Access denied"
    );

    let error = ReviewError::Database("Lock wait timeout".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access the review database: Lock wait timeout"
    );
}

#[test]
fn test_summary_failure_display() {
    let failure = SummaryFailure::Service {
        status: 503,
        body: "overloaded".to_string(),
    };
    assert_eq!(
        format!("{failure}"),
        "Gemini API error (status 503): overloaded"
    );

    assert_eq!(
        format!("{}", SummaryFailure::EmptyResponse),
        "Gemini returned an empty summary"
    );
    assert_eq!(
        format!("{}", SummaryFailure::QuotaExceeded("limit".to_string())),
        "Gemini quota exceeded: limit"
    );
}

#[test]
fn test_review_error_from_sqlx() {
    let err: ReviewError = sqlx::Error::RowNotFound.into();

    match err {
        ReviewError::Database(msg) => assert!(msg.contains("no rows")),
        _ => panic!("Unexpected error type"),
    }

    // Verifies the reqwest conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummaryFailure {
        SummaryFailure::from(err)
    }
}

/// review-summarizer - writes AI summaries for community reviews that do not have one yet.
///
/// A run is a single sequential pass:
/// 1. Select every row of `community_reviews` whose `ai_summary` is NULL
/// 2. Ask Gemini for a 3-5 line summary of each review body
/// 3. Write each summary back and commit it before moving on
///
/// Reviews whose summarization fails are left untouched and picked up again by the next
/// run, since the selection only looks at NULL summaries.
///
/// # Architecture
///
/// The system uses:
/// - sqlx for the `MySQL` session
/// - reqwest for the Gemini `generateContent` API
/// - Tokio for async runtime (current-thread, one request at a time)
///
/// # Example
///
/// ```no_run
/// use review_summarizer::core::config::AppConfig;
/// use review_summarizer::store::MySqlReviewStore;
/// use review_summarizer::worker::{ReviewSummarizer, run_session};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     review_summarizer::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let summarizer = ReviewSummarizer::from_config(&config)?;
///     let store = MySqlReviewStore::connect(&config.database).await?;
///
///     // Closes the session once the run is over, on success or failure
///     let report = run_session(store, &summarizer).await?;
///     println!("{} stored, {} skipped", report.stored, report.skipped);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod store;
pub mod worker;

pub use errors::{ReviewError, SummaryFailure};

/// Log filter built from `RUST_LOG`-style directives, falling back to `info` when they
/// are missing or invalid.
#[must_use]
pub fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Configure human-readable logging for command-line runs.
///
/// The level comes from `RUST_LOG` (e.g. `RUST_LOG=debug` shows usage metadata and
/// per-update row counts), defaulting to INFO. Calling it again after a subscriber is
/// installed leaves the existing one in place.
///
/// # Example
///
/// ```
/// review_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let directives = std::env::var("RUST_LOG").ok();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(log_filter(directives.as_deref()));

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

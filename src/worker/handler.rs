use tracing::{info, warn};

use super::summarize::Summarize;
use crate::core::models::RunReport;
use crate::errors::{ReviewError, SummaryFailure};
use crate::store::ReviewStore;

/// Summarize every review that has no summary yet, one at a time.
///
/// Each successful summary is written and committed before the next review is
/// attempted. A summarization failure or a blank summary skips that review; a database failure ends the
/// run with the error, leaving earlier commits in place.
///
/// # Errors
///
/// Returns an error if pending reviews cannot be read or a summary cannot be stored.
pub async fn run_pending<S, M>(store: &mut S, summarizer: &M) -> Result<RunReport, ReviewError>
where
    S: ReviewStore + Send + ?Sized,
    M: Summarize + Sync + ?Sized,
{
    let reviews = store.fetch_pending().await?;

    let mut report = RunReport {
        pending: reviews.len(),
        ..RunReport::default()
    };

    if reviews.is_empty() {
        info!("No new reviews to summarize");
        return Ok(report);
    }

    info!("Summarizing {} review(s)", report.pending);

    for review in reviews {
        info!("Review {}: attempting summary", review.id);

        let outcome = summarizer
            .summarize(&review.raw_text)
            .await
            .and_then(|summary| {
                if summary.trim().is_empty() {
                    Err(SummaryFailure::EmptyResponse)
                } else {
                    Ok(summary)
                }
            });

        match outcome {
            Ok(summary) => {
                store.store_summary(review.id, &summary).await?;
                report.stored += 1;
                info!("Review {}: summary stored", review.id);
            }
            Err(failure) => {
                report.skipped += 1;
                warn!("Review {}: summary failed, skipping ({})", review.id, failure);
            }
        }
    }

    info!(
        "Finished summarizing: {} stored, {} skipped of {}",
        report.stored, report.skipped, report.pending
    );

    Ok(report)
}

/// Run [`run_pending`] and close the store afterwards, whether or not the run succeeded.
///
/// # Errors
///
/// Returns the run's error. A failure to close is only logged.
pub async fn run_session<S, M>(mut store: S, summarizer: &M) -> Result<RunReport, ReviewError>
where
    S: ReviewStore + Send,
    M: Summarize + Sync + ?Sized,
{
    let outcome = run_pending(&mut store, summarizer).await;

    if let Err(e) = store.close().await {
        warn!("Failed to close database session cleanly: {}", e);
    }

    outcome
}

use std::process::ExitCode;

use anyhow::{Context, Result};
use review_summarizer::core::config::AppConfig;
use review_summarizer::core::models::RunReport;
use review_summarizer::store::MySqlReviewStore;
use review_summarizer::worker::{ReviewSummarizer, run_session};
use tracing::{error, info};

async fn run() -> Result<RunReport> {
    // The API key is checked here, before any database connection is attempted.
    let config = AppConfig::from_env().context("Configuration error")?;
    let summarizer =
        ReviewSummarizer::from_config(&config).context("Failed to set up the Gemini client")?;

    let store = MySqlReviewStore::connect(&config.database)
        .await
        .context("Database connection failed")?;
    info!("Database connected, starting AI summarization");

    run_session(store, &summarizer)
        .await
        .context("Summarization run aborted")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env file: {e}");
    }
    review_summarizer::setup_logging();

    match run().await {
        Ok(report) if report.is_empty() => {
            info!("Nothing to summarize, exiting");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            info!("All AI summarization work is complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

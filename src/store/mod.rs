//! Persistence for community reviews

pub mod mysql;

use async_trait::async_trait;

use crate::core::models::ReviewRecord;
use crate::errors::ReviewError;

pub use mysql::MySqlReviewStore;

/// Storage the summarization run reads pending reviews from and writes summaries to.
#[async_trait]
pub trait ReviewStore {
    /// All reviews whose `ai_summary` is still unset, in the order the store returns them.
    async fn fetch_pending(&mut self) -> Result<Vec<ReviewRecord>, ReviewError>;

    /// Persist `summary` for review `id` and commit before returning.
    async fn store_summary(&mut self, id: i64, summary: &str) -> Result<(), ReviewError>;

    /// Release the session.
    async fn close(self) -> Result<(), ReviewError>
    where
        Self: Sized;
}

use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};
use tracing::{debug, info};

use super::ReviewStore;
use crate::core::config::DatabaseConfig;
use crate::core::models::ReviewRecord;
use crate::errors::ReviewError;

const SELECT_PENDING_SQL: &str =
    "SELECT id, raw_text FROM community_reviews WHERE ai_summary IS NULL";

const UPDATE_SUMMARY_SQL: &str = "UPDATE community_reviews SET ai_summary = ? WHERE id = ?";

/// A single MySQL session over the `community_reviews` table.
pub struct MySqlReviewStore {
    conn: MySqlConnection,
}

impl MySqlReviewStore {
    /// Open the session.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Connection`] if the server is unreachable or rejects the
    /// credentials.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ReviewError> {
        let url = config.connect_url()?;
        info!("Connecting to {}", config.redacted_url());

        let conn = MySqlConnection::connect(&url)
            .await
            .map_err(|e| ReviewError::Connection(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl ReviewStore for MySqlReviewStore {
    async fn fetch_pending(&mut self) -> Result<Vec<ReviewRecord>, ReviewError> {
        let rows: Vec<(i64, Option<String>)> = sqlx::query_as(SELECT_PENDING_SQL)
            .fetch_all(&mut self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, raw_text)| ReviewRecord {
                id,
                raw_text: raw_text.unwrap_or_default(),
            })
            .collect())
    }

    async fn store_summary(&mut self, id: i64, summary: &str) -> Result<(), ReviewError> {
        let mut tx = self.conn.begin().await?;
        let result = sqlx::query(UPDATE_SUMMARY_SQL)
            .bind(summary)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!(
            "Updated review {} ({} row(s) affected)",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    async fn close(self) -> Result<(), ReviewError> {
        self.conn.close().await?;
        debug!("Database session closed");
        Ok(())
    }
}

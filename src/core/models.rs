/// One row of `community_reviews` that still needs a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub id: i64,
    pub raw_text: String,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Reviews selected with `ai_summary IS NULL`.
    pub pending: usize,
    /// Summaries written and committed.
    pub stored: usize,
    /// Reviews left untouched after a summarization failure.
    pub skipped: usize,
}

impl RunReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending == 0
    }
}

//! Summarization run over pending reviews

pub mod handler;
pub mod summarize;

// Re-export the main entry points for convenience
pub use handler::{run_pending, run_session};
pub use summarize::{ReviewSummarizer, Summarize};

/// Maximum number of characters of a review sent to the model
pub const MAX_REVIEW_CHARS: usize = 15_000;

/// Placeholder replaced by the (truncated) review body
const REVIEW_PLACEHOLDER: &str = "{review_text}";

/// Instruction template for review summaries
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = "\
You are an expert reviewer of PC hardware components.
The following text is the body of an expert review posted on Quasarzone (퀘이사존), a PC hardware community site.
Summarize the key points of this review (strengths, weaknesses, key performance points, conclusion) in 3 to 5 lines.
Do not prefix the output with a label such as \"Summary:\" or \"요약:\"; write only the summary itself, in the same language as the review.

--- Original review ---
{review_text}
--- Summary ---
";

/// Keep at most `MAX_REVIEW_CHARS` characters from the start of the review.
/// Counts characters rather than bytes so multi-byte text is never split mid-character.
#[must_use]
pub fn truncate_review(raw: &str) -> &str {
    match raw.char_indices().nth(MAX_REVIEW_CHARS) {
        Some((byte_idx, _)) => &raw[..byte_idx],
        None => raw,
    }
}

/// Build the full prompt for one review
#[must_use]
pub fn build_summary_prompt(raw: &str) -> String {
    SUMMARIZE_PROMPT_TEMPLATE.replacen(REVIEW_PLACEHOLDER, truncate_review(raw), 1)
}

//! Token estimation for assembled prompts.
//!
//! Uses a character-based heuristic: ~4 bytes per token. Accurate within
//! roughly 10% for BPE tokenizers on English text, which is enough to
//! report prompt size.

/// Estimate the token count for a string.
///
/// Heuristic: 1 token ≈ 4 bytes. Rounds up.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

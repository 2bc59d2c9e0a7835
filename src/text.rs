//! Tokenizer: raw text to lowercase word tokens
//!
//! A token is a maximal run of ASCII letters. Every other character
//! (digits, punctuation, whitespace, non-ASCII letters) separates tokens.

/// Split `text` into lowercase alphabetic tokens, in order of appearance.
///
/// Duplicates are kept. Empty input, or input with no letters at all,
/// yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| !run.is_empty())
        .map(|run| run.to_ascii_lowercase())
        .collect()
}

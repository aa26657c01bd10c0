//! Text normalization for scoring input.
//!
//! Every string entering the engine passes through [`normalize`] before any
//! statistics are computed, so the tokenizer only ever sees lowercase
//! ASCII-alphanumeric words separated by single spaces.

/// Normalize raw text for scoring.
///
/// Lowercases, replaces every character that is not an ASCII letter, digit,
/// or whitespace with a space, collapses whitespace runs, and trims.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split normalized text into terms.
///
/// Expects input already passed through [`normalize`]; empty input yields an
/// empty vector.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

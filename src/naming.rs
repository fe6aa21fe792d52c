//! Branch-name derivation and sanitization.
//!
//! [`derive`] turns a free-text description into a short identifier;
//! [`sanitize`] is the single normalization step every name passes through;
//! [`clamp`] enforces the byte cap.

use tracing::warn;

use crate::models::Truncation;

/// Words dropped from descriptions before picking the meaningful ones.
pub const STOP_WORDS: &[&str] = &[
    // articles, pronouns, determiners
    "i", "a", "an", "the", "this", "that", "these", "those", "my", "your", "our", "their",
    // prepositions and conjunctions
    "to", "for", "of", "in", "on", "at", "by", "with", "from", "and", "or", "but",
    // be / have / do
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    // modals
    "will", "would", "should", "could", "can", "may", "might", "must", "shall",
    // generic verbs
    "want", "need", "add", "get", "set",
];

const MIN_WORD_LEN: usize = 3;

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Derive a candidate short identifier from a feature description.
///
/// Keeps words of three or more characters, plus shorter words written as an
/// uppercase acronym in the description ("AI", "UX"). Four meaningful words
/// are kept whole; any other count is cut to the first three. When nothing
/// meaningful survives, the first three segments of the sanitized description
/// are used instead. The result is sanitized but not yet length-clamped and
/// may be empty for descriptions with no alphanumerics at all.
pub fn derive(description: &str) -> String {
    let cleaned: String = description
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let meaningful: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .filter(|word| word.len() >= MIN_WORD_LEN || is_acronym_in(word, description))
        .collect();

    let joined = if meaningful.is_empty() {
        sanitize(description)
            .split('-')
            .take(3)
            .collect::<Vec<_>>()
            .join("-")
    } else {
        let keep = if meaningful.len() == 4 { 4 } else { 3 };
        meaningful
            .iter()
            .take(keep)
            .copied()
            .collect::<Vec<_>>()
            .join("-")
    };

    sanitize(&joined)
}

/// True if `word` appears fully uppercased as a standalone token of `original`.
fn is_acronym_in(word: &str, original: &str) -> bool {
    let upper = word.to_uppercase();
    original
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|token| token == upper)
}

/// Normalize any candidate into lowercase alphanumerics joined by single
/// hyphens, with no leading or trailing hyphen.
pub fn sanitize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Cut `name` to at most `max_bytes`, dropping a hyphen left dangling by the cut.
pub fn clamp(name: &str, max_bytes: usize) -> (String, Option<Truncation>) {
    if name.len() <= max_bytes {
        return (name.to_string(), None);
    }

    let mut end = max_bytes;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    let truncated = name[..end].trim_end_matches('-').to_string();

    warn!(
        "Branch name exceeded {} bytes; truncated '{}' ({} bytes) to '{}' ({} bytes)",
        max_bytes,
        name,
        name.len(),
        truncated,
        truncated.len()
    );

    let truncation = Truncation {
        original: name.to_string(),
        original_bytes: name.len(),
        truncated: truncated.clone(),
        truncated_bytes: truncated.len(),
    };
    (truncated, Some(truncation))
}

// Word and sentence splitting used by every analysis stage.
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9_]+").unwrap());

static SENTENCE_TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Lowercased runs of ASCII letters, digits and underscores.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits on runs of `.`, `!` or `?`. Entries are returned untrimmed; the ones
/// that are blank after trimming are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATOR
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

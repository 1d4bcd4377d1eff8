// Fixed word lists shared by the sentiment, frequency and topic-model stages.
// The three stop-word lists differ on purpose; each call site picks its own.
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love",
    "happy", "joy", "pleased", "satisfied", "best", "brilliant", "outstanding",
    "perfect", "positive", "success", "win", "achievement",
];

pub static NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry",
    "disappointed", "worst", "failure", "problem", "issue", "error", "wrong",
    "negative", "difficult", "hard", "struggle", "pain",
];

/// Stop words for the word-frequency ranking.
pub static FREQUENCY_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "as", "is", "was", "are", "were", "been", "be",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they",
];

/// Stop words for topic keywords: the frequency list plus interrogatives.
pub static TOPIC_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "as", "is", "was", "are", "were", "been", "be",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "when", "where", "why", "how",
];

/// Stop words for the LDA preprocessing pass: topic list plus quantifiers.
pub static LDA_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "as", "is", "was", "are", "were", "been", "be",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "when", "where", "why", "how", "all", "each", "every", "both", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "now",
];

pub static POSITIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());

pub static NEGATIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());

pub static FREQUENCY_STOP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FREQUENCY_STOP_WORDS.iter().copied().collect());

pub static TOPIC_STOP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TOPIC_STOP_WORDS.iter().copied().collect());

pub static LDA_STOP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LDA_STOP_WORDS.iter().copied().collect());

/// Content-word filter shared by every stop-word call site: longer than three
/// bytes and not in `stop_words`.
pub fn is_content_word(word: &str, stop_words: &HashSet<&'static str>) -> bool {
    word.len() > 3 && !stop_words.contains(word)
}

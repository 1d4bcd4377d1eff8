// Stop-word filtered word counts, ranked two ways: weighted topic keywords and
// raw word frequencies.
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::lexicon::{is_content_word, FREQUENCY_STOP_SET, TOPIC_STOP_SET};

pub const MAX_RANKED: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicKeyword {
    pub word: String,
    pub count: usize,
    /// Share of filtered words, in percent (capped at 100).
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Word counts in first-seen order.
#[derive(Debug, Default)]
struct Counter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl Counter {
    fn from_tokens<S: AsRef<str>>(tokens: &[S], stop_words: &HashSet<&'static str>) -> Self {
        let mut counter = Counter::default();
        for token in tokens {
            let word = token.as_ref();
            if !is_content_word(word, stop_words) {
                continue;
            }
            counter.total += 1;
            match counter.index.get(word) {
                Some(&slot) => counter.entries[slot].1 += 1,
                None => {
                    counter.index.insert(word.to_string(), counter.entries.len());
                    counter.entries.push((word.to_string(), 1));
                }
            }
        }
        counter
    }

    /// Top `n` by count. `sort_by` is stable, so equal counts keep first-seen order.
    fn top(mut self, n: usize) -> (Vec<(String, usize)>, usize) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(n);
        (self.entries, self.total)
    }
}

pub fn extract_topics<S: AsRef<str>>(tokens: &[S]) -> Vec<TopicKeyword> {
    let (ranked, total) = Counter::from_tokens(tokens, &TOPIC_STOP_SET).top(MAX_RANKED);
    ranked
        .into_iter()
        .map(|(word, count)| TopicKeyword {
            word: capitalize(&word),
            count,
            weight: (count as f64 / total as f64 * 100.0).min(100.0),
        })
        .collect()
}

pub fn word_frequency<S: AsRef<str>>(tokens: &[S]) -> Vec<WordFrequency> {
    let (ranked, _) = Counter::from_tokens(tokens, &FREQUENCY_STOP_SET).top(MAX_RANKED);
    ranked
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::tokenize;

    #[test]
    fn test_word_frequency_ranking() {
        let tokens = tokenize("rust rust rust cargo cargo borrow the and a");
        let freq = word_frequency(&tokens);
        assert_eq!(
            freq,
            vec![
                WordFrequency { word: "rust".into(), count: 3 },
                WordFrequency { word: "cargo".into(), count: 2 },
                WordFrequency { word: "borrow".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let tokens = tokenize("zebra apple mango apple zebra mango");
        let words: Vec<String> = word_frequency(&tokens).into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_topics_are_capitalized_and_weighted() {
        let tokens = tokenize("market market market growth");
        let topics = extract_topics(&tokens);
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].word, "Market");
        assert_eq!(topics[0].count, 3);
        assert!((topics[0].weight - 75.0).abs() < 1e-9);
        assert!((topics[1].weight - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_interrogatives_only_filtered_from_topics() {
        let tokens = tokenize("where where which which system");
        let topics: Vec<String> = extract_topics(&tokens).into_iter().map(|t| t.word).collect();
        assert_eq!(topics, vec!["System"]);

        let freq: Vec<String> = word_frequency(&tokens).into_iter().map(|w| w.word).collect();
        assert_eq!(freq, vec!["where", "which", "system"]);
    }

    #[test]
    fn test_lists_cap_at_ten_and_skip_short_words() {
        let text = "alpha bravo charlie delta echoes foxtrot golf hotel india juliet kilo lima mike \
                    november oscar papa quebec romeo sierra tango cat dog the";
        let tokens = tokenize(text);
        let freq = word_frequency(&tokens);
        let topics = extract_topics(&tokens);
        assert_eq!(freq.len(), MAX_RANKED);
        assert_eq!(topics.len(), MAX_RANKED);
        for w in &freq {
            assert!(w.word.len() > 3);
            assert!(!FREQUENCY_STOP_SET.contains(w.word.as_str()));
        }
        for t in &topics {
            let lower = t.word.to_lowercase();
            assert!(lower.len() > 3);
            assert!(!TOPIC_STOP_SET.contains(lower.as_str()));
        }
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<String> = Vec::new();
        assert!(extract_topics(&none).is_empty());
        assert!(word_frequency(&none).is_empty());
    }
}

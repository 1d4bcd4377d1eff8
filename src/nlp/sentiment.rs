// Sentiment analysis using a fixed positive/negative lexicon.
// Exact, case-insensitive membership only: no stemming, negation or intensifiers.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::{NEGATIVE_SET, POSITIVE_SET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Number of lexicon hits in a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconCounts {
    pub positive: usize,
    pub negative: usize,
}

impl LexiconCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// +1 when positive hits dominate, -1 when negative hits do, 0 on a tie.
    pub fn direction(&self) -> i32 {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub overall: Polarity,
    /// 0-100, 50 is neutral.
    pub score: u32,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

pub fn score<S: AsRef<str>>(tokens: &[S]) -> LexiconCounts {
    let mut counts = LexiconCounts::default();
    for token in tokens {
        let word = token.as_ref();
        if POSITIVE_SET.contains(word) {
            counts.positive += 1;
        }
        if NEGATIVE_SET.contains(word) {
            counts.negative += 1;
        }
    }
    counts
}

/// Turns lexicon counts into a polarity label, a 0-100 score and the
/// positive/negative/neutral split.
///
/// `positive` and `negative` split the lexicon hits between them while
/// `neutral` is the share of non-hit words in the whole text. Each percentage
/// is rounded on its own.
pub fn classify(counts: LexiconCounts, total_words: usize) -> SentimentResult {
    let pos = counts.positive as i64;
    let neg = counts.negative as i64;

    let (overall, score) = match counts.direction() {
        1 => (Polarity::Positive, (50 + 5 * (pos - neg)).min(100)),
        -1 => (Polarity::Negative, (50 - 5 * (neg - pos)).max(0)),
        _ => (Polarity::Neutral, 50),
    };

    let hits = counts.total();
    let (positive, negative, neutral) = if hits == 0 {
        (0.0, 0.0, 100.0)
    } else {
        let hits_f = hits as f64;
        let words = total_words.max(hits) as f64;
        (
            counts.positive as f64 / hits_f * 100.0,
            counts.negative as f64 / hits_f * 100.0,
            (words - hits_f) / words * 100.0,
        )
    };

    SentimentResult {
        overall,
        score: score as u32,
        positive: positive.round() as u32,
        negative: negative.round() as u32,
        neutral: neutral.round() as u32,
    }
}

pub fn analyze_sentiment<S: AsRef<str>>(tokens: &[S]) -> SentimentResult {
    classify(score(tokens), tokens.len())
}

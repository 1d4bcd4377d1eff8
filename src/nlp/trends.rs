// Sentiment direction across the document, one point per block of sentences.
use serde::{Deserialize, Serialize};

use super::sentiment::score;
use super::tokenizer::tokenize;

/// Target number of full segments; a remainder adds at most one more.
const SEGMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 1-based, in document order.
    pub segment: usize,
    /// 0 (negative), 50 (balanced) or 100 (positive).
    pub score: u32,
    pub positive: usize,
    pub negative: usize,
}

pub fn segment_size(sentence_count: usize) -> usize {
    (sentence_count / SEGMENTS).max(1)
}

pub fn analyze_trends<S: AsRef<str>>(sentences: &[S]) -> Vec<TrendPoint> {
    let size = segment_size(sentences.len());

    sentences
        .chunks(size)
        .enumerate()
        .map(|(i, block)| {
            let joined = block
                .iter()
                .map(AsRef::<str>::as_ref)
                .collect::<Vec<_>>()
                .join(" ");
            let counts = score(&tokenize(&joined));
            TrendPoint {
                segment: i + 1,
                score: (counts.direction() * 50 + 50) as u32,
                positive: counts.positive,
                negative: counts.negative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::split_sentences;

    #[test]
    fn test_segment_size() {
        assert_eq!(segment_size(0), 1);
        assert_eq!(segment_size(4), 1);
        assert_eq!(segment_size(5), 1);
        assert_eq!(segment_size(10), 2);
        assert_eq!(segment_size(29), 5);
    }

    #[test]
    fn test_one_segment_per_sentence_when_short() {
        let sentences = split_sentences("A good day. A bad day. Nothing much.");
        let trends = analyze_trends(&sentences);
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].score, 100);
        assert_eq!(trends[1].score, 0);
        assert_eq!(trends[2].score, 50);
        assert_eq!(
            trends.iter().map(|t| t.segment).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_remainder_makes_sixth_segment() {
        let text = (0..11).map(|i| format!("Sentence {}", i)).collect::<Vec<_>>().join(". ");
        let sentences = split_sentences(&text);
        assert_eq!(sentences.len(), 11);
        let trends = analyze_trends(&sentences);
        // size 2: five full blocks and one leftover sentence
        assert_eq!(trends.len(), 6);
        assert!(trends.iter().all(|t| [0, 50, 100].contains(&t.score)));
    }

    #[test]
    fn test_segment_counts_hits() {
        let sentences = vec!["great success", "one problem"];
        let trends = analyze_trends(&sentences);
        assert_eq!(trends[0].positive, 2);
        assert_eq!(trends[1].negative, 1);
    }

    #[test]
    fn test_no_sentences() {
        let none: Vec<&str> = Vec::new();
        assert!(analyze_trends(&none).is_empty());
    }
}

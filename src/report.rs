// One-shot analysis of a text blob: every lightweight view in a single report.
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::nlp::frequency::{extract_topics, word_frequency, TopicKeyword, WordFrequency};
use crate::nlp::phrases::{extract_key_phrases, KeyPhrase};
use crate::nlp::sentiment::{analyze_sentiment, SentimentResult};
use crate::nlp::summarization::summarize;
use crate::nlp::tokenizer::{split_sentences, tokenize};
use crate::nlp::trends::{analyze_trends, TrendPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Unicode scalar values, not bytes
    pub character_count: usize,
    pub summary: String,
    pub sentiment: SentimentResult,
    pub topics: Vec<TopicKeyword>,
    pub word_frequency: Vec<WordFrequency>,
    pub trends: Vec<TrendPoint>,
    pub key_phrases: Vec<KeyPhrase>,
}

/// Tokenizes once and runs every lightweight stage over the shared streams.
/// Deterministic; never fails.
pub fn analyze(text: &str) -> AnalysisReport {
    let started = Instant::now();
    let words = tokenize(text);
    let sentences = split_sentences(text);
    debug!(words = words.len(), sentences = sentences.len(), "text tokenized");

    let report = AnalysisReport {
        word_count: words.len(),
        sentence_count: sentences.len(),
        character_count: text.chars().count(),
        summary: summarize(text, &sentences),
        sentiment: analyze_sentiment(&words),
        topics: extract_topics(&words),
        word_frequency: word_frequency(&words),
        trends: analyze_trends(&sentences),
        key_phrases: extract_key_phrases(&sentences),
    };

    info!(
        overall = %report.sentiment.overall,
        elapsed_us = started.elapsed().as_micros() as u64,
        "analysis finished"
    );
    report
}

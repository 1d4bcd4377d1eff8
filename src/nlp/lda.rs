// Latent Dirichlet Allocation over a single block of text.
// Sentences (or character chunks when there are fewer sentences than topics)
// act as documents. Assignments are refined with collapsed Gibbs sampling and
// the state after the last sweep is read out directly, with no burn-in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::lexicon::{is_content_word, LDA_STOP_SET};
use super::tokenizer::{split_sentences, tokenize};
use crate::error::{EngineError, Result};

/// Sentences must be longer than this (in characters, after trimming) to
/// count as a document.
const MIN_SENTENCE_CHARS: usize = 10;

/// LDA run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdaConfig {
    /// Number of topics
    pub num_topics: usize,
    /// Words reported per topic
    pub num_words: usize,
    /// Document-topic prior
    pub alpha: f64,
    /// Topic-word prior
    pub beta: f64,
    /// Gibbs sweeps over every token
    pub iterations: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: 5,
            num_words: 10,
            alpha: 0.1,
            beta: 0.01,
            iterations: 20,
            seed: None,
        }
    }
}

impl LdaConfig {
    pub fn new(num_topics: usize) -> Self {
        Self {
            num_topics,
            ..Default::default()
        }
    }

    pub fn num_words(mut self, n: usize) -> Self {
        self.num_words = n;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_topics < 1 {
            return Err(EngineError::InvalidParameter(
                "number of topics must be at least 1".into(),
            ));
        }
        if self.num_words < 1 {
            return Err(EngineError::InvalidParameter(
                "number of words per topic must be at least 1".into(),
            ));
        }
        if self.iterations < 1 {
            return Err(EngineError::InvalidParameter(
                "iterations must be at least 1".into(),
            ));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(EngineError::InvalidParameter("alpha must be positive".into()));
        }
        if self.beta.is_nan() || self.beta <= 0.0 {
            return Err(EngineError::InvalidParameter("beta must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordProbability {
    pub word: String,
    pub probability: f64,
}

/// One inferred topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdaTopic {
    /// 1-based id from initialization; kept after sorting by coverage
    pub id: usize,
    /// Highest-probability words, best first
    pub words: Vec<WordProbability>,
    /// Percentage of documents with at least one token assigned to this topic
    pub coverage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicReport {
    /// Sorted by coverage, highest first
    pub topics: Vec<LdaTopic>,
    /// Documents that survived preprocessing
    pub documents: usize,
    pub vocabulary_size: usize,
}

impl TopicReport {
    /// True when the text was too short to model.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl fmt::Display for LdaTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic {} ({:.1}%): ", self.id, self.coverage)?;
        for (i, wp) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {:.1}%", wp.word, wp.probability * 100.0)?;
        }
        Ok(())
    }
}

/// Splits `text` into LDA documents.
///
/// Sentences longer than ten characters are used when there are at least
/// `num_topics` of them; otherwise the text is cut into `num_topics`
/// character chunks of `ceil(len / num_topics)` characters each.
pub fn build_documents(text: &str, num_topics: usize) -> Vec<&str> {
    let sentences: Vec<&str> = split_sentences(text)
        .into_iter()
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    if sentences.len() >= num_topics {
        return sentences;
    }

    warn!(
        sentences = sentences.len(),
        num_topics, "fewer sentences than topics, falling back to character chunks"
    );
    chunk_chars(text, num_topics)
}

fn chunk_chars(text: &str, pieces: usize) -> Vec<&str> {
    let char_count = text.chars().count();
    if char_count == 0 || pieces == 0 {
        return Vec::new();
    }
    let size = char_count.div_ceil(pieces);

    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .step_by(size)
        .chain(std::iter::once(text.len()))
        .collect();

    bounds.windows(2).map(|w| &text[w[0]..w[1]]).collect()
}

/// Tokenizes each document and drops stop words and short words. Documents
/// left empty are removed.
pub fn preprocess(documents: &[&str]) -> Vec<Vec<String>> {
    documents
        .iter()
        .map(|doc| {
            tokenize(doc)
                .into_iter()
                .filter(|w| is_content_word(w, &LDA_STOP_SET))
                .collect::<Vec<_>>()
        })
        .filter(|doc| !doc.is_empty())
        .collect()
}

/// Word ↔ index mapping, indices assigned in first-seen order.
#[derive(Debug, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut vocab = Vocabulary::default();
        for word in documents.iter().flatten() {
            if !vocab.index.contains_key(word) {
                vocab.index.insert(word.clone(), vocab.words.len());
                vocab.words.push(word.clone());
            }
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn id(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    fn encode(&self, documents: &[Vec<String>]) -> Vec<Vec<usize>> {
        documents
            .iter()
            .map(|doc| doc.iter().map(|w| self.index[w]).collect())
            .collect()
    }
}

/// Live sampler state. Every count table is kept in step with `assignments`.
struct GibbsSampler {
    num_topics: usize,
    vocab_size: usize,
    alpha: f64,
    beta: f64,
    /// [doc][position] -> word id
    docs: Vec<Vec<usize>>,
    /// [doc][position] -> topic
    assignments: Vec<Vec<usize>>,
    /// [doc][topic]
    doc_topic_counts: Vec<Vec<usize>>,
    /// [topic][word]
    topic_word_counts: Vec<Vec<usize>>,
    /// [doc]
    doc_topic_sums: Vec<usize>,
    /// [topic]
    topic_word_sums: Vec<usize>,
    /// Scratch space for per-topic weights
    weights: Vec<f64>,
}

impl GibbsSampler {
    /// Assigns every token a uniformly random topic.
    fn initialize<R: Rng + ?Sized>(
        docs: Vec<Vec<usize>>,
        vocab_size: usize,
        config: &LdaConfig,
        rng: &mut R,
    ) -> Self {
        let k = config.num_topics;
        let mut sampler = GibbsSampler {
            num_topics: k,
            vocab_size,
            alpha: config.alpha,
            beta: config.beta,
            assignments: Vec::with_capacity(docs.len()),
            doc_topic_counts: vec![vec![0; k]; docs.len()],
            topic_word_counts: vec![vec![0; vocab_size]; k],
            doc_topic_sums: vec![0; docs.len()],
            topic_word_sums: vec![0; k],
            weights: vec![0.0; k],
            docs,
        };

        for d in 0..sampler.docs.len() {
            let mut doc_assignments = Vec::with_capacity(sampler.docs[d].len());
            for i in 0..sampler.docs[d].len() {
                let topic = rng.gen_range(0..k);
                doc_assignments.push(topic);
                sampler.add(d, sampler.docs[d][i], topic);
            }
            sampler.assignments.push(doc_assignments);
        }
        sampler
    }

    fn add(&mut self, doc: usize, word: usize, topic: usize) {
        self.doc_topic_counts[doc][topic] += 1;
        self.topic_word_counts[topic][word] += 1;
        self.doc_topic_sums[doc] += 1;
        self.topic_word_sums[topic] += 1;
    }

    fn remove(&mut self, doc: usize, word: usize, topic: usize) {
        self.doc_topic_counts[doc][topic] -= 1;
        self.topic_word_counts[topic][word] -= 1;
        self.doc_topic_sums[doc] -= 1;
        self.topic_word_sums[topic] -= 1;
    }

    /// Smoothed P(word | topic).
    fn word_probability(&self, topic: usize, word: usize) -> f64 {
        (self.topic_word_counts[topic][word] as f64 + self.beta)
            / (self.topic_word_sums[topic] as f64 + self.beta * self.vocab_size as f64)
    }

    /// One pass over every token, document order then position order.
    fn sweep<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for d in 0..self.docs.len() {
            for i in 0..self.docs[d].len() {
                self.resample(d, i, rng);
            }
        }
    }

    fn resample<R: Rng + ?Sized>(&mut self, doc: usize, pos: usize, rng: &mut R) {
        let word = self.docs[doc][pos];
        let current = self.assignments[doc][pos];
        self.remove(doc, word, current);

        let doc_norm = self.doc_topic_sums[doc] as f64 + self.alpha * self.num_topics as f64;
        let mut total = 0.0;
        for t in 0..self.num_topics {
            let doc_topic = (self.doc_topic_counts[doc][t] as f64 + self.alpha) / doc_norm;
            let weight = doc_topic * self.word_probability(t, word);
            self.weights[t] = weight;
            total += weight;
        }

        let chosen = draw(&self.weights, rng.gen::<f64>() * total);
        self.assignments[doc][pos] = chosen;
        self.add(doc, word, chosen);
    }

    /// Percentage of documents with at least one token in `topic`.
    fn coverage(&self, topic: usize) -> f64 {
        if self.docs.is_empty() {
            return 0.0;
        }
        let hit = self
            .doc_topic_counts
            .iter()
            .filter(|row| row[topic] > 0)
            .count();
        hit as f64 / self.docs.len() as f64 * 100.0
    }

    fn topics(&self, vocab: &Vocabulary, num_words: usize) -> Vec<LdaTopic> {
        let mut topics: Vec<LdaTopic> = (0..self.num_topics)
            .map(|t| {
                let mut ranked: Vec<(usize, f64)> = (0..self.vocab_size)
                    .map(|w| (w, self.word_probability(t, w)))
                    .collect();
                ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
                ranked.truncate(num_words);

                LdaTopic {
                    id: t + 1,
                    words: ranked
                        .into_iter()
                        .filter_map(|(w, probability)| {
                            Some(WordProbability {
                                word: vocab.word(w)?.to_string(),
                                probability,
                            })
                        })
                        .collect(),
                    coverage: self.coverage(t),
                }
            })
            .collect();

        topics.sort_by(|a, b| b.coverage.partial_cmp(&a.coverage).unwrap_or(Ordering::Equal));
        topics
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        for (d, row) in self.doc_topic_counts.iter().enumerate() {
            assert_eq!(row.iter().sum::<usize>(), self.docs[d].len());
            assert_eq!(self.doc_topic_sums[d], self.docs[d].len());
        }
        for (t, row) in self.topic_word_counts.iter().enumerate() {
            let assigned = self.assignments.iter().flatten().filter(|&&a| a == t).count();
            assert_eq!(row.iter().sum::<usize>(), self.topic_word_sums[t]);
            assert_eq!(self.topic_word_sums[t], assigned);
        }
        assert!(self.assignments.iter().flatten().all(|&a| a < self.num_topics));
    }
}

/// Walks the cumulative mass of `weights`, returning the first topic at which
/// `target` is used up. A walk that never reaches zero lands on topic 0.
fn draw(weights: &[f64], target: f64) -> usize {
    let mut remaining = target;
    for (t, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return t;
        }
    }
    0
}

/// Runs LDA with a caller-supplied random source.
pub fn run_topic_model_with_rng<R: Rng + ?Sized>(
    text: &str,
    config: &LdaConfig,
    rng: &mut R,
) -> Result<TopicReport> {
    config.validate()?;
    let started = Instant::now();

    let documents = preprocess(&build_documents(text, config.num_topics));
    if documents.is_empty() {
        warn!("no documents left after filtering, text too short for topic modeling");
        return Ok(TopicReport::default());
    }

    let vocab = Vocabulary::build(&documents);
    let tokens: usize = documents.iter().map(Vec::len).sum();
    debug!(
        documents = documents.len(),
        vocabulary = vocab.len(),
        tokens,
        "lda corpus ready"
    );

    let mut sampler = GibbsSampler::initialize(vocab.encode(&documents), vocab.len(), config, rng);
    for _ in 0..config.iterations {
        sampler.sweep(rng);
    }

    let report = TopicReport {
        topics: sampler.topics(&vocab, config.num_words),
        documents: documents.len(),
        vocabulary_size: vocab.len(),
    };
    info!(
        topics = report.topics.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "topic model finished"
    );
    Ok(report)
}

/// Runs LDA seeded from `config.seed`, or from OS entropy when unset.
pub fn run_topic_model(text: &str, config: &LdaConfig) -> Result<TopicReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_topic_model_with_rng(text, config, &mut rng)
}

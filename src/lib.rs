// Text analytics engine: lexicon sentiment, keyword ranking, sentiment trend,
// key phrases, extractive summary and an LDA topic model.

pub mod engine;
pub mod error;
pub mod nlp;
pub mod report;
pub mod source;

pub use error::{EngineError, Result};
pub use nlp::lda::{run_topic_model, run_topic_model_with_rng, LdaConfig, LdaTopic, TopicReport};
pub use report::{analyze, AnalysisReport};

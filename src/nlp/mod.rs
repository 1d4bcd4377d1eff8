// NLP stages behind the text analysis engine
pub mod frequency;
pub mod lda;
pub mod lexicon;
pub mod phrases;
pub mod sentiment;
pub mod summarization;
pub mod tokenizer;
pub mod trends;

pub use frequency::{extract_topics, word_frequency};
pub use lda::{run_topic_model, run_topic_model_with_rng, LdaConfig, TopicReport};
pub use phrases::extract_key_phrases;
pub use sentiment::analyze_sentiment;
pub use summarization::summarize_text;
pub use tokenizer::{split_sentences, tokenize};
pub use trends::analyze_trends;

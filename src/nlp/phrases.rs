// Picks long sentences as representative phrases.
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_WORDS: usize = 10;
const MAX_PHRASES: usize = 5;
const MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseKind {
    #[serde(rename = "Main Point")]
    MainPoint,
    #[serde(rename = "Supporting Detail")]
    SupportingDetail,
    #[serde(rename = "Key Insight")]
    KeyInsight,
}

impl PhraseKind {
    fn for_position(index: usize) -> Self {
        match index {
            0 => PhraseKind::MainPoint,
            1 => PhraseKind::SupportingDetail,
            _ => PhraseKind::KeyInsight,
        }
    }
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhraseKind::MainPoint => "Main Point",
            PhraseKind::SupportingDetail => "Supporting Detail",
            PhraseKind::KeyInsight => "Key Insight",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPhrase {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: PhraseKind,
}

/// Sentences with more than ten space-separated words, first five in order.
///
/// Word counting splits on single spaces, so runs of spaces count as extra
/// (empty) words. The ellipsis is decided on the untrimmed sentence length.
pub fn extract_key_phrases<S: AsRef<str>>(sentences: &[S]) -> Vec<KeyPhrase> {
    sentences
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| s.split(' ').count() > MIN_WORDS)
        .take(MAX_PHRASES)
        .enumerate()
        .map(|(i, sentence)| {
            let mut text: String = sentence.trim().chars().take(MAX_CHARS).collect();
            if sentence.chars().count() > MAX_CHARS {
                text.push_str("...");
            }
            KeyPhrase {
                text,
                kind: PhraseKind::for_position(i),
            }
        })
        .collect()
}

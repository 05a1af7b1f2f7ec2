//! Sentence and word tokenization
//!
//! Sentences come from the Punkt model in `punkt`, trained on English, so
//! abbreviations like "Mr." or "e.g." do not end a sentence. Words come
//! from Unicode text segmentation (UAX #29). Punctuation stays a separate
//! token and whitespace is dropped, so `"dog."` yields `["dog", "."]`.
//! English contractions are split the Treebank way: `"don't"` yields
//! `["do", "n't"]` and `"John's"` yields `["John", "'s"]`.

use once_cell::sync::Lazy;
use punkt::params::Standard;
use punkt::{SentenceTokenizer, TrainingData};
use unicode_segmentation::UnicodeSegmentation;

static PUNKT_ENGLISH: Lazy<TrainingData> = Lazy::new(TrainingData::english);

/// Clitics split off the end of a word, longest first
const CONTRACTIONS: [&str; 7] = ["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Stateless tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into trimmed, non-empty sentences
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        SentenceTokenizer::<Standard>::new(text, &PUNKT_ENGLISH)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Split text into word and punctuation tokens
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for token in text.split_word_bounds().filter(|t| !t.trim().is_empty()) {
            match contraction_split(token) {
                Some(at) => {
                    tokens.push(&token[..at]);
                    tokens.push(&token[at..]);
                }
                None => tokens.push(token),
            }
        }
        tokens
    }
}

/// Byte offset where a trailing clitic starts, if `token` has one
fn contraction_split(token: &str) -> Option<usize> {
    CONTRACTIONS.iter().find_map(|suffix| {
        let at = token.len().checked_sub(suffix.len())?;
        let splits = at > 0 && token.is_char_boundary(at) && token[at..].eq_ignore_ascii_case(suffix);
        splits.then_some(at)
    })
}

/// Whether a token carries any letter or digit
pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Whether a token is a plain word: a letter, then letters, `'` or `-`
pub fn is_alphabetic_word(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-')
        }
        _ => false,
    }
}

//! Stopword filtering
//!
//! Stopword lists are the NLTK ones shipped by the `stop-words` crate. The
//! English set is loaded once per process and shared read-only through
//! [`english`].

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::get;

use super::language::Language;

static ENGLISH: Lazy<StopwordFilter> = Lazy::new(|| StopwordFilter::new(Language::English));

/// Process-wide English stopword filter
pub fn english() -> &'static StopwordFilter {
    &ENGLISH
}

/// Case-insensitive stopword membership test
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Lowercased stopwords
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for a language
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stopword_list())
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Build a filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Filter that matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add words to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check whether `word`, lowercased, is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

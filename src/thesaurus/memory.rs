//! In-memory thesaurus
//!
//! Useful when no WordNet dictionary is installed. Can be loaded from a JSON
//! object mapping words to lemma-name lists:
//!
//! ```json
//! { "quick": ["quick", "speedy", "fast"], "dog": ["dog", "domestic_dog"] }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Thesaurus;
use crate::error::{Result, TextToolError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryThesaurus {
    /// Lowercased word -> lemma names
    entries: FxHashMap<String, Vec<String>>,
}

impl MemoryThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    pub fn with_entry(mut self, word: &str, lemma_names: &[&str]) -> Self {
        self.insert(word, lemma_names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Insert or replace the lemma names for `word`
    pub fn insert(&mut self, word: &str, lemma_names: Vec<String>) {
        self.entries.insert(word.to_lowercase(), lemma_names);
    }

    /// Parse a JSON thesaurus
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: FxHashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut thesaurus = Self::new();
        for (word, names) in raw {
            thesaurus.insert(&word, names);
        }
        Ok(thesaurus)
    }

    /// Load a JSON thesaurus file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TextToolError::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Thesaurus for MemoryThesaurus {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let thesaurus = MemoryThesaurus::new().with_entry("Quick", &["quick", "speedy"]);

        assert_eq!(thesaurus.lemma_names("QUICK"), vec!["quick", "speedy"]);
        assert!(thesaurus.lemma_names("slow").is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let thesaurus =
            MemoryThesaurus::from_json_str(r#"{"Dog": ["dog", "domestic_dog"]}"#).unwrap();

        assert_eq!(thesaurus.len(), 1);
        assert_eq!(thesaurus.lemma_names("dog"), vec!["dog", "domestic_dog"]);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fox": ["fox", "dodger"]}}"#).unwrap();

        let thesaurus = MemoryThesaurus::from_json_file(file.path()).unwrap();
        assert_eq!(thesaurus.lemma_names("fox"), vec!["fox", "dodger"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = MemoryThesaurus::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, TextToolError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = MemoryThesaurus::from_json_file("/nonexistent/thesaurus.json").unwrap_err();
        assert!(matches!(err, TextToolError::Io { .. }));
    }
}

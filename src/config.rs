//! Configuration types
//!
//! All settings have defaults, so an empty JSON object is a valid config
//! file:
//!
//! ```json
//! {
//!   "language": "en",
//!   "wordnet_dir": "/usr/share/wordnet",
//!   "summarizer": { "sentence_count": 3, "damping": 0.85 },
//!   "keywords": { "top_n": 5 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextToolError};
use crate::nlp::Language;

/// Top-level tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Stopword and stemmer language
    pub language: Language,
    /// WordNet dictionary directory; searched for when unset
    pub wordnet_dir: Option<PathBuf>,
    /// JSON thesaurus used instead of WordNet when set
    pub thesaurus_file: Option<PathBuf>,
    pub summarizer: SummarizerConfig,
    pub keywords: KeywordConfig,
}

/// TextRank summarizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences in a summary
    pub sentence_count: usize,
    /// PageRank damping factor
    pub damping: f64,
    /// Convergence threshold on the L1 score change
    pub convergence_threshold: f64,
    pub max_iterations: usize,
    /// Drop stopwords before comparing sentences
    pub remove_stopwords: bool,
    /// Snowball-stem words before comparing sentences; off means lowercase only
    pub stem: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            sentence_count: 3,
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 100,
            remove_stopwords: false,
            stem: false,
        }
    }
}

/// Keyword-point extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// How many of the most frequent terms count as keywords
    ///
    /// The tool always uses 5. Other values are only reachable through a
    /// config file and exist for experimenting with the point filter.
    pub top_n: usize,
    /// Leave punctuation tokens out of the frequency count
    ///
    /// Off by default: `"."` is a token like any other and usually ranks
    /// among the keywords, which makes every full sentence a point.
    pub skip_punctuation: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            skip_punctuation: false,
        }
    }
}

impl ToolConfig {
    /// Read a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TextToolError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Check every setting, reporting all problems together
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let s = &self.summarizer;
        if s.sentence_count == 0 {
            problems.push("summarizer.sentence_count must be at least 1".to_string());
        }
        if !(s.damping > 0.0 && s.damping < 1.0) {
            problems.push(format!(
                "summarizer.damping must be in (0, 1), got {}",
                s.damping
            ));
        }
        if !(s.convergence_threshold > 0.0 && s.convergence_threshold.is_finite()) {
            problems.push(format!(
                "summarizer.convergence_threshold must be positive, got {}",
                s.convergence_threshold
            ));
        }
        if s.max_iterations == 0 {
            problems.push("summarizer.max_iterations must be at least 1".to_string());
        }
        if self.keywords.top_n == 0 {
            problems.push("keywords.top_n must be at least 1".to_string());
        }
        if let Some(path) = &self.thesaurus_file {
            if !path.is_file() {
                problems.push(format!("thesaurus_file {} does not exist", path.display()));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(TextToolError::Config(problems.join("; ")))
        }
    }
}

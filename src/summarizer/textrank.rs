//! Sentence-level TextRank
//!
//! Sentences are nodes of a complete weighted graph. Two sentences are
//! related by how many words they share, damped by their lengths:
//!
//! `w(s1, s2) = Σ_{t ∈ s1} count(t, s2) / (ln |s1| + ln |s2|)`
//!
//! Every sentence also links to itself with `w(s, s)`. Words are lowercased
//! alphabetic tokens; stemming and stopword removal are opt-in.
//!
//! PageRank over that graph scores the sentences; the best ones are
//! returned in document order.

use std::fmt;

use rust_stemmers::Stemmer;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::SummarizerConfig;
use crate::error::{Result, TextToolError};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::tokenizer::is_alphabetic_word;
use crate::nlp::{Language, StopwordFilter, Tokenizer};
use crate::pagerank::StandardPageRank;

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySentence {
    /// Position in the input, from 0
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Selected sentences in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub sentences: Vec<SummarySentence>,
    pub iterations: usize,
    pub converged: bool,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary {
    /// One sentence per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sentence) in self.sentences.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&sentence.text)?;
        }
        Ok(())
    }
}

/// Extractive summarizer with a fixed sentence count
pub struct TextRankSummarizer {
    config: SummarizerConfig,
    /// Present only when stemming is enabled
    stemmer: Option<Stemmer>,
    stopwords: StopwordFilter,
    tokenizer: Tokenizer,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default(), Language::English)
    }
}

impl TextRankSummarizer {
    pub fn new(config: SummarizerConfig, language: Language) -> Self {
        let stopwords = if config.remove_stopwords {
            StopwordFilter::new(language)
        } else {
            StopwordFilter::empty()
        };
        let stemmer = config.stem.then(|| Stemmer::create(language.stemmer()));
        Self {
            config,
            stemmer,
            stopwords,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Set number of sentences to select
    pub fn with_sentence_count(mut self, n: usize) -> Self {
        self.config.sentence_count = n;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Rank the sentences of `text` and keep the best ones
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        if self.config.sentence_count == 0 {
            return Err(TextToolError::Summarization(
                "sentence count must be at least 1".to_string(),
            ));
        }

        let sentences = self.tokenizer.sentences(text);
        if sentences.is_empty() {
            return Ok(Summary::default());
        }

        let terms: Vec<Vec<String>> = sentences.iter().map(|s| self.terms(s)).collect();
        let counts: Vec<FxHashMap<&str, usize>> = terms.iter().map(|t| term_counts(t)).collect();

        let labels = sentences.iter().map(|s| s.to_string()).collect();
        let builder = GraphBuilder::from_pairwise(labels, |i, j| {
            sentence_similarity(&terms[i], &counts[j], terms[j].len())
        });
        debug!(
            sentences = builder.node_count(),
            edges = builder.edge_count(),
            self_loops = builder.self_loop_count(),
            "built sentence graph"
        );
        let graph = CsrGraph::from_builder(&builder);

        let ranking = StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
            .run(&graph);
        if !ranking.is_finite() {
            return Err(TextToolError::Summarization(
                "sentence ranking produced non-finite scores".to_string(),
            ));
        }
        if !ranking.converged {
            warn!(
                iterations = ranking.iterations,
                delta = ranking.delta,
                "sentence ranking did not converge"
            );
        }

        let mut selected: Vec<SummarySentence> = ranking
            .best(self.config.sentence_count)
            .into_iter()
            .map(|(node, score)| SummarySentence {
                index: node as usize,
                text: graph.label(node).to_string(),
                score,
            })
            .collect();
        selected.sort_by_key(|s| s.index);

        Ok(Summary {
            sentences: selected,
            iterations: ranking.iterations,
            converged: ranking.converged,
        })
    }

    /// Summary text, or a readable error message in its place
    pub fn summarize_to_string(&self, text: &str) -> String {
        match self.summarize(text) {
            Ok(summary) => summary.to_string(),
            Err(e) => format!("Error occurred during summarization: {e}"),
        }
    }

    /// Lowercased alphabetic words of a sentence, stemmed if configured
    fn terms(&self, sentence: &str) -> Vec<String> {
        self.tokenizer
            .words(sentence)
            .into_iter()
            .filter(|t| is_alphabetic_word(t))
            .map(|t| t.to_lowercase())
            .filter(|t| !self.stopwords.is_stopword(t))
            .map(|t| match &self.stemmer {
                Some(stemmer) => stemmer.stem(&t).into_owned(),
                None => t,
            })
            .collect()
    }
}

fn term_counts(terms: &[String]) -> FxHashMap<&str, usize> {
    let mut counts = FxHashMap::default();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Edge weight between two sentences
///
/// `other_counts` and `other_len` describe the second sentence.
fn sentence_similarity(terms: &[String], other_counts: &FxHashMap<&str, usize>, other_len: usize) -> f64 {
    let shared: usize = terms
        .iter()
        .map(|t| other_counts.get(t.as_str()).copied().unwrap_or(0))
        .sum();
    if shared == 0 {
        return 0.0;
    }

    let norm = (terms.len() as f64).ln() + (other_len as f64).ln();
    if norm.abs() < 1e-9 {
        shared as f64
    } else {
        shared as f64 / norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Rust is a systems programming language. \
        Rust guarantees memory safety without garbage collection. \
        The weather was pleasant yesterday. \
        Memory safety in Rust comes from the ownership system. \
        Many programmers enjoy the Rust programming language. \
        My cat likes to sleep.";

    fn summarizer(n: usize) -> TextRankSummarizer {
        TextRankSummarizer::default().with_sentence_count(n)
    }

    #[test]
    fn test_never_more_than_requested() {
        for n in 1..=8 {
            let summary = summarizer(n).summarize(TEXT).unwrap();
            assert!(summary.len() <= n);
            assert_eq!(summary.len(), n.min(6));
        }
    }

    #[test]
    fn test_document_order() {
        let summary = summarizer(3).summarize(TEXT).unwrap();

        for pair in summary.sentences.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn test_central_sentences_preferred() {
        let summary = summarizer(2).summarize(TEXT).unwrap();

        for sentence in &summary.sentences {
            assert!(sentence.text.contains("Rust"), "picked {:?}", sentence.text);
        }
    }

    #[test]
    fn test_empty_input() {
        let summary = summarizer(3).summarize("   ").unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "");
    }

    #[test]
    fn test_short_text_returned_whole() {
        let summary = summarizer(3).summarize("One sentence. Another one.").unwrap();

        assert_eq!(summary.to_string(), "One sentence.\nAnother one.");
    }

    #[test]
    fn test_zero_sentence_count_is_error() {
        let s = summarizer(0);

        assert!(s.summarize(TEXT).is_err());
        assert_eq!(
            s.summarize_to_string(TEXT),
            "Error occurred during summarization: sentence count must be at least 1"
        );
    }

    #[test]
    fn test_similarity_formula() {
        let a: Vec<String> = ["rust", "is", "fast"].iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = ["rust", "is", "safe", "rust"].iter().map(|s| s.to_string()).collect();
        let counts = term_counts(&b);

        // rust appears twice in b, is once
        let expected = 3.0 / (3f64.ln() + 4f64.ln());
        assert!((sentence_similarity(&a, &counts, b.len()) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_single_words() {
        let a = vec!["rust".to_string()];
        let counts = term_counts(&a);

        assert_eq!(sentence_similarity(&a, &counts, 1), 1.0);
        let other = vec!["go".to_string()];
        assert_eq!(sentence_similarity(&other, &counts, 1), 0.0);
    }

    #[test]
    fn test_words_only_lowercased_by_default() {
        let s = TextRankSummarizer::default();
        assert_eq!(s.terms("Running runs."), vec!["running", "runs"]);
    }

    #[test]
    fn test_stemming_is_opt_in() {
        let config = SummarizerConfig {
            stem: true,
            ..SummarizerConfig::default()
        };
        let s = TextRankSummarizer::new(config, Language::English);
        assert_eq!(s.terms("Running runs."), vec!["run", "run"]);
    }

    #[test]
    fn test_numbers_are_not_terms() {
        let s = TextRankSummarizer::default();
        assert_eq!(s.terms("In 2024 we ran 5 km, B2B."), vec!["in", "we", "ran", "km"]);
    }

    #[test]
    fn test_self_similarity_lifts_repetitive_sentence() {
        // Without self-loops the first sentence is the hub: it shares "mice"
        // with the last and "cats chase" with the other two.
        let text = "Cats chase mice. Cats chase birds. Cats chase dogs. \
            Mice mice mice mice mice mice.";
        let summary = summarizer(1).summarize(text).unwrap();

        assert_eq!(summary.to_string(), "Mice mice mice mice mice mice.");
    }

    #[test]
    fn test_self_similarity_weight() {
        let terms: Vec<String> = ["mice"; 6].iter().map(|s| s.to_string()).collect();
        let counts = term_counts(&terms);

        let expected = 36.0 / (2.0 * 6f64.ln());
        assert!((sentence_similarity(&terms, &counts, terms.len()) - expected).abs() < 1e-12);
    }
}

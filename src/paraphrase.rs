//! Synonym-substitution paraphrasing
//!
//! Each non-stopword token is replaced by the synonym candidate most similar
//! to the original word. Tokens are re-joined with single spaces, so
//! punctuation ends up space-separated (`"fox ."`). Output is not stable
//! across passes: paraphrasing a paraphrase may choose different words.

use tracing::trace;

use crate::nlp::{StopwordFilter, Tokenizer};
use crate::similarity::SimilarityScorer;
use crate::thesaurus::{synonyms, Thesaurus};

pub struct Paraphraser<'a, T: Thesaurus + ?Sized> {
    scorer: SimilarityScorer<'a, T>,
    stopwords: &'a StopwordFilter,
    tokenizer: Tokenizer,
}

impl<'a, T: Thesaurus + ?Sized> Paraphraser<'a, T> {
    pub fn new(thesaurus: &'a T, stopwords: &'a StopwordFilter) -> Self {
        Self {
            scorer: SimilarityScorer::new(thesaurus),
            stopwords,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Replacement for a single token
    ///
    /// Stopwords and words without synonyms come back unchanged. Otherwise
    /// the first candidate with the highest similarity to `word` wins.
    pub fn substitute(&self, word: &str) -> String {
        if self.stopwords.is_stopword(word) {
            return word.to_string();
        }

        let candidates = synonyms(self.scorer.thesaurus(), word);
        let mut best: Option<(&String, f64)> = None;
        for candidate in &candidates {
            let score = self.scorer.similarity(candidate, word);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, score)) => {
                trace!(word, replacement = %candidate, score, "substituted");
                candidate.clone()
            }
            None => word.to_string(),
        }
    }

    /// Paraphrase one sentence
    pub fn paraphrase_sentence(&self, sentence: &str) -> String {
        self.tokenizer
            .words(sentence)
            .into_iter()
            .map(|token| self.substitute(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Paraphrase every sentence of a paragraph, joined by single spaces
    pub fn rephrase_paragraph(&self, text: &str) -> String {
        self.tokenizer
            .sentences(text)
            .into_iter()
            .map(|sentence| self.paraphrase_sentence(sentence))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

//! Keyword points
//!
//! The five most frequent non-stopword tokens of a text are its keywords.
//! Punctuation tokens are counted too. Every sentence mentioning a keyword
//! becomes a numbered, paraphrased point.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::config::KeywordConfig;
use crate::nlp::tokenizer::is_word;
use crate::nlp::{StopwordFilter, Tokenizer};
use crate::paraphrase::Paraphraser;
use crate::thesaurus::Thesaurus;

/// A frequent term and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub term: String,
    pub count: usize,
}

/// One numbered point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    /// 1-based position of the source sentence
    pub number: usize,
    pub text: String,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}

pub struct KeywordExtractor<'a> {
    config: KeywordConfig,
    stopwords: &'a StopwordFilter,
    tokenizer: Tokenizer,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(config: KeywordConfig, stopwords: &'a StopwordFilter) -> Self {
        Self {
            config,
            stopwords,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Most frequent terms, highest count first
    ///
    /// Counting is case-sensitive. Equal counts keep first-occurrence order.
    pub fn keywords(&self, text: &str) -> Vec<Keyword> {
        let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        let mut order = 0;
        for token in self.tokenizer.words(text) {
            if self.stopwords.is_stopword(token) {
                continue;
            }
            if self.config.skip_punctuation && !is_word(token) {
                continue;
            }
            let entry = counts.entry(token).or_insert_with(|| {
                order += 1;
                (0, order)
            });
            entry.0 += 1;
        }

        let mut ranked: Vec<_> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked.truncate(self.config.top_n);

        ranked
            .into_iter()
            .map(|(term, (count, _))| Keyword {
                term: term.to_string(),
                count,
            })
            .collect()
    }

    /// Paraphrased sentences that mention a keyword
    pub fn points<T: Thesaurus + ?Sized>(
        &self,
        text: &str,
        paraphraser: &Paraphraser<'_, T>,
    ) -> Vec<Point> {
        let keywords = self.keywords(text);
        let terms: FxHashSet<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        debug!(keywords = ?terms, "selected keywords");

        self.tokenizer
            .sentences(text)
            .into_iter()
            .enumerate()
            .filter(|(_, sentence)| {
                self.tokenizer
                    .words(sentence)
                    .iter()
                    .any(|token| terms.contains(token))
            })
            .map(|(i, sentence)| Point {
                number: i + 1,
                text: paraphraser.paraphrase_sentence(sentence),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords;
    use crate::thesaurus::MemoryThesaurus;

    const FOX: &str = "The quick brown fox jumps over the lazy dog. The dog barks.";

    fn terms(keywords: &[Keyword]) -> Vec<&str> {
        keywords.iter().map(|k| k.term.as_str()).collect()
    }

    #[test]
    fn test_fox_and_dog_among_keywords() {
        let stopwords = StopwordFilter::from_list(&["the", "over"]);
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);

        let keywords = extractor.keywords(FOX);
        let found = terms(&keywords);
        assert_eq!(keywords.len(), 5);
        assert!(found.contains(&"dog"));
        assert!(found.contains(&"fox"));
        assert_eq!(keywords[0], Keyword { term: "dog".to_string(), count: 2 });
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let stopwords = StopwordFilter::from_list(&["the", "over"]);
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);

        assert_eq!(
            terms(&extractor.keywords(FOX)),
            vec!["dog", ".", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_counting_is_case_sensitive() {
        let stopwords = StopwordFilter::empty();
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);

        let keywords = extractor.keywords("Rust rust rust.");
        assert_eq!(keywords[0], Keyword { term: "rust".to_string(), count: 2 });
        assert_eq!(keywords[1], Keyword { term: "Rust".to_string(), count: 1 });
    }

    #[test]
    fn test_punctuation_skipping() {
        let stopwords = StopwordFilter::empty();
        let text = "Hi. Hi. Hi.";

        let counting = KeywordExtractor::new(KeywordConfig::default(), &stopwords);
        assert_eq!(terms(&counting.keywords(text)), vec!["Hi", "."]);

        let config = KeywordConfig {
            skip_punctuation: true,
            ..KeywordConfig::default()
        };
        let skipping = KeywordExtractor::new(config, &stopwords);
        assert_eq!(terms(&skipping.keywords(text)), vec!["Hi"]);
    }

    #[test]
    fn test_full_stop_keyword_makes_every_sentence_a_point() {
        let extractor = KeywordExtractor::new(KeywordConfig::default(), stopwords::english());
        let thesaurus = MemoryThesaurus::new();
        let paraphraser = Paraphraser::new(&thesaurus, stopwords::english());

        let text = "Dogs bark. Cats meow. Birds sing. Fish swim. Cows moo. Ants march.";
        let keywords = extractor.keywords(text);
        assert_eq!(keywords[0], Keyword { term: ".".to_string(), count: 6 });

        let points = extractor.points(text, &paraphraser);
        let numbers: Vec<usize> = points.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(points[5].to_string(), "6. Ants march .");
    }

    #[test]
    fn test_default_keeps_five_keywords() {
        let stopwords = StopwordFilter::empty();
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);

        let keywords = extractor.keywords("a b c d e f g h");
        assert_eq!(terms(&keywords), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_points_only_keyword_sentences() {
        let stopwords = StopwordFilter::from_list(&["the", "a", "is", "on"]);
        let config = KeywordConfig {
            top_n: 1,
            skip_punctuation: true,
        };
        let extractor = KeywordExtractor::new(config, &stopwords);
        let thesaurus = MemoryThesaurus::new();
        let paraphraser = Paraphraser::new(&thesaurus, &stopwords);

        let text = "The cat sleeps. A bird sings. The cat is on the mat.";
        let points = extractor.points(text, &paraphraser);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].to_string(), "1. The cat sleeps .");
        assert_eq!(points[1].to_string(), "3. The cat is on the mat .");
        for point in &points {
            assert!(point.text.contains("cat"));
        }
    }

    #[test]
    fn test_abbreviation_does_not_shift_numbering() {
        let stopwords = StopwordFilter::empty();
        let config = KeywordConfig {
            top_n: 1,
            skip_punctuation: true,
        };
        let extractor = KeywordExtractor::new(config, &stopwords);
        let thesaurus = MemoryThesaurus::new();
        let paraphraser = Paraphraser::new(&thesaurus, &stopwords);

        let points = extractor.points("Mr. Smith met Jones. Smith smiled.", &paraphraser);
        let numbers: Vec<usize> = points.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_points_are_paraphrased() {
        let stopwords = StopwordFilter::from_list(&["the", "over"]);
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);
        let thesaurus = MemoryThesaurus::new()
            .with_entry("dog", &["pooch", "hound"])
            .with_entry("pooch", &["pooch", "hound"])
            .with_entry("hound", &["hound"]);
        let paraphraser = Paraphraser::new(&thesaurus, &stopwords);

        let points = extractor.points("The dog barks.", &paraphraser);
        assert_eq!(points, vec![Point { number: 1, text: "The pooch barks .".to_string() }]);
    }

    #[test]
    fn test_no_points_for_empty_text() {
        let stopwords = StopwordFilter::empty();
        let extractor = KeywordExtractor::new(KeywordConfig::default(), &stopwords);
        let thesaurus = MemoryThesaurus::new();
        let paraphraser = Paraphraser::new(&thesaurus, &stopwords);

        assert!(extractor.keywords("").is_empty());
        assert!(extractor.points("", &paraphraser).is_empty());
    }
}

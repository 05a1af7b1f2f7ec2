//! Synonym-set similarity
//!
//! Two words are compared by the Jaccard overlap of their synonym sets.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::thesaurus::{synonyms, Thesaurus};

/// Normalized synonym candidates of one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymSet {
    members: FxHashSet<String>,
}

impl SynonymSet {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Synonym set of `word` according to `thesaurus`
    pub fn lookup<T: Thesaurus + ?Sized>(thesaurus: &T, word: &str) -> Self {
        Self::new(synonyms(thesaurus, word))
    }

    /// |A ∩ B| / |A ∪ B|, or 0 when either set is empty
    pub fn jaccard(&self, other: &SynonymSet) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }
        let intersection = self.members.intersection(&other.members).count();
        let union = self.members.len() + other.members.len() - intersection;
        intersection as f64 / union as f64
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.members.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Scores word pairs, memoizing synonym sets per word
pub struct SimilarityScorer<'a, T: Thesaurus + ?Sized> {
    thesaurus: &'a T,
    cache: RefCell<FxHashMap<String, Rc<SynonymSet>>>,
}

impl<'a, T: Thesaurus + ?Sized> SimilarityScorer<'a, T> {
    pub fn new(thesaurus: &'a T) -> Self {
        Self {
            thesaurus,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Synonym set of `word`, computed at most once per scorer
    pub fn synonym_set(&self, word: &str) -> Rc<SynonymSet> {
        if let Some(set) = self.cache.borrow().get(word) {
            return Rc::clone(set);
        }
        let set = Rc::new(SynonymSet::lookup(self.thesaurus, word));
        self.cache
            .borrow_mut()
            .insert(word.to_string(), Rc::clone(&set));
        set
    }

    /// Jaccard similarity of the two words' synonym sets, in `[0, 1]`
    pub fn similarity(&self, word1: &str, word2: &str) -> f64 {
        self.synonym_set(word1).jaccard(&self.synonym_set(word2))
    }

    pub fn thesaurus(&self) -> &'a T {
        self.thesaurus
    }
}

/// One-off similarity without caching
pub fn semantic_similarity<T: Thesaurus + ?Sized>(thesaurus: &T, word1: &str, word2: &str) -> f64 {
    SynonymSet::lookup(thesaurus, word1).jaccard(&SynonymSet::lookup(thesaurus, word2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::MemoryThesaurus;

    fn thesaurus() -> MemoryThesaurus {
        MemoryThesaurus::new()
            .with_entry("quick", &["quick", "speedy", "fast"])
            .with_entry("fast", &["fast", "quick", "firm"])
            .with_entry("speedy", &["speedy", "quick"])
            .with_entry("slow", &["slow", "dull"])
    }

    #[test]
    fn test_jaccard_overlap() {
        let t = thesaurus();
        // {quick, speedy, fast} vs {fast, quick, firm}: 2 shared of 4
        let score = semantic_similarity(&t, "quick", "fast");
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_words_score_one() {
        let t = thesaurus();
        assert!((semantic_similarity(&t, "quick", "quick") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let t = thesaurus();
        assert_eq!(semantic_similarity(&t, "quick", "slow"), 0.0);
    }

    #[test]
    fn test_unknown_word_scores_zero_with_anything() {
        let t = thesaurus();
        for other in ["quick", "fast", "slow", "zzyzx"] {
            assert_eq!(semantic_similarity(&t, "zzyzx", other), 0.0);
            assert_eq!(semantic_similarity(&t, other, "zzyzx"), 0.0);
        }
    }

    #[test]
    fn test_score_is_symmetric_and_bounded() {
        let t = thesaurus();
        let words = ["quick", "fast", "speedy", "slow"];
        for a in words {
            for b in words {
                let ab = semantic_similarity(&t, a, b);
                let ba = semantic_similarity(&t, b, a);
                assert!((ab - ba).abs() < 1e-12);
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn test_scorer_caches_sets() {
        let t = thesaurus();
        let scorer = SimilarityScorer::new(&t);

        let first = scorer.synonym_set("quick");
        let second = scorer.synonym_set("quick");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(
            scorer.similarity("quick", "fast"),
            semantic_similarity(&t, "quick", "fast")
        );
    }

    #[test]
    fn test_synonym_set_dedups() {
        let set = SynonymSet::new(["dog", "dog", "hound"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("hound"));
    }
}

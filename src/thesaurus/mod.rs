//! Thesaurus lookup
//!
//! A [`Thesaurus`] maps a word to the raw lemma names of all its senses.
//! [`synonyms`] turns those into the normalized candidate strings used for
//! scoring and substitution.

pub mod memory;
pub mod morphy;
pub mod wordnet;

pub use memory::MemoryThesaurus;
pub use wordnet::{LoadMode, WordNet};

/// Source of synonym candidates
pub trait Thesaurus {
    /// Lemma names of every sense of `word`, in sense order.
    ///
    /// Names are returned as stored (e.g. `domestic_dog`); duplicates across
    /// senses are kept. An unknown word yields an empty list.
    fn lemma_names(&self, word: &str) -> Vec<String>;
}

impl<T: Thesaurus + ?Sized> Thesaurus for &T {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        (**self).lemma_names(word)
    }
}

impl<T: Thesaurus + ?Sized> Thesaurus for Box<T> {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        (**self).lemma_names(word)
    }
}

/// Normalize a lemma name into a synonym candidate
///
/// `_` and `-` become spaces, the text is lowercased, and everything that is
/// not alphanumeric (including those spaces) is dropped.
pub fn normalize_lemma(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Normalized synonym candidates for `word`, in thesaurus order
pub fn synonyms<T: Thesaurus + ?Sized>(thesaurus: &T, word: &str) -> Vec<String> {
    thesaurus
        .lemma_names(word)
        .iter()
        .map(|name| normalize_lemma(name))
        .collect()
}

//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering and language
//! selection.

pub mod language;
pub mod stopwords;
pub mod tokenizer;

pub use language::Language;
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;

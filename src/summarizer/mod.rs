//! Extractive summarization
//!
//! [`TextRankSummarizer`] ranks sentences by their word overlap with the
//! rest of the text and keeps the best ones in their original order.

pub mod textrank;

pub use textrank::{Summary, SummarySentence, TextRankSummarizer};

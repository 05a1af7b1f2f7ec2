//! Graph construction and representation
//!
//! Sentence-similarity graphs are accumulated in a [`builder::GraphBuilder`]
//! and frozen into a [`csr::CsrGraph`] for ranking.

pub mod builder;
pub mod csr;

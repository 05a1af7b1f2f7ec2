//! # text-tool
//!
//! Three text actions over a pasted paragraph:
//!
//! - **Rephrase**: replace each content word with its closest synonym, where
//!   closeness is the Jaccard overlap of the two words' synonym sets.
//! - **Summarize**: sentence-level TextRank, keeping the top sentences in
//!   document order.
//! - **Important points**: number and paraphrase every sentence that mentions
//!   one of the most frequent content words.
//!
//! Synonyms come from a [`thesaurus::Thesaurus`], normally a WordNet
//! dictionary read from disk.
//!
//! ```no_run
//! use text_tool::{load_thesaurus, Action, TextTool, ToolConfig};
//!
//! # fn main() -> text_tool::Result<()> {
//! let config = ToolConfig::default();
//! let tool = TextTool::new(load_thesaurus(&config)?, config)?;
//! println!("{}", tool.run(Action::Summarize, "Some text. More text."));
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod paraphrase;
pub mod resources;
pub mod session;
pub mod similarity;
pub mod summarizer;
pub mod thesaurus;
pub mod tool;

pub use config::{KeywordConfig, SummarizerConfig, ToolConfig};
pub use error::{Result, TextToolError};
pub use keywords::{Keyword, KeywordExtractor, Point};
pub use paraphrase::Paraphraser;
pub use resources::{load_thesaurus, locate_wordnet};
pub use session::Session;
pub use similarity::{semantic_similarity, SimilarityScorer, SynonymSet};
pub use summarizer::{Summary, TextRankSummarizer};
pub use thesaurus::{MemoryThesaurus, Thesaurus, WordNet};
pub use tool::{Action, TextTool};

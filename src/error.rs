//! Error types
//!
//! Every fallible operation in the library returns [`Result`], using
//! `thiserror` for the error definitions. Only summarization failures are
//! turned into display strings, and that happens at the presentation layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading resources or running a pipeline
#[derive(Error, Debug)]
pub enum TextToolError {
    /// A resource file could not be opened, mapped or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in a WordNet dictionary file did not match the database format
    #[error("{file}:{line}: {message}")]
    WordNetFormat {
        file: String,
        line: usize,
        message: String,
    },

    /// A required language resource could not be located
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Configuration values failed validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The summarizer could not rank the input
    #[error("{0}")]
    Summarization(String),

    /// A JSON config or thesaurus file could not be decoded
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextToolError {
    /// Wrap an I/O error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::WordNetFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, TextToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_mentions_location() {
        let err = TextToolError::format("index.noun", 42, "too few fields");
        assert_eq!(err.to_string(), "index.noun:42: too few fields");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TextToolError::io("/tmp/data.noun", source);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/data.noun"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_summarization_message_is_verbatim() {
        let err = TextToolError::Summarization("scores diverged".to_string());
        assert_eq!(err.to_string(), "scores diverged");
    }
}

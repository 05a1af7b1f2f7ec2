//! The three text actions behind one handle
//!
//! [`TextTool`] owns the thesaurus, stopword set and summarizer, and maps an
//! [`Action`] on some input text to the output text shown to the user.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::debug;

use crate::config::ToolConfig;
use crate::error::{Result, TextToolError};
use crate::keywords::KeywordExtractor;
use crate::nlp::{stopwords, Language, StopwordFilter};
use crate::paraphrase::Paraphraser;
use crate::summarizer::TextRankSummarizer;
use crate::thesaurus::Thesaurus;

/// Enter a tracing span named after the running action
macro_rules! trace_stage {
    ($action:expr) => {
        let _span = tracing::info_span!("action", name = $action.name()).entered();
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Rephrase,
    Summarize,
    ImportantPoints,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Rephrase, Action::Summarize, Action::ImportantPoints];

    /// Short machine name
    pub fn name(self) -> &'static str {
        match self {
            Action::Rephrase => "rephrase",
            Action::Summarize => "summarize",
            Action::ImportantPoints => "points",
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Action::Rephrase => "Rephrase",
            Action::Summarize => "Summarize",
            Action::ImportantPoints => "Important Points",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = TextToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rephrase" => Ok(Action::Rephrase),
            "summarize" | "summary" => Ok(Action::Summarize),
            "points" | "important points" | "important-points" => Ok(Action::ImportantPoints),
            other => Err(TextToolError::Config(format!("unknown action: {other}"))),
        }
    }
}

pub struct TextTool {
    thesaurus: Box<dyn Thesaurus>,
    stopwords: Cow<'static, StopwordFilter>,
    summarizer: TextRankSummarizer,
    config: ToolConfig,
}

impl TextTool {
    /// Validates `config` before anything is built
    pub fn new(thesaurus: Box<dyn Thesaurus>, config: ToolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            thesaurus,
            stopwords: match config.language {
                Language::English => Cow::Borrowed(stopwords::english()),
                other => Cow::Owned(StopwordFilter::new(other)),
            },
            summarizer: TextRankSummarizer::new(config.summarizer.clone(), config.language),
            config,
        })
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Synonym-substituted text
    pub fn rephrase(&self, text: &str) -> String {
        self.paraphraser().rephrase_paragraph(text)
    }

    /// Top sentences, one per line; failures come back as a message
    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize_to_string(text)
    }

    /// Numbered keyword points, one per line
    pub fn important_points(&self, text: &str) -> String {
        let extractor = KeywordExtractor::new(self.config.keywords.clone(), &self.stopwords);
        extractor
            .points(text, &self.paraphraser())
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn run(&self, action: Action, text: &str) -> String {
        trace_stage!(action);
        let start = Instant::now();
        let output = match action {
            Action::Rephrase => self.rephrase(text),
            Action::Summarize => self.summarize(text),
            Action::ImportantPoints => self.important_points(text),
        };
        debug!(
            input_len = text.len(),
            output_len = output.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "action finished"
        );
        output
    }

    fn paraphraser(&self) -> Paraphraser<'_, dyn Thesaurus> {
        Paraphraser::new(self.thesaurus.as_ref(), &self.stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::MemoryThesaurus;

    fn tool() -> TextTool {
        let thesaurus = MemoryThesaurus::new()
            .with_entry("quick", &["speedy", "fast"])
            .with_entry("speedy", &["speedy", "quick"])
            .with_entry("fast", &["fast", "quick", "speedy"]);
        TextTool::new(Box::new(thesaurus), ToolConfig::default()).unwrap()
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("rephrase".parse::<Action>().unwrap(), Action::Rephrase);
        assert_eq!("Summarize".parse::<Action>().unwrap(), Action::Summarize);
        assert_eq!("Important Points".parse::<Action>().unwrap(), Action::ImportantPoints);
        assert!("translate".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_labels() {
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Rephrase", "Summarize", "Important Points"]);
    }

    #[test]
    fn test_rephrase() {
        assert_eq!(tool().run(Action::Rephrase, "The quick fox."), "The fast fox .");
    }

    #[test]
    fn test_rephrase_content_words() {
        let thesaurus = MemoryThesaurus::new()
            .with_entry("computer", &["machine", "calculator"])
            .with_entry("machine", &["machine", "computer"])
            .with_entry("calculator", &["calculator", "computer", "machine"]);
        let tool = TextTool::new(Box::new(thesaurus), ToolConfig::default()).unwrap();

        assert_eq!(tool.run(Action::Rephrase, "Computer works."), "calculator works .");
    }

    #[test]
    fn test_summarize_caps_sentences() {
        let text = "Cats purr. Dogs bark loudly. Birds sing songs. Fish swim. Cows moo.";
        let output = tool().run(Action::Summarize, text);

        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_important_points_numbered() {
        let output = tool().run(
            Action::ImportantPoints,
            "The dog barks. The dog runs. Trees grow.",
        );
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].starts_with("1. "));
        assert!(lines[1].starts_with("2. "));
        for line in lines {
            let (number, _) = line.split_once(". ").unwrap();
            assert!(number.parse::<usize>().is_ok());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ToolConfig::default();
        config.keywords.top_n = 0;

        assert!(TextTool::new(Box::new(MemoryThesaurus::new()), config).is_err());
    }
}

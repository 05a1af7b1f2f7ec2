use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use text_tool::nlp::Language;
use text_tool::{load_thesaurus, Action, Session, TextTool, ToolConfig};

#[derive(Parser, Debug)]
#[command(
    name = "text-tool",
    version,
    about = "Rephrase, summarize and pick out important points from text"
)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// WordNet dictionary directory
    #[arg(long, env = "WORDNET_DIR", global = true)]
    wordnet_dir: Option<PathBuf>,

    /// JSON thesaurus to use instead of WordNet
    #[arg(long, global = true)]
    thesaurus: Option<PathBuf>,

    /// Sentences per summary
    #[arg(long, global = true)]
    sentences: Option<usize>,

    /// Stopword and stemmer language (code or name)
    #[arg(long, global = true)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace words with their closest synonyms
    Rephrase {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Print the highest-ranked sentences
    Summarize {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Print numbered sentences that mention the most frequent words
    Points {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let thesaurus = load_thesaurus(&config).context("failed to load thesaurus")?;
    let tool = TextTool::new(thesaurus, config)?;

    let (action, input) = match cli.command {
        None => return run_session(&tool),
        Some(Commands::Rephrase { input }) => (Action::Rephrase, input),
        Some(Commands::Summarize { input }) => (Action::Summarize, input),
        Some(Commands::Points { input }) => (Action::ImportantPoints, input),
    };

    let text = read_input(input.as_deref())?;
    println!("{}", tool.run(action, &text));
    Ok(())
}

/// Config file first, then command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<ToolConfig> {
    let mut config = match &cli.config {
        Some(path) => ToolConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ToolConfig::default(),
    };

    if let Some(dir) = &cli.wordnet_dir {
        config.wordnet_dir = Some(dir.clone());
    }
    if let Some(path) = &cli.thesaurus {
        config.thesaurus_file = Some(path.clone());
    }
    if let Some(n) = cli.sentences {
        config.summarizer.sentence_count = n;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_session(tool: &TextTool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(tool, stdin.lock(), stdout.lock())
        .run()
        .context("interactive session failed")
}

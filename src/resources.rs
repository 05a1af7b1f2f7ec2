//! Locating and loading language resources
//!
//! Tokenizer rules and stopword lists are compiled in. The thesaurus is
//! either a JSON file or a WordNet dictionary directory found on disk;
//! nothing is ever downloaded.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ToolConfig;
use crate::error::{Result, TextToolError};
use crate::thesaurus::{MemoryThesaurus, Thesaurus, WordNet};

/// Environment variable naming a WordNet dictionary directory
pub const WORDNET_ENV: &str = "WORDNET_DIR";

/// Well-known WordNet install locations, in search order
pub fn default_wordnet_dirs() -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Some(home) = dirs::home_dir() {
        found.push(home.join("nltk_data").join("corpora").join("wordnet"));
    }
    for system in [
        "/usr/share/nltk_data/corpora/wordnet",
        "/usr/local/share/nltk_data/corpora/wordnet",
        "/usr/share/wordnet",
        "/usr/local/share/wordnet",
    ] {
        found.push(PathBuf::from(system));
    }
    found
}

/// Find the WordNet directory to load
///
/// An explicit directory wins, then `$WORDNET_DIR`, then the well-known
/// locations. Explicit and environment paths must hold a dictionary.
pub fn locate_wordnet(explicit: Option<&Path>) -> Result<PathBuf> {
    let env = std::env::var_os(WORDNET_ENV).map(PathBuf::from);
    locate_in(explicit, env.as_deref(), &default_wordnet_dirs())
}

fn locate_in(explicit: Option<&Path>, env: Option<&Path>, candidates: &[PathBuf]) -> Result<PathBuf> {
    for (source, dir) in [("configured", explicit), (WORDNET_ENV, env)] {
        if let Some(dir) = dir {
            return dictionary_dir(dir).ok_or_else(|| {
                TextToolError::ResourceNotFound(format!(
                    "{source} WordNet directory {} has no dictionary files",
                    dir.display()
                ))
            });
        }
    }

    for candidate in candidates {
        if let Some(found) = dictionary_dir(candidate) {
            debug!("found WordNet at {}", found.display());
            return Ok(found);
        }
    }
    Err(TextToolError::ResourceNotFound(format!(
        "no WordNet dictionary found; set {WORDNET_ENV} or pass --wordnet-dir (searched {})",
        candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

/// `dir` itself or its `dict/` child, whichever holds `index.noun`
fn dictionary_dir(dir: &Path) -> Option<PathBuf> {
    [dir.to_path_buf(), dir.join("dict")]
        .into_iter()
        .find(|d| d.join("index.noun").is_file())
}

/// Load the thesaurus named by `config`
///
/// A JSON thesaurus file takes precedence over WordNet.
pub fn load_thesaurus(config: &ToolConfig) -> Result<Box<dyn Thesaurus>> {
    if let Some(path) = &config.thesaurus_file {
        let thesaurus = MemoryThesaurus::from_json_file(path)?;
        info!(entries = thesaurus.len(), "loaded thesaurus from {}", path.display());
        return Ok(Box::new(thesaurus));
    }

    let dir = locate_wordnet(config.wordnet_dir.as_deref())?;
    Ok(Box::new(WordNet::load(dir)?))
}

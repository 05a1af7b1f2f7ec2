//! WordNet dictionary reader
//!
//! Reads the canonical WordNet database files from a dictionary directory:
//! `index.{noun,verb,adj,adv}` and `data.{noun,verb,adj,adv}` are required,
//! the `{noun,verb,adj,adv}.exc` exception lists are optional. Only what the
//! thesaurus needs is kept: lemma -> synset offsets, synset -> member words,
//! and irregular inflections.
//!
//! # Example
//! ```no_run
//! use text_tool::thesaurus::{Thesaurus, WordNet};
//!
//! # fn main() -> text_tool::error::Result<()> {
//! let wn = WordNet::load("/usr/share/wordnet")?;
//! for name in wn.lemma_names("dogs") {
//!     println!("{name}");
//! }
//! # Ok(()) }
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::morphy;
use super::Thesaurus;
use crate::error::{Result, TextToolError};

/// WordNet part of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Lookup order for untagged words
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

    fn file_suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        }
    }
}

/// Strategy for reading dictionary files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Memory-map each file
    #[default]
    Mmap,
    /// Read each file into an owned buffer
    Owned,
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// A loaded WordNet dictionary
#[derive(Debug, Default)]
pub struct WordNet {
    /// (pos, lemma) -> synset offsets in sense order
    index: FxHashMap<(Pos, String), Vec<u32>>,
    /// (pos, offset) -> member lemma names
    synsets: FxHashMap<(Pos, u32), Vec<String>>,
    /// (pos, inflected form) -> base forms
    exceptions: FxHashMap<(Pos, String), Vec<String>>,
}

impl WordNet {
    /// Load a dictionary directory, memory-mapping the files
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(dict_dir, LoadMode::Mmap)
    }

    /// Load a dictionary directory with an explicit [`LoadMode`]
    pub fn load_with_mode(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        for pos in Pos::ALL {
            for prefix in ["index", "data"] {
                let path = dir.join(format!("{prefix}.{}", pos.file_suffix()));
                if !path.is_file() {
                    return Err(TextToolError::ResourceNotFound(format!(
                        "missing WordNet file {}",
                        path.display()
                    )));
                }
            }
        }

        let mut wordnet = WordNet::default();
        for pos in Pos::ALL {
            let name = format!("index.{}", pos.file_suffix());
            let buffer = load_file(&dir.join(&name), mode)?;
            wordnet.parse_index(buffer.as_slice(), &name, pos)?;

            let name = format!("data.{}", pos.file_suffix());
            let buffer = load_file(&dir.join(&name), mode)?;
            wordnet.parse_data(buffer.as_slice(), &name, pos)?;

            let name = format!("{}.exc", pos.file_suffix());
            let path = dir.join(&name);
            if path.is_file() {
                let buffer = load_file(&path, mode)?;
                wordnet.parse_exceptions(buffer.as_slice(), &name, pos)?;
            } else {
                debug!("no exception list at {}", path.display());
            }
        }

        info!(
            lemmas = wordnet.lemma_count(),
            synsets = wordnet.synset_count(),
            "loaded WordNet from {}",
            dir.display()
        );
        Ok(wordnet)
    }

    /// Whether `lemma` is indexed under `pos`
    pub fn lemma_exists(&self, pos: Pos, lemma: &str) -> bool {
        self.index.contains_key(&(pos, lemma.to_lowercase()))
    }

    /// Synset offsets for an exact lemma, or an empty slice
    pub fn synset_offsets(&self, pos: Pos, lemma: &str) -> &[u32] {
        self.index
            .get(&(pos, lemma.to_lowercase()))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Member lemma names of a synset
    pub fn synset_words(&self, pos: Pos, offset: u32) -> Option<&[String]> {
        self.synsets.get(&(pos, offset)).map(|v| v.as_slice())
    }

    /// Base forms of `word` that are indexed under `pos`
    pub fn morphy(&self, word: &str, pos: Pos) -> Vec<String> {
        let word = word.to_lowercase();
        let exceptions = self
            .exceptions
            .get(&(pos, word.clone()))
            .map(|v| v.as_slice());
        morphy::base_forms(&word, pos, exceptions, |form| {
            self.index.contains_key(&(pos, form.to_string()))
        })
    }

    /// Number of (pos, lemma) index entries
    pub fn lemma_count(&self) -> usize {
        self.index.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    fn parse_index(&mut self, bytes: &[u8], file: &str, pos: Pos) -> Result<()> {
        for (lineno, line) in lines(bytes, file)? {
            let fields: Vec<&str> = line.split_ascii_whitespace().collect();
            if fields.len() < 6 {
                return Err(TextToolError::format(file, lineno, "too few fields"));
            }

            let synset_cnt: usize = parse_field(fields[2], file, lineno, "synset_cnt")?;
            let p_cnt: usize = parse_field(fields[3], file, lineno, "p_cnt")?;
            // lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offsets...
            let offsets_start = 4 + p_cnt + 2;
            if fields.len() < offsets_start {
                return Err(TextToolError::format(file, lineno, "pointer count mismatch"));
            }
            let offsets = fields[offsets_start..]
                .iter()
                .map(|f| parse_field::<u32>(f, file, lineno, "synset_offset"))
                .collect::<Result<Vec<_>>>()?;
            if offsets.len() != synset_cnt {
                return Err(TextToolError::format(
                    file,
                    lineno,
                    format!("expected {synset_cnt} synset offsets, got {}", offsets.len()),
                ));
            }

            self.index.insert((pos, fields[0].to_lowercase()), offsets);
        }
        Ok(())
    }

    fn parse_data(&mut self, bytes: &[u8], file: &str, pos: Pos) -> Result<()> {
        for (lineno, line) in lines(bytes, file)? {
            let head = line.split_once('|').map_or(line, |(left, _)| left);
            let fields: Vec<&str> = head.split_ascii_whitespace().collect();
            if fields.len() < 4 {
                return Err(TextToolError::format(file, lineno, "malformed synset line"));
            }

            let offset: u32 = parse_field(fields[0], file, lineno, "synset_offset")?;
            let w_cnt = usize::from_str_radix(fields[3], 16)
                .map_err(|e| TextToolError::format(file, lineno, format!("w_cnt: {e}")))?;
            // Words are (word, lex_id) pairs following w_cnt.
            if fields.len() < 4 + w_cnt * 2 {
                return Err(TextToolError::format(file, lineno, "not enough word entries"));
            }
            let words = (0..w_cnt)
                .map(|i| strip_adjective_marker(fields[4 + i * 2]).to_string())
                .collect();

            self.synsets.insert((pos, offset), words);
        }
        Ok(())
    }

    fn parse_exceptions(&mut self, bytes: &[u8], file: &str, pos: Pos) -> Result<()> {
        for (_, line) in lines(bytes, file)? {
            let mut fields = line.split_ascii_whitespace();
            if let Some(inflected) = fields.next() {
                let bases: Vec<String> = fields.map(str::to_string).collect();
                if !bases.is_empty() {
                    self.exceptions.insert((pos, inflected.to_string()), bases);
                }
            }
        }
        Ok(())
    }
}

impl Thesaurus for WordNet {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        let mut names = Vec::new();
        for pos in Pos::ALL {
            for form in self.morphy(word, pos) {
                for &offset in self.synset_offsets(pos, &form) {
                    if let Some(words) = self.synset_words(pos, offset) {
                        names.extend(words.iter().cloned());
                    }
                }
            }
        }
        names
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    let mut file = File::open(path).map_err(|e| TextToolError::io(path, e))?;
    match mode {
        LoadMode::Mmap => {
            // The dictionary is treated as read-only for the process lifetime.
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .map_err(|e| TextToolError::io(path, e))
        }
        LoadMode::Owned => {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .map_err(|e| TextToolError::io(path, e))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

/// Non-empty, non-header lines with 1-based line numbers
///
/// The license header of every WordNet file is indented; real records start
/// in column 0.
fn lines<'a>(bytes: &'a [u8], file: &str) -> Result<Vec<(usize, &'a str)>> {
    let mut out = Vec::new();
    for (i, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() || matches!(raw.first(), Some(b' ' | b'\t')) {
            continue;
        }
        let line = std::str::from_utf8(raw)
            .map_err(|e| TextToolError::format(file, i + 1, format!("invalid UTF-8: {e}")))?;
        out.push((i + 1, line));
    }
    Ok(out)
}

fn parse_field<T: std::str::FromStr>(field: &str, file: &str, line: usize, name: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| TextToolError::format(file, line, format!("{name}: {e}")))
}

/// `galore(ip)` -> `galore`
fn strip_adjective_marker(word: &str) -> &str {
    match word.rfind('(') {
        Some(idx) if idx > 0 && word.ends_with(')') => &word[..idx],
        _ => word,
    }
}

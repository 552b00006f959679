//! Common-password dictionary.
//!
//! The dictionary is an immutable set of lower-cased known-weak passwords,
//! built once and injected into the evaluator. It is read-only after
//! construction, so a single instance can be shared across threads.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Embedded default list, shipped with the crate.
const BUILTIN: &str = include_str!("../assets/common-passwords.txt");

/// Environment variable naming a custom dictionary file for [`Dictionary::load`].
pub const DICTIONARY_PATH_ENV: &str = "PWD_FORGE_DICTIONARY_PATH";

/// Entries shorter than this only count for exact matches, never for the
/// substring scan, so short fragments like "123" do not flag every password
/// containing them.
const SUBSTRING_MIN_LEN: usize = 4;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("dictionary contains no entries")]
    Empty,
}

/// Read-only set of known-weak passwords.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashSet<String>,
}

impl Dictionary {
    /// The embedded default list.
    pub fn builtin() -> Self {
        Self {
            entries: collect_entries(BUILTIN),
        }
    }

    /// Loads a dictionary from a newline-separated file.
    ///
    /// Lines are trimmed and lower-cased; blank lines are skipped.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("dictionary load failed: file not found {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_lines(content.lines())?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "dictionary loaded: {} entries from {:?}",
            dictionary.len(),
            path
        );

        Ok(dictionary)
    }

    /// Builds a dictionary from individual entries.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries: HashSet<String> = lines
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { entries })
    }

    /// Loads from the path in `PWD_FORGE_DICTIONARY_PATH` when set, otherwise
    /// falls back to the embedded list.
    pub fn load() -> Result<Self, DictionaryError> {
        match std::env::var(DICTIONARY_PATH_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `candidate` (already lower-cased) is a known-weak password:
    /// an exact entry, or a superstring of any entry of length ≥ 4.
    ///
    /// The substring pass is a linear scan over the set with short-circuit on
    /// first hit; swapping in a substring index (e.g. Aho-Corasick) would be
    /// an internal optimization with identical observable behavior.
    pub(crate) fn is_common(&self, candidate: &str) -> bool {
        if self.entries.contains(candidate) {
            return true;
        }
        self.entries
            .iter()
            .any(|entry| entry.len() >= SUBSTRING_MIN_LEN && candidate.contains(entry.as_str()))
    }
}

fn collect_entries(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

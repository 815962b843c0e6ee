//! The class vocabulary: which names are valid on their own and which
//! prefixes accept a value.
//!
//! A [`Vocabulary`] is built once and then only read. It is passed
//! explicitly to everything that classifies tokens, so tests and parallel
//! workers can each use their own.
//!
//! Sources, in the order the CLI tries them:
//!
//! 1. a JSON file (`{"static_names": [...], "dynamic_prefixes": [...]}`)
//! 2. [`extract`] over a directory of style-definition sources
//! 3. the [`builtin`] fallback table

pub mod builtin;
pub mod extract;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// Serialized form of a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyFile {
    #[serde(default)]
    pub static_names: Vec<String>,
    #[serde(default)]
    pub dynamic_prefixes: Vec<String>,
}

/// Immutable lookup sets for class validation.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    static_names: HashSet<String>,
    dynamic_prefixes: HashSet<String>,
    /// The dynamic prefixes again, longest first, for prefix matching
    /// where the most specific prefix has to win.
    prefixes_by_length: Vec<String>,
}

impl Vocabulary {
    pub fn new<S, D>(static_names: S, dynamic_prefixes: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let static_names: HashSet<String> = static_names.into_iter().map(Into::into).collect();
        let dynamic_prefixes: HashSet<String> =
            dynamic_prefixes.into_iter().map(Into::into).collect();

        let mut prefixes_by_length: Vec<String> = dynamic_prefixes.iter().cloned().collect();
        prefixes_by_length.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            static_names,
            dynamic_prefixes,
            prefixes_by_length,
        }
    }

    /// The hand-written fallback vocabulary.
    pub fn builtin() -> Self {
        Self::new(builtin::static_names(), builtin::DYNAMIC_PREFIXES.iter().copied())
    }

    /// Parse a JSON vocabulary file.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Load a JSON vocabulary file from disk.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let json = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = Self::from_json(&json)?;
        tracing::debug!(
            "loaded vocabulary from {}: {} static names, {} dynamic prefixes",
            path.display(),
            vocabulary.static_count(),
            vocabulary.prefix_count()
        );
        Ok(vocabulary)
    }

    /// Is `name` a complete static class?
    pub fn is_static(&self, name: &str) -> bool {
        self.static_names.contains(name)
    }

    /// Does `prefix` accept a value (`prefix-[value]`)?
    pub fn has_dynamic_prefix(&self, prefix: &str) -> bool {
        self.dynamic_prefixes.contains(prefix)
    }

    /// Dynamic prefixes ordered longest first, ties broken alphabetically.
    pub fn prefixes_longest_first(&self) -> impl Iterator<Item = &str> {
        self.prefixes_by_length.iter().map(String::as_str)
    }

    pub fn static_count(&self) -> usize {
        self.static_names.len()
    }

    pub fn prefix_count(&self) -> usize {
        self.dynamic_prefixes.len()
    }

    /// Sorted serializable copy.
    pub fn to_file(&self) -> VocabularyFile {
        let mut static_names: Vec<String> = self.static_names.iter().cloned().collect();
        static_names.sort();
        let mut dynamic_prefixes: Vec<String> = self.dynamic_prefixes.iter().cloned().collect();
        dynamic_prefixes.sort();
        VocabularyFile {
            static_names,
            dynamic_prefixes,
        }
    }
}

impl TryFrom<VocabularyFile> for Vocabulary {
    type Error = VocabularyError;

    fn try_from(file: VocabularyFile) -> Result<Self, Self::Error> {
        if file.static_names.is_empty() && file.dynamic_prefixes.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self::new(file.static_names, file.dynamic_prefixes))
    }
}

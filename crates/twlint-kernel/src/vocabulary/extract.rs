//! Vocabulary extraction from style-definition sources.
//!
//! The styling package keeps its classes in three files:
//!
//! - `tailwind.styles.ts` and `custom.styles.ts`: quoted keys inside
//!   `css.create({ ... })` blocks are static class names
//! - `dynamic.styles.ts`: keys whose value is an arrow function are dynamic
//!   prefixes (`'min-w': (v: string) => ({ ... })`)
//!
//! This is a textual scan, not a TypeScript parse. When the directory or all
//! of the files are missing, the [`builtin`](super::builtin) table is used.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{builtin, VocabularyFile};
use crate::error::VocabularyError;
use crate::pattern;

pub const STATIC_SOURCES: &[&str] = &["tailwind.styles.ts", "custom.styles.ts"];
pub const DYNAMIC_SOURCE: &str = "dynamic.styles.ts";

static CREATE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| pattern::literal(r"(?s)css\.create\(\{(.*?)\}\)"));

static QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| pattern::literal(r#"['"`]([^'"` ]+)['"`]\s*:"#));

static ARROW_KEY: LazyLock<Regex> = LazyLock::new(|| {
    pattern::literal(r#"(?:['"`]([^'"` ]+)['"`]|([a-zA-Z][a-zA-Z0-9]*))\s*:\s*\([^)]*\)\s*=>"#)
});

/// Result of [`extract_dir`].
#[derive(Debug, Clone)]
pub struct Extraction {
    pub vocabulary: VocabularyFile,
    /// True when nothing usable was found and the builtin table was used.
    pub used_fallback: bool,
}

/// Collect static names from the `css.create` blocks of one source file.
pub fn static_names_in(content: &str, names: &mut BTreeSet<String>) {
    for block in CREATE_BLOCK.captures_iter(content) {
        let body = block.get(1).map_or("", |m| m.as_str());
        for key in QUOTED_KEY.captures_iter(body) {
            if let Some(name) = key.get(1) {
                names.insert(name.as_str().to_string());
            }
        }
    }
}

/// Collect dynamic prefixes (arrow-function keys) from one source file.
pub fn dynamic_prefixes_in(content: &str, prefixes: &mut BTreeSet<String>) {
    for key in ARROW_KEY.captures_iter(content) {
        if let Some(name) = key.get(1).or_else(|| key.get(2)) {
            prefixes.insert(name.as_str().to_string());
        }
    }
}

/// Extract a vocabulary from a style-definition directory.
///
/// Missing files are skipped. Files that exist but cannot be read are an
/// error.
pub fn extract_dir(dir: &Path) -> Result<Extraction, VocabularyError> {
    if !dir.is_dir() {
        tracing::warn!("style directory {} does not exist", dir.display());
        return Ok(fallback());
    }

    let mut static_names = BTreeSet::new();
    let mut dynamic_prefixes = BTreeSet::new();
    let mut found_any = false;

    for file in STATIC_SOURCES {
        if let Some(content) = read_optional(&dir.join(file))? {
            found_any = true;
            static_names_in(&content, &mut static_names);
        }
    }
    if let Some(content) = read_optional(&dir.join(DYNAMIC_SOURCE))? {
        found_any = true;
        dynamic_prefixes_in(&content, &mut dynamic_prefixes);
    }

    if !found_any || (static_names.is_empty() && dynamic_prefixes.is_empty()) {
        tracing::warn!("no style definitions found in {}", dir.display());
        return Ok(fallback());
    }

    tracing::info!(
        "extracted {} static names and {} dynamic prefixes from {}",
        static_names.len(),
        dynamic_prefixes.len(),
        dir.display()
    );

    Ok(Extraction {
        vocabulary: VocabularyFile {
            static_names: static_names.into_iter().collect(),
            dynamic_prefixes: dynamic_prefixes.into_iter().collect(),
        },
        used_fallback: false,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>, VocabularyError> {
    if !path.is_file() {
        tracing::debug!("skipping missing style source {}", path.display());
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn fallback() -> Extraction {
    let mut static_names = builtin::static_names();
    static_names.sort();
    static_names.dedup();
    let mut dynamic_prefixes: Vec<String> =
        builtin::DYNAMIC_PREFIXES.iter().map(|p| p.to_string()).collect();
    dynamic_prefixes.sort();

    Extraction {
        vocabulary: VocabularyFile {
            static_names,
            dynamic_prefixes,
        },
        used_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAILWIND: &str = r#"
import { css } from 'react-strict-dom';

export const tailwindStyles = css.create({
  flex: { display: 'flex' },
  'p-4': { padding: 16 },
  "bg-red-500": { backgroundColor: '#ef4444' },
  'w-1/2': { width: '50%' },
});

const notStyles = { 'ignored-key': 1 };
"#;

    const DYNAMIC: &str = r#"
export const dynamicStyles = css.create({
  w: (w: string | number) => ({ width: w }),
  'min-w': (minW: string | number) => ({ minWidth: minW }),
  "border-color": (c: string) => ({ borderColor: c }),
});
"#;

    #[test]
    fn static_names_come_from_quoted_keys_in_create_blocks() {
        let mut names = BTreeSet::new();
        static_names_in(TAILWIND, &mut names);
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        // `flex` is unquoted and `ignored-key` is outside css.create.
        assert_eq!(names, vec!["bg-red-500", "p-4", "w-1/2"]);
    }

    #[test]
    fn dynamic_prefixes_come_from_arrow_function_keys() {
        let mut prefixes = BTreeSet::new();
        dynamic_prefixes_in(DYNAMIC, &mut prefixes);
        let prefixes: Vec<&str> = prefixes.iter().map(String::as_str).collect();
        assert_eq!(prefixes, vec!["border-color", "min-w", "w"]);
    }

    #[test]
    fn extract_dir_reads_all_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tailwind.styles.ts"), TAILWIND).unwrap();
        fs::write(
            dir.path().join("custom.styles.ts"),
            "export const custom = css.create({ 'flex-cc': {} });",
        )
        .unwrap();
        fs::write(dir.path().join("dynamic.styles.ts"), DYNAMIC).unwrap();

        let extraction = extract_dir(dir.path()).unwrap();
        assert!(!extraction.used_fallback);
        assert!(extraction.vocabulary.static_names.contains(&"flex-cc".to_string()));
        assert!(extraction.vocabulary.static_names.contains(&"p-4".to_string()));
        assert_eq!(
            extraction.vocabulary.dynamic_prefixes,
            vec!["border-color", "min-w", "w"]
        );
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let extraction = extract_dir(Path::new("/no/such/styles/dir")).unwrap();
        assert!(extraction.used_fallback);
        assert!(extraction.vocabulary.static_names.contains(&"flex".to_string()));
        assert!(extraction.vocabulary.dynamic_prefixes.contains(&"h".to_string()));
    }

    #[test]
    fn empty_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let extraction = extract_dir(dir.path()).unwrap();
        assert!(extraction.used_fallback);
    }
}

//! Detection of dynamic classes whose value is an embedded expression.
//!
//! `` `border-color-[${c}]` `` flattens to `border-color-[EXPR_PLACEHOLDER]`.
//! The value is unknown until runtime, so only the prefix can be judged.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::pattern;
use crate::template::{Reconstruction, PLACEHOLDER};
use crate::vocabulary::Vocabulary;

static DYNAMIC_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    pattern::literal(&format!(
        r"([A-Za-z-]+)-\[{}\]",
        regex::escape(PLACEHOLDER)
    ))
});

/// A `prefix-[...]` whose prefix is not a dynamic prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPrefix {
    /// Display form, `"<prefix>-[...]"`.
    pub token: String,
    /// The prefix's span in the flattened text.
    pub range: Range<usize>,
}

/// What [`detect_dynamic`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Whole `prefix-[PLACEHOLDER]` matches with a dynamic prefix. These are
    /// valid and exempt from tokenization.
    pub valid_spans: Vec<Range<usize>>,
    pub invalid_prefixes: Vec<InvalidPrefix>,
}

/// Scan the flattened text for `prefix-[PLACEHOLDER]`, leftmost first.
///
/// A match only counts where the placeholder text really is an inserted
/// placeholder, not a literal `EXPR_PLACEHOLDER` the user typed.
pub fn detect_dynamic(reconstruction: &Reconstruction, vocab: &Vocabulary) -> Detection {
    let mut detection = Detection::default();

    for caps in DYNAMIC_EXPRESSION.captures_iter(&reconstruction.flattened) {
        let (Some(whole), Some(prefix)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // Skip "-[" to land on the placeholder.
        let placeholder_start = prefix.end() + 2;
        if !reconstruction.is_placeholder_at(placeholder_start) {
            continue;
        }

        if vocab.has_dynamic_prefix(prefix.as_str()) {
            detection.valid_spans.push(whole.range());
        } else {
            detection.invalid_prefixes.push(InvalidPrefix {
                token: format!("{}-[...]", prefix.as_str()),
                range: prefix.range(),
            });
        }
    }

    detection
}

//! Template reconstruction.
//!
//! A template argument `` `a ${x} b` `` is flattened into one string with a
//! placeholder standing in for every embedded expression:
//!
//! ```text
//! source:     `h-[${size}] flex`
//! flattened:  h-[EXPR_PLACEHOLDER] flex
//! ```
//!
//! Each literal segment gets an [`OffsetMapping`] from its position in the
//! flattened string to its position in the source, so anything found in the
//! flattened text can be reported where the user wrote it.

use std::ops::Range;

use crate::validator::TemplateArg;

/// Stand-in for an embedded expression in flattened text.
pub const PLACEHOLDER: &str = "EXPR_PLACEHOLDER";

/// Width of the template's opening delimiter (`` ` ``).
const OPEN_WIDTH: usize = 1;
/// Width of `${` plus `}` around each expression.
const EXPR_DELIMITER_WIDTH: usize = 3;

/// Where one literal segment sits in the flattened text and in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetMapping {
    pub reconstructed_start: usize,
    pub reconstructed_len: usize,
    pub original_start: usize,
}

impl OffsetMapping {
    pub fn reconstructed_end(&self) -> usize {
        self.reconstructed_start + self.reconstructed_len
    }

    /// Does `range` lie entirely inside this segment?
    pub fn contains(&self, range: &Range<usize>) -> bool {
        self.reconstructed_start <= range.start && range.end <= self.reconstructed_end()
    }
}

/// A flattened template and the map back to source offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub flattened: String,
    /// One entry per literal segment, ordered and non-overlapping.
    pub offset_map: Vec<OffsetMapping>,
    /// Start of every inserted placeholder in `flattened`, ascending.
    pub placeholders: Vec<usize>,
}

impl Reconstruction {
    /// Map a range of flattened text back to the source.
    ///
    /// Returns `None` unless the range lies wholly inside one literal
    /// segment.
    pub fn to_original(&self, range: &Range<usize>) -> Option<Range<usize>> {
        let mapping = self.offset_map.iter().find(|m| m.contains(range))?;
        let delta = mapping.original_start as isize - mapping.reconstructed_start as isize;
        let shift = |offset: usize| offset.checked_add_signed(delta);
        Some(shift(range.start)?..shift(range.end)?)
    }

    /// Was a placeholder inserted at `offset`?
    pub fn is_placeholder_at(&self, offset: usize) -> bool {
        self.placeholders.binary_search(&offset).is_ok()
    }

    /// Ranges of the inserted placeholders.
    pub fn placeholder_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.placeholders
            .iter()
            .map(|&start| start..start + PLACEHOLDER.len())
    }

    /// The flattened text with the placeholders left out.
    pub fn literal_text(&self) -> String {
        self.offset_map
            .iter()
            .map(|m| &self.flattened[m.reconstructed_start..m.reconstructed_end()])
            .collect()
    }
}

/// Flatten `template`, substituting [`PLACEHOLDER`] for each expression.
pub fn reconstruct(template: &TemplateArg) -> Reconstruction {
    let segments = template.segments();
    let expressions = template.expressions();

    let mut flattened = String::new();
    let mut offset_map = Vec::with_capacity(segments.len());
    let mut placeholders = Vec::with_capacity(expressions.len());
    let mut original = template.start() + OPEN_WIDTH;

    for (i, segment) in segments.iter().enumerate() {
        offset_map.push(OffsetMapping {
            reconstructed_start: flattened.len(),
            reconstructed_len: segment.len(),
            original_start: original,
        });
        flattened.push_str(segment);
        original += segment.len();

        if let Some(expression) = expressions.get(i) {
            placeholders.push(flattened.len());
            flattened.push_str(PLACEHOLDER);
            original += EXPR_DELIMITER_WIDTH + expression.len();
        }
    }

    Reconstruction {
        flattened,
        offset_map,
        placeholders,
    }
}

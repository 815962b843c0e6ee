//! Source positions and byte-offset conversion.
//!
//! Lines and columns are both 1-based. Columns count Unicode scalar values,
//! so a token after `"é"` on the same line sits one column to the right of
//! the accent, not two.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A line:column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end positions of a flagged token. The end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: Position,
    pub end: Position,
}

impl SourceSpan {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Converts byte offsets into [`Position`]s for one source text.
///
/// Built once per file; lookups are a binary search over line starts plus a
/// character count within the line.
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offsets where each line starts.
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// The text this index was built from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Convert a byte offset to a position.
    ///
    /// Offsets past the end clamp to the end of the source; offsets inside a
    /// multi-byte character round down to its first byte.
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));
        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();

        Position::new(line + 1, column + 1)
    }

    /// Convert a byte range to a span.
    pub fn span(&self, range: &Range<usize>) -> SourceSpan {
        SourceSpan::new(self.position(range.start), self.position(range.end))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

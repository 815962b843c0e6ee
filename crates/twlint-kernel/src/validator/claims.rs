//! Claim tracking over flattened template text.
//!
//! Placeholders and valid `prefix-[${expr}]` spans are claimed: they are
//! already accounted for and must not be classified again. Claimed bytes
//! are never whitespace, so tokenizing the flattened text still yields the
//! runs the user wrote. Within a run, claimed bytes behave as if deleted:
//! what is left is the token the user actually spelled out.

use std::ops::Range;

use crate::tokenizer::{tokenize, Token};

/// Per-byte claim flags for one flattened string.
#[derive(Debug, Clone)]
pub(crate) struct Claims {
    claimed: Vec<bool>,
}

/// A whitespace-delimited run of flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Run<'a> {
    /// The single unclaimed piece of the run: classify it. For `nope${x}`
    /// this is `nope`.
    Unclaimed(Token<'a>),
    /// Entirely placeholders or valid dynamic spans.
    Claimed,
    /// Unclaimed text on both sides of a claimed span, such as `a${x}b`.
    /// With the claim removed it reads as one token spread over two
    /// segments, which cannot be located in the source.
    Straddling(Token<'a>),
}

impl Claims {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            claimed: vec![false; len],
        }
    }

    pub(crate) fn claim(&mut self, range: Range<usize>) {
        let end = range.end.min(self.claimed.len());
        if let Some(slice) = self.claimed.get_mut(range.start..end) {
            slice.fill(true);
        }
    }

    pub(crate) fn is_claimed(&self, offset: usize) -> bool {
        self.claimed.get(offset).copied().unwrap_or(false)
    }

    /// Maximal unclaimed sub-ranges of `range`.
    fn unclaimed_pieces(&self, range: Range<usize>) -> Vec<Range<usize>> {
        let mut pieces = Vec::new();
        let mut start = None;
        for offset in range.clone() {
            match (self.is_claimed(offset), start) {
                (false, None) => start = Some(offset),
                (true, Some(s)) => {
                    pieces.push(s..offset);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            pieces.push(s..range.end);
        }
        pieces
    }

    /// Tokenize `text` and reduce every run to what is left unclaimed.
    pub(crate) fn runs<'a>(&self, text: &'a str) -> Vec<Run<'a>> {
        tokenize(text)
            .into_iter()
            .map(|token| match self.unclaimed_pieces(token.range()).as_slice() {
                [] => Run::Claimed,
                [piece] => match text.get(piece.clone()) {
                    Some(piece_text) => Run::Unclaimed(Token {
                        text: piece_text,
                        start: piece.start,
                        end: piece.end,
                    }),
                    None => Run::Straddling(token),
                },
                _ => Run::Straddling(token),
            })
            .collect()
    }
}

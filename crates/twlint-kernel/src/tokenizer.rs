//! Whitespace tokenization with offsets.

use std::ops::Range;

/// A whitespace-delimited piece of a scanned string.
///
/// `start` and `end` are half-open byte offsets into that string, which is
/// not necessarily the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `text` on runs of whitespace.
///
/// Offsets are found by walking forward, so a token whose text also occurs
/// earlier in the string is still located correctly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token {
                    text: &text[s..i],
                    start: s,
                    end: i,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &text[s..],
            start: s,
            end: text.len(),
        });
    }

    tokens
}

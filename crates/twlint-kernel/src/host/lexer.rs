//! Token-level lexer for JavaScript and TypeScript source.
//!
//! Only what call-site discovery needs is recognized: identifiers, string
//! and template literals, comments and a handful of punctuation. Anything
//! else lexes as an error and is skipped by the scanner.
//!
//! Template literals are lexed in one piece by a callback that records the
//! absolute range of every literal segment and every `${...}` expression.
//! Expressions may nest braces, strings and further templates.

use std::ops::Range;

use logos::{Lexer, Logos};

/// Literal segments and expression bodies of one template, as absolute
/// source ranges. There is always one more segment than expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParts {
    pub segments: Vec<Range<usize>>,
    /// Text between `${` and `}`.
    pub expressions: Vec<Range<usize>>,
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum HostToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token("//", line_comment)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", |lex| string_literal(lex, b'"'))]
    #[token("'", |lex| string_literal(lex, b'\''))]
    Str,

    #[token("`", template_literal)]
    Template(TemplateParts),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semi,
    #[token("*")]
    Star,
}

fn line_comment(lex: &mut Lexer<'_, HostToken>) -> bool {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    true
}

fn block_comment(lex: &mut Lexer<'_, HostToken>) -> bool {
    let rest = lex.remainder();
    lex.bump(rest.find("*/").map_or(rest.len(), |end| end + 2));
    true
}

fn string_literal(lex: &mut Lexer<'_, HostToken>, quote: u8) -> bool {
    match skip_string(lex.remainder().as_bytes(), 0, quote) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

fn template_literal(lex: &mut Lexer<'_, HostToken>) -> Option<TemplateParts> {
    let base = lex.span().end;
    let (len, parts) = scan_template(lex.remainder().as_bytes(), base)?;
    lex.bump(len);
    Some(parts)
}

/// Scan a template body starting just after the opening backtick.
///
/// Returns the number of bytes consumed (including the closing backtick)
/// and the parts shifted by `base`.
fn scan_template(bytes: &[u8], base: usize) -> Option<(usize, TemplateParts)> {
    let mut parts = TemplateParts::default();
    let mut segment_start = 0;
    let mut i = 0;

    loop {
        match *bytes.get(i)? {
            b'\\' => i += 2,
            b'`' => {
                parts.segments.push(base + segment_start..base + i);
                return Some((i + 1, parts));
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                parts.segments.push(base + segment_start..base + i);
                let body = i + 2;
                let close = skip_expression(bytes, body)?;
                parts.expressions.push(base + body..base + close);
                i = close + 1;
                segment_start = i;
            }
            _ => i += 1,
        }
    }
}

/// Index of the `}` closing an expression that starts at `start`.
fn skip_expression(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;

    loop {
        match *bytes.get(i)? {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(i),
            b'}' => depth -= 1,
            quote @ (b'"' | b'\'') => {
                i = skip_string(bytes, i + 1, quote)?;
                continue;
            }
            b'`' => {
                let (len, _) = scan_template(&bytes[i + 1..], 0)?;
                i += 1 + len;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i += bytes[i..].iter().position(|&b| b == b'\n')?;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += bytes[i + 2..].windows(2).position(|w| w == b"*/")? + 4;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
}

/// Index just past the closing `quote` of a string whose body starts at
/// `start`, or `None` if the string is unterminated on its line.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start;
    loop {
        match *bytes.get(i)? {
            b'\\' => i += 2,
            b'\n' => return None,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
}

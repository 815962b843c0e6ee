//! Call-site discovery in JavaScript and TypeScript source.
//!
//! This is a token walk, not a parser. From the [`lexer`] output it
//! collects:
//!
//! - comment bodies, for the [`pragma`]
//! - `import` declarations, for the [`ImportTracker`]
//! - `callee(...)` sites whose first argument is a string literal, a
//!   template literal or an array literal
//!
//! Anything the walk does not understand yields no argument, so the call
//! is simply not validated.

pub mod imports;
pub mod lexer;
pub mod pragma;

pub use imports::ImportTracker;
pub use lexer::{HostToken, TemplateParts};

use std::ops::Range;

use logos::Logos;

use crate::validator::{Argument, StringArg, TemplateArg, QUOTE_WIDTH};

/// The function expression of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// `tw(...)`
    Ident(String),
    /// `ns.tw(...)`. `object` is `None` when it is not a plain identifier,
    /// as in `get().tw(...)`.
    Member {
        object: Option<String>,
        property: String,
    },
}

impl Callee {
    /// The called name: the identifier or the member property.
    pub fn name(&self) -> &str {
        match self {
            Callee::Ident(name) => name,
            Callee::Member { property, .. } => property,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedImport {
    pub imported: String,
    pub local: String,
}

/// `import { a, b as c } from "module"` or `import * as ns from "module"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDecl {
    pub module: String,
    pub named: Vec<NamedImport>,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub callee: Callee,
    /// Offset of the called name.
    pub start: usize,
    /// The first argument, when it has a shape that can be validated.
    pub argument: Option<Argument>,
}

/// Everything [`scan`] found in one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceScan {
    /// Comment bodies without their delimiters.
    pub comments: Vec<String>,
    pub imports: Vec<ImportDecl>,
    pub calls: Vec<CallSite>,
}

#[derive(Debug)]
struct Lexeme<'s> {
    token: HostToken,
    range: Range<usize>,
    text: &'s str,
}

impl Lexeme<'_> {
    fn is_ident(&self, word: &str) -> bool {
        self.token == HostToken::Ident && self.text == word
    }
}

pub fn scan(source: &str) -> SourceScan {
    let lexemes: Vec<Lexeme<'_>> = HostToken::lexer(source)
        .spanned()
        .filter_map(|(token, range)| match token {
            Ok(HostToken::Whitespace) | Err(()) => None,
            Ok(token) => Some(Lexeme {
                token,
                text: &source[range.clone()],
                range,
            }),
        })
        .collect();

    let mut scan = SourceScan::default();
    for (i, lexeme) in lexemes.iter().enumerate() {
        match lexeme.token {
            HostToken::LineComment => {
                scan.comments.push(lexeme.text.trim_start_matches('/').to_string());
            }
            HostToken::BlockComment => {
                let body = lexeme.text.strip_prefix("/*").unwrap_or(lexeme.text);
                scan.comments.push(body.strip_suffix("*/").unwrap_or(body).to_string());
            }
            HostToken::Ident if lexeme.text == "import" => {
                if let Some(decl) = parse_import(&lexemes[i + 1..]) {
                    scan.imports.push(decl);
                }
            }
            HostToken::LParen => {
                if let Some(call) = call_site(source, &lexemes, i) {
                    scan.calls.push(call);
                }
            }
            _ => {}
        }
    }

    tracing::debug!(
        "scanned {} comments, {} imports, {} calls",
        scan.comments.len(),
        scan.imports.len(),
        scan.calls.len()
    );
    scan
}

/// Parse the declaration following an `import` keyword.
fn parse_import(rest: &[Lexeme<'_>]) -> Option<ImportDecl> {
    let mut tokens = rest.iter().peekable();
    let mut decl = ImportDecl::default();

    // `import type { ... }` binds types only.
    if tokens.peek()?.is_ident("type")
        && rest
            .get(1)
            .is_some_and(|next| matches!(next.token, HostToken::LBrace | HostToken::Star))
    {
        return None;
    }

    // Default import: `import x, { tw } from ...`
    if tokens.peek()?.token == HostToken::Ident && !tokens.peek()?.is_ident("from") {
        tokens.next();
        if tokens.peek()?.token == HostToken::Comma {
            tokens.next();
        }
    }

    if tokens.peek().is_some_and(|l| l.token == HostToken::Star) {
        tokens.next();
        if !tokens.next()?.is_ident("as") {
            return None;
        }
        let local = tokens.next()?;
        if local.token != HostToken::Ident {
            return None;
        }
        decl.namespace = Some(local.text.to_string());
    } else if tokens.peek().is_some_and(|l| l.token == HostToken::LBrace) {
        tokens.next();
        loop {
            let lexeme = tokens.next()?;
            match lexeme.token {
                HostToken::RBrace => break,
                HostToken::Comma => {}
                HostToken::Ident => {
                    let mut imported = lexeme.text;
                    // `{ type Foo }`
                    if imported == "type"
                        && tokens
                            .peek()
                            .is_some_and(|l| l.token == HostToken::Ident && !l.is_ident("as"))
                    {
                        imported = tokens.next()?.text;
                    }
                    let local = if tokens.peek().is_some_and(|l| l.is_ident("as")) {
                        tokens.next();
                        tokens.next()?.text
                    } else {
                        imported
                    };
                    decl.named.push(NamedImport {
                        imported: imported.to_string(),
                        local: local.to_string(),
                    });
                }
                _ => return None,
            }
        }
    }

    if !tokens.next()?.is_ident("from") {
        return None;
    }
    let module = tokens.next()?;
    if module.token != HostToken::Str {
        return None;
    }
    decl.module = string_body(module.text).to_string();
    Some(decl)
}

/// Build the call site whose argument list opens at `lexemes[open]`.
fn call_site(source: &str, lexemes: &[Lexeme<'_>], open: usize) -> Option<CallSite> {
    let name = lexemes.get(open.checked_sub(1)?)?;
    if name.token != HostToken::Ident {
        return None;
    }
    let before = open.checked_sub(2).and_then(|i| lexemes.get(i));

    let callee = match before {
        Some(dot) if dot.token == HostToken::Dot => {
            let object = open
                .checked_sub(3)
                .and_then(|i| lexemes.get(i))
                .filter(|l| l.token == HostToken::Ident)
                .map(|l| l.text.to_string());
            Callee::Member {
                object,
                property: name.text.to_string(),
            }
        }
        // A declaration, not a call.
        Some(keyword) if keyword.is_ident("function") => return None,
        _ => Callee::Ident(name.text.to_string()),
    };

    Some(CallSite {
        callee,
        start: name.range.start,
        argument: first_argument(source, lexemes, open),
    })
}

fn first_argument(source: &str, lexemes: &[Lexeme<'_>], open: usize) -> Option<Argument> {
    let first = lexemes.get(open + 1)?;
    let (argument, after) = match &first.token {
        HostToken::Str => (Argument::Literal(string_arg(first)), open + 2),
        HostToken::Template(parts) => (
            Argument::Template(template_arg(source, first.range.start, parts)?),
            open + 2,
        ),
        HostToken::LBracket => {
            let (elements, close) = array_elements(lexemes, open + 1)?;
            (Argument::Array(elements), close + 1)
        }
        _ => return None,
    };

    let ends_argument = lexemes
        .get(after)
        .is_some_and(|l| matches!(l.token, HostToken::RParen | HostToken::Comma));
    ends_argument.then_some(argument)
}

/// Elements of the array opened at `lexemes[open]` that are a single string
/// literal, and the index of the closing bracket.
fn array_elements(lexemes: &[Lexeme<'_>], open: usize) -> Option<(Vec<StringArg>, usize)> {
    let mut elements = Vec::new();
    let mut current: Vec<&Lexeme<'_>> = Vec::new();
    let mut depth = 0usize;

    for (i, lexeme) in lexemes.iter().enumerate().skip(open + 1) {
        match lexeme.token {
            HostToken::LParen | HostToken::LBracket | HostToken::LBrace => depth += 1,
            HostToken::RParen | HostToken::RBracket | HostToken::RBrace if depth > 0 => depth -= 1,
            HostToken::RBracket => {
                push_element(&mut elements, &mut current);
                return Some((elements, i));
            }
            HostToken::RParen | HostToken::RBrace => return None,
            HostToken::Comma if depth == 0 => {
                push_element(&mut elements, &mut current);
                continue;
            }
            _ => {}
        }
        current.push(lexeme);
    }
    None
}

fn push_element(elements: &mut Vec<StringArg>, current: &mut Vec<&Lexeme<'_>>) {
    if let [single] = current.as_slice() {
        if single.token == HostToken::Str {
            elements.push(string_arg(single));
        }
    }
    current.clear();
}

fn string_body(text: &str) -> &str {
    text.get(QUOTE_WIDTH..text.len().saturating_sub(QUOTE_WIDTH))
        .unwrap_or("")
}

fn string_arg(lexeme: &Lexeme<'_>) -> StringArg {
    StringArg::new(string_body(lexeme.text), lexeme.range.start)
}

fn template_arg(source: &str, start: usize, parts: &TemplateParts) -> Option<TemplateArg> {
    let text = |ranges: &[Range<usize>]| -> Option<Vec<String>> {
        ranges
            .iter()
            .map(|r| source.get(r.clone()).map(str::to_string))
            .collect()
    };
    TemplateArg::new(start, text(&parts.segments)?, text(&parts.expressions)?)
}

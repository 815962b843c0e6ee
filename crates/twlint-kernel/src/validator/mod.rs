//! Validation of `tw(...)` arguments.
//!
//! The validator takes one argument and reports every token that is not a
//! recognized class, located in the original source. It handles:
//!
//! - **String literals**: tokenize, classify, offset past the opening quote
//! - **Arrays of string literals**: each element on its own
//! - **Templates**: reconstruct, detect `prefix-[${expr}]`, then classify the
//!   literal runs that are not claimed by an expression
//!
//! Validation never fails. Input with nothing to check yields no findings.
//!
//! # Example
//!
//! ```
//! use twlint_kernel::{Argument, StringArg, Validator, Vocabulary};
//! use twlint_types::LineIndex;
//!
//! let source = r#"tw("flex nope")"#;
//! let vocab = Vocabulary::new(["flex"], ["h"]);
//! let argument = Argument::Literal(StringArg::new("flex nope", 3));
//!
//! let findings = Validator::new(&vocab).validate(&argument, &LineIndex::new(source));
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].token, "nope");
//! assert_eq!(&source[findings[0].range.clone()], "nope");
//! ```

mod claims;

use std::ops::Range;

use twlint_types::{Finding, LineIndex};

use crate::classifier::classify;
use crate::detector::detect_dynamic;
use crate::template::{reconstruct, Reconstruction};
use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;
use claims::{Claims, Run};

/// Width of a string literal's opening quote.
pub const QUOTE_WIDTH: usize = 1;

/// A string literal argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArg {
    /// Raw text between the quotes.
    pub text: String,
    /// Source offset of the opening quote.
    pub start: usize,
}

impl StringArg {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }

    /// Source offset of the first byte of `text`.
    pub fn content_start(&self) -> usize {
        self.start + QUOTE_WIDTH
    }
}

/// A template literal argument: `n + 1` literal segments around `n`
/// embedded expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArg {
    start: usize,
    segments: Vec<String>,
    expressions: Vec<String>,
}

impl TemplateArg {
    /// `start` is the source offset of the opening backtick. Segments are
    /// raw source text; expressions are the source text between `${` and
    /// `}` and only their lengths matter.
    ///
    /// Returns `None` unless there is exactly one more segment than there
    /// are expressions.
    pub fn new(start: usize, segments: Vec<String>, expressions: Vec<String>) -> Option<Self> {
        (segments.len() == expressions.len() + 1).then_some(Self {
            start,
            segments,
            expressions,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn expressions(&self) -> &[String] {
        &self.expressions
    }

    /// Source range of each `${...}`, from `$` through `}`.
    pub fn expression_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::with_capacity(self.expressions.len());
        let mut offset = self.start + 1;
        for (segment, expression) in self.segments.iter().zip(&self.expressions) {
            offset += segment.len();
            let end = offset + expression.len() + 3;
            spans.push(offset..end);
            offset = end;
        }
        spans
    }
}

/// The argument shapes a `tw(...)` call can be validated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Literal(StringArg),
    Template(TemplateArg),
    Array(Vec<StringArg>),
}

/// Validates arguments against one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> Validator<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Invalid tokens in `argument`, ordered by source position.
    pub fn validate(&self, argument: &Argument, index: &LineIndex<'_>) -> Vec<Finding> {
        let mut findings = match argument {
            Argument::Literal(literal) => self.validate_literal(literal, index),
            Argument::Array(elements) => elements
                .iter()
                .flat_map(|element| self.validate_literal(element, index))
                .collect(),
            Argument::Template(template) => self.validate_template(template, index),
        };
        findings.sort_by_key(|f| (f.range.start, f.range.end));
        findings
    }

    fn validate_literal(&self, literal: &StringArg, index: &LineIndex<'_>) -> Vec<Finding> {
        let base = literal.content_start();
        tokenize(&literal.text)
            .into_iter()
            .filter(|token| !classify(token.text, self.vocab).is_valid())
            .map(|token| {
                let range = base + token.start..base + token.end;
                Finding::new(token.text, range.clone(), index.span(&range))
            })
            .collect()
    }

    fn validate_template(&self, template: &TemplateArg, index: &LineIndex<'_>) -> Vec<Finding> {
        let rec = reconstruct(template);
        let detection = detect_dynamic(&rec, self.vocab);
        let mut findings = Vec::new();

        for invalid in &detection.invalid_prefixes {
            push_mapped(&mut findings, &rec, &invalid.token, &invalid.range, index);
        }

        let mut claims = Claims::new(rec.flattened.len());
        for placeholder in rec.placeholder_ranges() {
            claims.claim(placeholder);
        }
        for span in &detection.valid_spans {
            claims.claim(span.clone());
        }

        for run in claims.runs(&rec.flattened) {
            match run {
                Run::Unclaimed(token) => {
                    if !classify(token.text, self.vocab).is_valid() {
                        push_mapped(&mut findings, &rec, token.text, &token.range(), index);
                    }
                }
                Run::Straddling(token) => {
                    tracing::debug!("skipping `{}`: crosses an expression boundary", token.text);
                }
                Run::Claimed => {}
            }
        }

        findings
    }
}

fn push_mapped(
    findings: &mut Vec<Finding>,
    rec: &Reconstruction,
    token: &str,
    flattened: &Range<usize>,
    index: &LineIndex<'_>,
) {
    match rec.to_original(flattened) {
        Some(range) => findings.push(Finding::new(token, range.clone(), index.span(&range))),
        None => tracing::debug!("dropping `{token}`: not within a single template segment"),
    }
}

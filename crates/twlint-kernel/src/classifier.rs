//! Token classification against a [`Vocabulary`].
//!
//! Classification is an ordered table of named rules. Each rule either
//! decides (`Some`) or passes (`None`); the first decision wins and a token
//! no rule decides is invalid. The order is part of the contract:
//!
//! 1. `static-name`: the whole token is a static class
//! 2. `arbitrary-value`: `prefix-[value]` with a dynamic prefix and a
//!    non-blank value
//! 3. `prefixed-suffix`: `prefix-suffix` with a dynamic prefix, unless the
//!    suffix is a bare value that should have been bracketed (`h-50px`)

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern;
use crate::vocabulary::Vocabulary;

/// Outcome of classifying one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Static,
    Dynamic { prefix: &'a str, value: &'a str },
    Invalid,
}

impl Classification<'_> {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Static => "static",
            Classification::Dynamic { .. } => "dynamic",
            Classification::Invalid => "invalid",
        }
    }
}

/// A single classification rule. `None` defers to the next rule.
pub type Rule = for<'a> fn(&'a str, &Vocabulary) -> Option<Classification<'a>>;

/// The rules in evaluation order.
pub const RULES: &[(&str, Rule)] = &[
    ("static-name", static_name),
    ("arbitrary-value", arbitrary_value),
    ("prefixed-suffix", prefixed_suffix),
];

static ARBITRARY: LazyLock<Regex> =
    LazyLock::new(|| pattern::literal(r"^([A-Za-z-]+)-\[(.*)\]$"));

static BARE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| pattern::literal(r"^(?:\d+(?:px|%|em|rem|vh|vw)|[a-fA-F0-9]{3,8})$"));

/// Classify `token`.
pub fn classify<'a>(token: &'a str, vocab: &Vocabulary) -> Classification<'a> {
    classify_traced(token, vocab).1
}

/// Classify `token` and name the rule that decided, if any.
pub fn classify_traced<'a>(
    token: &'a str,
    vocab: &Vocabulary,
) -> (Option<&'static str>, Classification<'a>) {
    if token.is_empty() {
        return (None, Classification::Invalid);
    }
    for (name, rule) in RULES {
        if let Some(classification) = rule(token, vocab) {
            return (Some(*name), classification);
        }
    }
    (None, Classification::Invalid)
}

/// Split a bracket token into `(prefix, value)`: `h-[50px]` → `("h", "50px")`.
pub fn split_arbitrary(token: &str) -> Option<(&str, &str)> {
    let caps = ARBITRARY.captures(token)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub fn static_name<'a>(token: &'a str, vocab: &Vocabulary) -> Option<Classification<'a>> {
    vocab.is_static(token).then_some(Classification::Static)
}

pub fn arbitrary_value<'a>(token: &'a str, vocab: &Vocabulary) -> Option<Classification<'a>> {
    let (prefix, value) = split_arbitrary(token)?;
    if vocab.has_dynamic_prefix(prefix) && !value.trim().is_empty() {
        Some(Classification::Dynamic { prefix, value })
    } else {
        Some(Classification::Invalid)
    }
}

/// The longest dynamic prefix followed by `-` decides. Only a bare value
/// (`h-50px`, `bg-fff`) is rejected; any other suffix passes as a value.
pub fn prefixed_suffix<'a>(token: &'a str, vocab: &Vocabulary) -> Option<Classification<'a>> {
    let prefix = vocab.prefixes_longest_first().find(|p| {
        token
            .strip_prefix(p)
            .is_some_and(|rest| rest.starts_with('-'))
    })?;

    let (prefix, suffix) = (&token[..prefix.len()], &token[prefix.len() + 1..]);
    if BARE_VALUE.is_match(suffix) {
        return Some(Classification::Invalid);
    }
    Some(Classification::Dynamic {
        prefix,
        value: suffix,
    })
}

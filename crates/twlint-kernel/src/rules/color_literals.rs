use std::sync::LazyLock;

use regex::Regex;
use twlint_types::{Finding, RuleId};

use super::{LintRule, RuleContext};
use crate::classifier::split_arbitrary;
use crate::pattern;
use crate::template::reconstruct;
use crate::tokenizer::tokenize;
use crate::validator::{Argument, StringArg};

static COLOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // #rgb, #rgba, #rrggbb, #rrggbbaa
        r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$",
        r"(?i)^rgba?\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(?:,\s*[0-9.]+)?\s*\)$",
        r"(?i)^hsla?\s*\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*(?:,\s*[0-9.]+)?\s*\)$",
        r"(?i)^(?:red|green|blue|yellow|orange|purple|pink|black|white|gray|grey|transparent|currentColor|inherit|initial|unset)$",
    ]
    .into_iter()
    .map(pattern::literal)
    .collect()
});

/// Is `value` a raw color: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` or a
/// common keyword?
pub fn is_color_literal(value: &str) -> bool {
    let value = value.trim();
    COLOR_PATTERNS.iter().any(|re| re.is_match(value))
}

/// `no-color-literals`: arbitrary values that hard-code a color, such as
/// `bg-[#fff]` or `color-[rgba(0,0,0,0.5)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorLiterals;

impl ColorLiterals {
    fn check_literal(literal: &StringArg, cx: &RuleContext<'_>, out: &mut Vec<Finding>) {
        let base = literal.content_start();
        for token in tokenize(&literal.text) {
            if has_color_value(token.text) {
                let range = base + token.start..base + token.end;
                out.push(Finding::new(token.text, range.clone(), cx.index.span(&range)));
            }
        }
    }
}

fn has_color_value(token: &str) -> bool {
    split_arbitrary(token).is_some_and(|(_, value)| is_color_literal(value))
}

impl LintRule for ColorLiterals {
    fn id(&self) -> RuleId {
        RuleId::NoColorLiterals
    }

    fn check(&self, argument: &Argument, cx: &RuleContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        match argument {
            Argument::Literal(literal) => Self::check_literal(literal, cx, &mut findings),
            Argument::Array(elements) => {
                for element in elements {
                    Self::check_literal(element, cx, &mut findings);
                }
            }
            Argument::Template(template) => {
                // Values built from expressions are unknown; only literal
                // tokens inside one segment can match.
                let rec = reconstruct(template);
                for token in tokenize(&rec.flattened) {
                    if !has_color_value(token.text) {
                        continue;
                    }
                    if let Some(range) = rec.to_original(&token.range()) {
                        findings.push(Finding::new(token.text, range.clone(), cx.index.span(&range)));
                    }
                }
            }
        }
        findings
    }

    fn message(&self, finding: &Finding) -> String {
        let value = split_arbitrary(&finding.token).map_or("", |(_, value)| value);
        format!(
            "Avoid the color literal \"{value}\" in \"{}\". Use a color token or a CSS custom property instead.",
            finding.token
        )
    }
}

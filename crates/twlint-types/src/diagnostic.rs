//! Findings and the diagnostics built from them.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::span::SourceSpan;

/// A flagged token and its location in the original source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Token text as it should appear in a message.
    pub token: String,
    /// Byte offsets in the original source.
    pub range: Range<usize>,
    pub span: SourceSpan,
}

impl Finding {
    pub fn new(token: impl Into<String>, range: Range<usize>, span: SourceSpan) -> Self {
        Self {
            token: token.into(),
            range,
            span,
        }
    }
}

/// Which rule produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Tokens that are not in the class vocabulary.
    NoInvalidClasses,
    /// `${...}` interpolations outside an arbitrary-value bracket.
    NoTemplateExpressions,
    /// Arbitrary values that are raw color literals.
    NoColorLiterals,
}

impl RuleId {
    pub const ALL: [RuleId; 3] = [
        RuleId::NoInvalidClasses,
        RuleId::NoTemplateExpressions,
        RuleId::NoColorLiterals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::NoInvalidClasses => "no-invalid-classes",
            RuleId::NoTemplateExpressions => "no-template-expressions",
            RuleId::NoColorLiterals => "no-color-literals",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// How loudly a diagnostic is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A finding reported by a specific rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
    pub finding: Finding,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.finding.span, self.severity, self.rule, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;
    use rstest::rstest;

    #[rstest]
    #[case::invalid("no-invalid-classes", RuleId::NoInvalidClasses)]
    #[case::template("no-template-expressions", RuleId::NoTemplateExpressions)]
    #[case::color("no-color-literals", RuleId::NoColorLiterals)]
    fn rule_names_round_trip(#[case] name: &str, #[case] rule: RuleId) {
        assert_eq!(name.parse::<RuleId>(), Ok(rule));
        assert_eq!(rule.to_string(), name);
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let err = "no-such-rule".parse::<RuleId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rule: no-such-rule");
    }

    #[test]
    fn diagnostic_serializes_with_kebab_rule_and_lowercase_severity() {
        let diagnostic = Diagnostic {
            rule: RuleId::NoInvalidClasses,
            severity: Severity::Error,
            message: "Invalid class \"bad\"".to_string(),
            finding: Finding::new(
                "bad",
                4..7,
                SourceSpan::new(Position::new(1, 5), Position::new(1, 8)),
            ),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["rule"], "no-invalid-classes");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["finding"]["token"], "bad");
        assert_eq!(json["finding"]["range"]["start"], 4);
        assert_eq!(json["finding"]["span"]["end"]["column"], 8);
    }

    #[test]
    fn display_leads_with_span() {
        let diagnostic = Diagnostic {
            rule: RuleId::NoTemplateExpressions,
            severity: Severity::Warning,
            message: "msg".to_string(),
            finding: Finding::new(
                "${x}",
                0..4,
                SourceSpan::new(Position::new(2, 3), Position::new(2, 7)),
            ),
        };
        assert_eq!(
            diagnostic.to_string(),
            "2:3-2:7 warning [no-template-expressions] msg"
        );
    }
}

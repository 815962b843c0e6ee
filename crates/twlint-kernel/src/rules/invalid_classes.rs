use std::collections::HashSet;

use twlint_types::{Finding, RuleId};

use super::{LintRule, RuleContext};
use crate::validator::{Argument, Validator};

/// `no-invalid-classes`: tokens missing from the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct InvalidClasses {
    exclude: HashSet<String>,
}

impl InvalidClasses {
    /// `exclude` lists tokens that are never reported.
    pub fn new<I, S>(exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }
}

impl LintRule for InvalidClasses {
    fn id(&self) -> RuleId {
        RuleId::NoInvalidClasses
    }

    fn check(&self, argument: &Argument, cx: &RuleContext<'_>) -> Vec<Finding> {
        let mut findings = Validator::new(cx.vocab).validate(argument, cx.index);
        findings.retain(|f| !self.exclude.contains(&f.token));
        findings
    }

    fn message(&self, finding: &Finding) -> String {
        format!(
            "Invalid class \"{}\". Only classes defined in the style vocabulary are allowed.",
            finding.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::StringArg;
    use crate::vocabulary::Vocabulary;
    use twlint_types::LineIndex;

    #[test]
    fn excluded_tokens_are_not_reported() {
        let vocab = Vocabulary::new(["flex"], ["h"]);
        let index = LineIndex::new("tw('flex my-widget nope')");
        let cx = RuleContext {
            vocab: &vocab,
            index: &index,
        };
        let rule = InvalidClasses::new(["my-widget"]);
        let findings = rule.check(
            &Argument::Literal(StringArg::new("flex my-widget nope", 3)),
            &cx,
        );
        let tokens: Vec<&str> = findings.iter().map(|f| f.token.as_str()).collect();
        assert_eq!(tokens, vec!["nope"]);
        assert!(rule.message(&findings[0]).contains("\"nope\""));
    }
}

use twlint_types::{Finding, RuleId};

use super::{LintRule, RuleContext};
use crate::validator::Argument;

/// `no-template-expressions`: `${...}` that is not an arbitrary value.
///
/// `` `h-[${size}]` `` is fine; `` `flex ${extra}` `` hides classes from
/// validation and is reported from `$` through `}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExpressions;

impl LintRule for TemplateExpressions {
    fn id(&self) -> RuleId {
        RuleId::NoTemplateExpressions
    }

    fn check(&self, argument: &Argument, cx: &RuleContext<'_>) -> Vec<Finding> {
        let Argument::Template(template) = argument else {
            return Vec::new();
        };
        let segments = template.segments();

        template
            .expressions()
            .iter()
            .zip(template.expression_spans())
            .enumerate()
            .filter(|(i, _)| {
                let bracketed = segments.get(*i).is_some_and(|s| s.ends_with('['))
                    && segments.get(i + 1).is_some_and(|s| s.starts_with(']'));
                !bracketed
            })
            .map(|(_, (expression, range))| {
                Finding::new(format!("${{{expression}}}"), range.clone(), cx.index.span(&range))
            })
            .collect()
    }

    fn message(&self, finding: &Finding) -> String {
        format!(
            "Template expression {} cannot be validated. Prefer static class strings or an array of literals.",
            finding.token
        )
    }
}

//! Lint rules run over validated `tw(...)` arguments.
//!
//! Each rule turns one [`Argument`] into findings and knows how to phrase
//! its message. The [`Linter`](crate::Linter) decides which rules run and
//! at what severity.

mod color_literals;
mod invalid_classes;
mod template_expressions;

pub use color_literals::{is_color_literal, ColorLiterals};
pub use invalid_classes::InvalidClasses;
pub use template_expressions::TemplateExpressions;

use twlint_types::{Finding, LineIndex, RuleId};

use crate::validator::Argument;
use crate::vocabulary::Vocabulary;

/// What a rule can see while checking one argument.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub vocab: &'a Vocabulary,
    pub index: &'a LineIndex<'a>,
}

pub trait LintRule: Send + Sync {
    fn id(&self) -> RuleId;

    fn check(&self, argument: &Argument, cx: &RuleContext<'_>) -> Vec<Finding>;

    fn message(&self, finding: &Finding) -> String;
}

/// Every rule, with `exclude` passed to `no-invalid-classes`.
pub fn all<I, S>(exclude: I) -> Vec<Box<dyn LintRule>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vec![
        Box::new(InvalidClasses::new(exclude)),
        Box::new(TemplateExpressions),
        Box::new(ColorLiterals),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_rule_id_once() {
        let ids: Vec<RuleId> = all(Vec::<String>::new()).iter().map(|r| r.id()).collect();
        assert_eq!(ids, RuleId::ALL.to_vec());
    }
}

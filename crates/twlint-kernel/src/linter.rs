//! The linter: host scan, call-site gate and rules for one source file.

use std::sync::Arc;

use twlint_types::{Diagnostic, LineIndex};

use crate::config::LintConfig;
use crate::host::{self, pragma, Callee, ImportTracker};
use crate::rules::{self, LintRule, RuleContext};
use crate::vocabulary::Vocabulary;

/// Lints source text with one vocabulary and configuration.
///
/// Cheap to share: the vocabulary sits behind an [`Arc`] and linting takes
/// `&self`.
pub struct Linter {
    vocab: Arc<Vocabulary>,
    config: LintConfig,
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new(vocab: Arc<Vocabulary>, config: LintConfig) -> Self {
        let rules = rules::all(config.exclude_classes.iter().cloned());
        Self {
            vocab,
            config,
            rules,
        }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Diagnostics for `source`, ordered by position.
    pub fn lint(&self, source: &str) -> Vec<Diagnostic> {
        let scan = host::scan(source);
        let index = LineIndex::new(source);

        let mut tracker = ImportTracker::new(&self.config.module, &self.config.export);
        for decl in &scan.imports {
            tracker.record(decl);
        }

        let pragma_names = pragma::function_names(scan.comments.iter().map(String::as_str));
        if let Some(names) = &pragma_names {
            tracing::debug!("function names from pragma: {names:?}");
        }
        let function_names = pragma_names
            .as_deref()
            .unwrap_or(&self.config.function_names);

        let cx = RuleContext {
            vocab: &self.vocab,
            index: &index,
        };

        let mut diagnostics = Vec::new();
        for call in &scan.calls {
            if !self.is_validated(&call.callee, &tracker, function_names) {
                continue;
            }
            let Some(argument) = &call.argument else {
                tracing::debug!("`{}` at {}: no literal argument", call.callee.name(), call.start);
                continue;
            };

            for rule in &self.rules {
                let Some(severity) = self.config.rules.level(rule.id()).severity() else {
                    continue;
                };
                for finding in rule.check(argument, &cx) {
                    diagnostics.push(Diagnostic {
                        rule: rule.id(),
                        severity,
                        message: rule.message(&finding),
                        finding,
                    });
                }
            }
        }

        diagnostics.sort_by_key(|d| (d.finding.range.start, d.finding.range.end, d.rule));
        diagnostics
    }

    /// The call-site gate.
    ///
    /// Calls that resolve to the tracked import always pass. Otherwise, with
    /// import checking on nothing passes, and with it off a callee passes
    /// when its name is in `function_names`.
    fn is_validated(&self, callee: &Callee, tracker: &ImportTracker, function_names: &[String]) -> bool {
        if tracker.is_tracked(callee) {
            return true;
        }
        if self.config.check_imports {
            return false;
        }
        function_names.iter().any(|name| name == callee.name())
    }
}

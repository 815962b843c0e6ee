//! Lint fixture parser and runner.
//!
//! ```text
//! # test: invalid token in a string literal
//! # option: check-imports = false
//! ---
//! tw("flex nope")
//! ---
//! no-invalid-classes 1:10-1:14 nope
//! ===
//! ```
//!
//! `# option:` lines are optional and are joined into a `twlint.toml`
//! document. The expected section lists `<rule> <start>-<end> <token>` in
//! the order the linter reports them; an empty section expects nothing.

use std::sync::Arc;

use twlint_kernel::{Linter, LintConfig, Vocabulary};
use twlint_types::Diagnostic;

use crate::{TestResult, TestSummary};

#[derive(Debug, Clone)]
pub struct LintCase {
    pub name: String,
    /// Line of the `# test:` header (1-indexed).
    pub line_number: usize,
    pub options: Vec<String>,
    pub source: String,
    pub expected: Vec<String>,
}

/// Parse a fixture file into cases.
pub fn parse_lint_tests(content: &str) -> Vec<LintCase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut cases = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(name) = lines[i].trim().strip_prefix("# test:") else {
            i += 1;
            continue;
        };
        let name = name.trim().to_string();
        let line_number = i + 1;
        i += 1;

        let mut options = Vec::new();
        while i < lines.len() && lines[i].trim() != "---" {
            if let Some(option) = lines[i].trim().strip_prefix("# option:") {
                options.push(option.trim().to_string());
            }
            i += 1;
        }
        i += 1;

        let mut source = Vec::new();
        while i < lines.len() && lines[i].trim() != "---" {
            source.push(lines[i]);
            i += 1;
        }
        i += 1;

        let mut expected = Vec::new();
        while i < lines.len() && lines[i].trim() != "===" {
            let line = lines[i].trim();
            if !line.is_empty() {
                expected.push(line.to_string());
            }
            i += 1;
        }
        i += 1;

        cases.push(LintCase {
            name,
            line_number,
            options,
            source: source.join("\n"),
            expected,
        });
    }

    cases
}

/// The fixture form of a diagnostic: `<rule> <span> <token>`.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{} {} {}",
        diagnostic.rule, diagnostic.finding.span, diagnostic.finding.token
    )
}

impl LintCase {
    pub fn config(&self) -> Result<LintConfig, String> {
        LintConfig::from_toml_str(&self.options.join("\n")).map_err(|e| e.to_string())
    }

    pub fn run(&self, vocab: &Arc<Vocabulary>) -> TestResult {
        let config = match self.config() {
            Ok(config) => config,
            Err(message) => return TestResult::Error { message },
        };
        let actual: Vec<String> = Linter::new(Arc::clone(vocab), config)
            .lint(&self.source)
            .iter()
            .map(format_diagnostic)
            .collect();

        if actual == self.expected {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: self.expected.join("\n"),
                actual: actual.join("\n"),
            }
        }
    }
}

pub fn run_lint_tests(cases: &[LintCase], vocab: &Arc<Vocabulary>) -> TestSummary {
    let mut summary = TestSummary::new();
    for case in cases {
        summary.record(&case.name, case.line_number, case.run(vocab));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
# test: first
# option: check-imports = false
---
tw("flex nope")
---
no-invalid-classes 1:10-1:14 nope
===

# test: clean
---
import { tw } from "react-strict-dom-tailwind";

tw("flex")
---
===
"#;

    #[test]
    fn parses_cases() {
        let cases = parse_lint_tests(FIXTURE);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "first");
        assert_eq!(cases[0].line_number, 2);
        assert_eq!(cases[0].options, vec!["check-imports = false"]);
        assert_eq!(cases[0].source, "tw(\"flex nope\")");
        assert_eq!(cases[0].expected, vec!["no-invalid-classes 1:10-1:14 nope"]);
        assert!(cases[1].options.is_empty());
        assert_eq!(cases[1].source.lines().count(), 3);
        assert!(cases[1].expected.is_empty());
    }

    #[test]
    fn runs_cases() {
        let vocab = Arc::new(Vocabulary::builtin());
        let summary = run_lint_tests(&parse_lint_tests(FIXTURE), &vocab);
        assert!(summary.all_passed(), "{summary}");
        assert_eq!(summary.passed, 2);
    }

    #[test]
    fn bad_options_are_errors() {
        let cases = parse_lint_tests("# test: x\n# option: nope = 1\n---\n---\n===\n");
        let result = cases[0].run(&Arc::new(Vocabulary::builtin()));
        assert!(matches!(result, TestResult::Error { .. }));
    }
}

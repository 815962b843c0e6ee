//! Runs the lint fixtures under `tests/lint/` through the full linter.

use std::sync::Arc;

use twlint_kernel::Vocabulary;
use twlint_testutil::cases::{parse_lint_tests, run_lint_tests};

const CASES: &str = include_str!("../../../tests/lint/cases.test");

#[test]
fn run_lint_test_file() {
    let cases = parse_lint_tests(CASES);
    assert!(!cases.is_empty(), "no cases parsed");

    let summary = run_lint_tests(&cases, &Arc::new(Vocabulary::builtin()));
    println!("{summary}");
    assert!(summary.all_passed(), "{summary}");
    assert_eq!(summary.passed, cases.len());
}

//! Compilation of the crate's fixed regular expressions.

use regex::Regex;

/// Compile a pattern written as a literal in this crate.
///
/// Every caller passes a constant, so a failure here is a bug caught by the
/// first test that touches the pattern.
#[allow(clippy::expect_used)]
pub(crate) fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal regex pattern must compile")
}

//! twlint-types: pure data shared by every twlint crate.
//!
//! - [`Position`], [`SourceSpan`] and [`LineIndex`] for mapping byte offsets
//!   to line/column coordinates
//! - [`Finding`]: an invalid token and where it sits in the source
//! - [`Diagnostic`]: a finding tagged with the rule and severity that
//!   produced it
//!
//! Nothing here knows about class vocabularies or source languages.

mod diagnostic;
mod span;

pub use diagnostic::{Diagnostic, Finding, RuleId, Severity, UnknownRule};
pub use span::{LineIndex, Position, SourceSpan};

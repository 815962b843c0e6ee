//! twlint-kernel (核): the analysis core of twlint.
//!
//! This crate provides:
//!
//! - **Vocabulary**: the immutable set of static class names and dynamic
//!   prefixes, built in, loaded from JSON, or extracted from style sources
//! - **Tokenizer / Classifier**: whitespace tokens and their classification
//! - **Template reconstruction**: flattening `${...}` templates with an
//!   offset map back to the original source
//! - **Detector**: `prefix-[${expr}]` dynamic classes across expressions
//! - **Validator**: per-argument orchestration producing findings
//! - **Rules**: `no-invalid-classes`, `no-template-expressions`,
//!   `no-color-literals`
//! - **Host**: a logos-based scanner that finds `tw(...)` call sites
//! - **Linter**: ties host, configuration and rules together

pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod host;
pub mod linter;
mod pattern;
pub mod report;
pub mod rules;
pub mod template;
pub mod tokenizer;
pub mod validator;
pub mod vocabulary;

pub use classifier::{classify, Classification};
pub use config::{LintConfig, RuleLevel, RuleLevels};
pub use error::{ConfigError, VocabularyError};
pub use linter::Linter;
pub use validator::{Argument, StringArg, TemplateArg, Validator};
pub use vocabulary::Vocabulary;

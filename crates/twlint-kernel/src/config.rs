//! `twlint.toml` configuration.
//!
//! Every key is optional:
//!
//! ```toml
//! check-imports = true
//! function-names = ["tw"]
//! exclude-classes = []
//! module = "react-strict-dom-tailwind"
//! export = "tw"
//! vocabulary = "styles.json"
//!
//! [rules]
//! no-invalid-classes = "error"
//! no-template-expressions = "warn"
//! no-color-literals = "off"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use twlint_types::{RuleId, Severity};

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "twlint.toml";
pub const DEFAULT_MODULE: &str = "react-strict-dom-tailwind";
pub const DEFAULT_EXPORT: &str = "tw";

/// How a rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// `None` when the rule is off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// The `[rules]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuleLevels {
    pub no_invalid_classes: RuleLevel,
    pub no_template_expressions: RuleLevel,
    pub no_color_literals: RuleLevel,
}

impl Default for RuleLevels {
    fn default() -> Self {
        Self {
            no_invalid_classes: RuleLevel::Error,
            no_template_expressions: RuleLevel::Warn,
            no_color_literals: RuleLevel::Off,
        }
    }
}

impl RuleLevels {
    pub fn level(&self, rule: RuleId) -> RuleLevel {
        match rule {
            RuleId::NoInvalidClasses => self.no_invalid_classes,
            RuleId::NoTemplateExpressions => self.no_template_expressions,
            RuleId::NoColorLiterals => self.no_color_literals,
        }
    }

    pub fn set(&mut self, rule: RuleId, level: RuleLevel) {
        match rule {
            RuleId::NoInvalidClasses => self.no_invalid_classes = level,
            RuleId::NoTemplateExpressions => self.no_template_expressions = level,
            RuleId::NoColorLiterals => self.no_color_literals = level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    /// Only validate calls that resolve to an import of `export` from
    /// `module`.
    pub check_imports: bool,
    /// Callee names validated when `check_imports` is off. A source pragma
    /// replaces this list for its file.
    pub function_names: Vec<String>,
    /// Tokens `no-invalid-classes` never reports.
    pub exclude_classes: Vec<String>,
    pub module: String,
    pub export: String,
    /// JSON vocabulary file, relative to the config file.
    pub vocabulary: Option<PathBuf>,
    pub rules: RuleLevels,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            check_imports: true,
            function_names: vec![DEFAULT_EXPORT.to_string()],
            exclude_classes: Vec::new(),
            module: DEFAULT_MODULE.to_string(),
            export: DEFAULT_EXPORT.to_string(),
            vocabulary: None,
            rules: RuleLevels::default(),
        }
    }
}

impl LintConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file. A relative `vocabulary` path is resolved against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(vocabulary), Some(dir)) = (&config.vocabulary, path.parent()) {
            if vocabulary.is_relative() {
                config.vocabulary = Some(dir.join(vocabulary));
            }
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `twlint.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn with_check_imports(mut self, check_imports: bool) -> Self {
        self.check_imports = check_imports;
        self
    }

    pub fn with_function_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.function_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_rule(mut self, rule: RuleId, level: RuleLevel) -> Self {
        self.rules.set(rule, level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = LintConfig::from_toml_str("").unwrap();
        assert_eq!(config, LintConfig::default());
        assert!(config.check_imports);
        assert_eq!(config.function_names, vec!["tw"]);
        assert_eq!(config.rules.level(RuleId::NoColorLiterals), RuleLevel::Off);
        assert_eq!(config.rules.level(RuleId::NoTemplateExpressions), RuleLevel::Warn);
    }

    #[test]
    fn parses_all_keys() {
        let config = LintConfig::from_toml_str(
            r#"
check-imports = false
function-names = ["tw", "cx"]
exclude-classes = ["legacy-card"]
module = "@acme/styles"
export = "style"
vocabulary = "styles.json"

[rules]
no-color-literals = "warn"
no-template-expressions = "off"
"#,
        )
        .unwrap();
        assert!(!config.check_imports);
        assert_eq!(config.function_names, vec!["tw", "cx"]);
        assert_eq!(config.exclude_classes, vec!["legacy-card"]);
        assert_eq!(config.module, "@acme/styles");
        assert_eq!(config.export, "style");
        assert_eq!(config.vocabulary, Some(PathBuf::from("styles.json")));
        assert_eq!(config.rules.level(RuleId::NoColorLiterals), RuleLevel::Warn);
        assert_eq!(config.rules.level(RuleId::NoTemplateExpressions), RuleLevel::Off);
        assert_eq!(config.rules.level(RuleId::NoInvalidClasses), RuleLevel::Error);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LintConfig::from_toml_str("check-import = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert!(LintConfig::from_toml_str("[rules]\nno-invalid-classes = \"loud\"").is_err());
    }

    #[test]
    fn level_maps_to_severity() {
        assert_eq!(RuleLevel::Off.severity(), None);
        assert_eq!(RuleLevel::Warn.severity(), Some(Severity::Warning));
        assert_eq!(RuleLevel::Error.severity(), Some(Severity::Error));
    }

    #[test]
    fn discover_resolves_vocabulary_next_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "vocabulary = \"vocab.json\"\n").unwrap();
        let config = LintConfig::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config.vocabulary, Some(dir.path().join("vocab.json")));
    }

    #[test]
    fn discover_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(LintConfig::discover(dir.path()).unwrap(), None);
    }

    #[test]
    fn builders_override() {
        let config = LintConfig::default()
            .with_check_imports(false)
            .with_function_names(["cx"])
            .with_excluded_classes(["a", "b"])
            .with_rule(RuleId::NoColorLiterals, RuleLevel::Error);
        assert!(!config.check_imports);
        assert_eq!(config.function_names, vec!["cx"]);
        assert_eq!(config.exclude_classes, vec!["a", "b"]);
        assert_eq!(config.rules.level(RuleId::NoColorLiterals), RuleLevel::Error);
    }
}

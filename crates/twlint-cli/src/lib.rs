//! twlint command line.
//!
//! ```text
//! twlint check [PATHS]...        lint files or directories
//! twlint explain <CLASS>...      show how tokens classify
//! twlint vocab extract <DIR>     build a vocabulary JSON from style sources
//! twlint vocab dump              print the active vocabulary as JSON
//! ```

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use twlint_kernel::classifier::classify_traced;
use twlint_kernel::config::CONFIG_FILE;
use twlint_kernel::report;
use twlint_kernel::rules::is_color_literal;
use twlint_kernel::vocabulary::extract;
use twlint_kernel::{Classification, LintConfig, Linter, Vocabulary};
use twlint_types::Diagnostic;

/// File extensions `check` picks up when walking a directory.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

#[derive(Parser, Debug)]
#[command(
    name = "twlint",
    version,
    about = "Validate utility classes passed to tw() against a strict vocabulary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint source files. Directories are walked, honoring .gitignore.
    Check {
        /// Files or directories (default: current directory)
        paths: Vec<PathBuf>,
        #[arg(long, help = "Config file (default: nearest twlint.toml)")]
        config: Option<PathBuf>,
        #[arg(long, help = "Vocabulary JSON, overriding the config")]
        vocabulary: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        #[arg(long, help = "Validate callees by name instead of by import")]
        no_check_imports: bool,
        #[arg(long = "function-name", help = "Callee name to validate (repeatable)")]
        function_names: Vec<String>,
        #[arg(long = "exclude-class", help = "Class never reported as invalid (repeatable)")]
        exclude_classes: Vec<String>,
        #[arg(long)]
        no_color: bool,
    },
    /// Classify tokens against the vocabulary.
    Explain {
        #[arg(required = true)]
        classes: Vec<String>,
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    Vocab {
        #[command(subcommand)]
        command: VocabCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VocabCommands {
    /// Extract a vocabulary from a directory of `*.styles.ts` sources.
    Extract {
        dir: PathBuf,
        #[arg(short, long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Print the vocabulary in effect (the built-in one by default).
    Dump {
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Compact,
    Json,
}

/// Diagnostic totals for a `check` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
}

/// Run a parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<Outcome> {
    match cli.command {
        Commands::Check {
            paths,
            config,
            vocabulary,
            format,
            no_check_imports,
            function_names,
            exclude_classes,
            no_color,
        } => {
            let paths = if paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                paths
            };
            let mut config = resolve_config(config.as_deref(), &paths)?;
            if no_check_imports {
                config = config.with_check_imports(false);
            }
            if !function_names.is_empty() {
                config = config.with_function_names(function_names);
            }
            config = config.with_excluded_classes(exclude_classes);

            let vocab = resolve_vocabulary(vocabulary.as_deref().or(config.vocabulary.as_deref()))?;
            let linter = Linter::new(Arc::new(vocab), config);
            let color = !no_color && io::stdout().is_terminal();
            check(&linter, &paths, format, color, out)
        }
        Commands::Explain {
            classes,
            vocabulary,
        } => {
            let vocab = resolve_vocabulary(vocabulary.as_deref())?;
            for class in &classes {
                writeln!(out, "{}", explain(class, &vocab))?;
            }
            Ok(Outcome::default())
        }
        Commands::Vocab { command } => {
            match command {
                VocabCommands::Extract { dir, output } => {
                    let extraction = extract::extract_dir(&dir)?;
                    if extraction.used_fallback {
                        tracing::warn!("using the built-in vocabulary");
                    }
                    let json = serde_json::to_string_pretty(&extraction.vocabulary)?;
                    match output {
                        Some(path) => fs::write(&path, json + "\n")
                            .with_context(|| format!("writing {}", path.display()))?,
                        None => writeln!(out, "{json}")?,
                    }
                }
                VocabCommands::Dump { vocabulary } => {
                    let vocab = resolve_vocabulary(vocabulary.as_deref())?;
                    writeln!(out, "{}", serde_json::to_string_pretty(&vocab.to_file())?)?;
                }
            }
            Ok(Outcome::default())
        }
    }
}

fn check(
    linter: &Linter,
    paths: &[PathBuf],
    format: Format,
    color: bool,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let mut outcome = Outcome::default();
    let mut json_reports = Vec::new();
    let files = collect_sources(paths)?;

    for path in &files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let diagnostics = linter.lint(&source);
        outcome.files += 1;
        for diagnostic in &diagnostics {
            if diagnostic.is_error() {
                outcome.errors += 1;
            } else {
                outcome.warnings += 1;
            }
        }

        let name = path.display().to_string();
        match format {
            Format::Pretty => out.write_all(report::render(&name, &source, &diagnostics, color).as_bytes())?,
            Format::Compact => out.write_all(report::render_compact(&name, &diagnostics).as_bytes())?,
            Format::Json => {
                if !diagnostics.is_empty() {
                    json_reports.push(serde_json::to_value(FileReport {
                        path: name,
                        diagnostics: &diagnostics,
                    })?);
                }
            }
        }
    }

    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&json_reports)?)?,
        Format::Pretty => writeln!(
            out,
            "{} files checked: {} errors, {} warnings",
            outcome.files, outcome.errors, outcome.warnings
        )?,
        Format::Compact => {}
    }
    Ok(outcome)
}

/// Files named on the command line are always linted; directories are
/// walked for [`SOURCE_EXTENSIONS`].
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("no such file or directory: {}", path.display());
        }
        for entry in ignore::WalkBuilder::new(path).build() {
            let entry = entry?;
            if entry.file_type().is_some_and(|t| t.is_file()) && has_source_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    tracing::debug!("{} source files to check", files.len());
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// `--config` wins; otherwise the nearest `twlint.toml` above the first
/// path; otherwise defaults.
fn resolve_config(explicit: Option<&Path>, paths: &[PathBuf]) -> Result<LintConfig> {
    if let Some(path) = explicit {
        return Ok(LintConfig::load(path)?);
    }
    let start = match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
        None => PathBuf::from("."),
    };
    let start = fs::canonicalize(&start).unwrap_or(start);
    for dir in start.ancestors() {
        if let Some(config) = LintConfig::discover(dir)? {
            tracing::info!("using {}", dir.join(CONFIG_FILE).display());
            return Ok(config);
        }
    }
    Ok(LintConfig::default())
}

fn resolve_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => Ok(Vocabulary::load(path)?),
        None => Ok(Vocabulary::builtin()),
    }
}

/// One line describing how `class` classifies.
pub fn explain(class: &str, vocab: &Vocabulary) -> String {
    let (rule, classification) = classify_traced(class, vocab);
    let mut line = match (classification, rule) {
        (Classification::Dynamic { prefix, value }, Some(rule)) => {
            format!("{class}: dynamic via {rule} (prefix `{prefix}`, value `{value}`)")
        }
        (classification, Some(rule)) => format!("{class}: {} via {rule}", classification.label()),
        (classification, None) => format!("{class}: {}", classification.label()),
    };
    if let Classification::Dynamic { value, .. } = classification {
        if is_color_literal(value) {
            line.push_str(" [color literal]");
        }
    }
    line
}

//! Human-readable rendering of diagnostics with source snippets.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use twlint_types::{Diagnostic, Severity};

/// Render `diagnostics` for the file `path` as annotated snippets.
///
/// Rendering failures fall back to the one-line form of the diagnostic.
pub fn render(path: &str, source: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        match render_one(path, source, diagnostic, color) {
            Some(rendered) => out.push_str(&rendered),
            None => {
                out.push_str(&format!("{path}:{diagnostic}\n"));
            }
        }
    }
    out
}

fn render_one(path: &str, source: &str, diagnostic: &Diagnostic, color: bool) -> Option<String> {
    let (kind, label_color) = match diagnostic.severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
    };
    let range = diagnostic.finding.range.clone();

    let mut buf = Vec::new();
    Report::build(kind, (path, range.clone()))
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_code(diagnostic.rule.as_str())
        .with_message(&diagnostic.message)
        .with_label(
            Label::new((path, range))
                .with_message(format!("`{}`", diagnostic.finding.token))
                .with_color(label_color),
        )
        .finish()
        .write((path, Source::from(source)), &mut buf)
        .ok()?;

    String::from_utf8(buf).ok()
}

/// One line per diagnostic: `path:line:col: severity [rule] message`.
pub fn render_compact(path: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| {
            format!(
                "{path}:{}: {} [{}] {}\n",
                d.finding.span.start, d.severity, d.rule, d.message
            )
        })
        .collect()
}

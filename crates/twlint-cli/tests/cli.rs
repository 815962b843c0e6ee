//! End-to-end tests for the twlint command line.

use std::fs;
use std::path::Path;

use clap::Parser;
use twlint_cli::{explain, run, Cli, Outcome};
use twlint_kernel::Vocabulary;

const HEADER: &str = "import { tw } from \"react-strict-dom-tailwind\";\n";

fn run_args(args: &[&str]) -> (Outcome, String) {
    let cli = Cli::try_parse_from(std::iter::once("twlint").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    let outcome = run(cli, &mut out).expect("command should succeed");
    (outcome, String::from_utf8(out).expect("utf-8 output"))
}

/// The walker skips hidden entries, so keep the default `.tmp` prefix away.
fn tempdir() -> tempfile::TempDir {
    tempfile::Builder::new().prefix("twlint-").tempdir().unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn check_reports_invalid_classes_compactly() {
    let dir = tempdir();
    write(dir.path(), "app.tsx", &format!("{HEADER}tw(\"flex nope\");\n"));
    let file = dir.path().join("app.tsx");

    let (outcome, out) = run_args(&["check", file.to_str().unwrap(), "--format", "compact"]);
    assert_eq!(outcome.files, 1);
    assert_eq!(outcome.errors, 1);
    assert!(!outcome.is_clean());
    assert!(out.contains("app.tsx:2:10: error [no-invalid-classes]"), "{out}");
}

#[test]
fn check_walks_directories_for_sources() {
    let dir = tempdir();
    write(dir.path(), "src/a.ts", &format!("{HEADER}tw(\"flex\");\n"));
    write(dir.path(), "src/b.jsx", &format!("{HEADER}tw(`p-4 ${{x}}`);\n"));
    write(dir.path(), "src/notes.md", "tw(\"nope\")\n");

    let (outcome, out) = run_args(&["check", dir.path().to_str().unwrap(), "--no-color"]);
    assert_eq!(outcome.files, 2);
    assert_eq!(outcome.errors, 0);
    assert_eq!(outcome.warnings, 1);
    assert!(outcome.is_clean());
    assert!(out.contains("2 files checked: 0 errors, 1 warnings"), "{out}");
}

#[test]
fn check_json_lists_only_files_with_diagnostics() {
    let dir = tempdir();
    write(dir.path(), "ok.ts", &format!("{HEADER}tw(\"flex\");\n"));
    write(dir.path(), "bad.ts", &format!("{HEADER}tw(\"zap\");\n"));

    let (_, out) = run_args(&["check", dir.path().to_str().unwrap(), "--format", "json"]);
    let reports: serde_json::Value = serde_json::from_str(&out).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]["path"].as_str().unwrap().ends_with("bad.ts"));
    let diagnostic = &reports[0]["diagnostics"][0];
    assert_eq!(diagnostic["rule"], "no-invalid-classes");
    assert_eq!(diagnostic["finding"]["token"], "zap");
}

#[test]
fn discovered_config_applies() {
    let dir = tempdir();
    write(
        dir.path(),
        "twlint.toml",
        "check-imports = false\nfunction-names = [\"cx\"]\nexclude-classes = [\"legacy\"]\n",
    );
    write(dir.path(), "a.ts", "cx(\"legacy nope\");\n");

    let (outcome, out) = run_args(&["check", dir.path().to_str().unwrap(), "--format", "compact"]);
    assert_eq!(outcome.errors, 1, "{out}");
    assert!(out.contains("Invalid class \"nope\""), "{out}");
    assert!(!out.contains("\"legacy\""), "{out}");
}

#[test]
fn flags_override_config() {
    let dir = tempdir();
    write(dir.path(), "a.ts", "cx(\"nope\");\n");
    let path = dir.path().to_str().unwrap();

    let (outcome, _) = run_args(&["check", path]);
    assert_eq!(outcome.errors, 0);

    let (outcome, _) = run_args(&[
        "check",
        path,
        "--no-check-imports",
        "--function-name",
        "cx",
    ]);
    assert_eq!(outcome.errors, 1);

    let (outcome, _) = run_args(&[
        "check",
        path,
        "--no-check-imports",
        "--function-name",
        "cx",
        "--exclude-class",
        "nope",
    ]);
    assert_eq!(outcome.errors, 0);
}

#[test]
fn vocabulary_file_replaces_builtin() {
    let dir = tempdir();
    write(
        dir.path(),
        "vocab.json",
        r#"{"static_names": ["card"], "dynamic_prefixes": ["gap"]}"#,
    );
    write(dir.path(), "a.ts", &format!("{HEADER}tw(\"card gap-[3px] flex\");\n"));
    let vocab = dir.path().join("vocab.json");

    let (outcome, out) = run_args(&[
        "check",
        dir.path().join("a.ts").to_str().unwrap(),
        "--vocabulary",
        vocab.to_str().unwrap(),
        "--format",
        "compact",
    ]);
    assert_eq!(outcome.errors, 1, "{out}");
    assert!(out.contains("\"flex\""), "{out}");
}

#[test]
fn missing_path_is_an_error() {
    let cli = Cli::try_parse_from(["twlint", "check", "/definitely/not/here"]).unwrap();
    assert!(run(cli, &mut Vec::new()).is_err());
}

#[test]
fn explain_lines() {
    let vocab = Vocabulary::builtin();
    assert_eq!(explain("flex", &vocab), "flex: static via static-name");
    assert_eq!(
        explain("h-[50px]", &vocab),
        "h-[50px]: dynamic via arbitrary-value (prefix `h`, value `50px`)"
    );
    assert_eq!(
        explain("bg-[#fff]", &vocab),
        "bg-[#fff]: dynamic via arbitrary-value (prefix `bg`, value `#fff`) [color literal]"
    );
    assert_eq!(explain("zap", &vocab), "zap: invalid");
}

#[test]
fn explain_command_prints_one_line_per_class() {
    let (_, out) = run_args(&["explain", "flex", "zap"]);
    assert_eq!(out, "flex: static via static-name\nzap: invalid\n");
}

#[test]
fn vocab_extract_writes_json() {
    let dir = tempdir();
    write(
        dir.path(),
        "styles/tailwind.styles.ts",
        "export const tw = css.create({\n  'flex': { display: 'flex' },\n  \"p-4\": { padding: 16 },\n});\n",
    );
    write(
        dir.path(),
        "styles/dynamic.styles.ts",
        "export const dyn = css.create({\n  w: (value) => ({ width: value }),\n});\n",
    );
    let output = dir.path().join("vocab.json");

    run_args(&[
        "vocab",
        "extract",
        dir.path().join("styles").to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    let vocab = Vocabulary::load(&output).unwrap();
    assert!(vocab.is_static("flex"));
    assert!(vocab.is_static("p-4"));
    assert!(vocab.has_dynamic_prefix("w"));
}

#[test]
fn vocab_dump_round_trips_through_load() {
    let dir = tempdir();
    let (_, out) = run_args(&["vocab", "dump"]);
    write(dir.path(), "dump.json", &out);

    let loaded = Vocabulary::load(&dir.path().join("dump.json")).unwrap();
    let builtin = Vocabulary::builtin();
    assert_eq!(loaded.static_count(), builtin.static_count());
    assert_eq!(loaded.prefix_count(), builtin.prefix_count());
}

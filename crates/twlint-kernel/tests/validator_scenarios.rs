//! Validator behavior over complete arguments with the built-in vocabulary.

use rstest::rstest;
use twlint_kernel::rules::{LintRule, RuleContext, TemplateExpressions};
use twlint_kernel::{Argument, StringArg, TemplateArg, Validator, Vocabulary};
use twlint_types::{LineIndex, Position};

/// `tw("<text>")` source with the argument's quote at offset 3.
fn literal_source(text: &str) -> (String, Argument) {
    let source = format!("tw(\"{text}\")");
    (source, Argument::Literal(StringArg::new(text, 3)))
}

fn template_source(segments: &[&str], expressions: &[&str]) -> (String, Argument) {
    let mut body = String::from(segments[0]);
    for (expression, segment) in expressions.iter().zip(&segments[1..]) {
        body.push_str(&format!("${{{expression}}}{segment}"));
    }
    let template = TemplateArg::new(
        3,
        segments.iter().map(|s| s.to_string()).collect(),
        expressions.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap();
    (format!("tw(`{body}`)"), Argument::Template(template))
}

fn invalid_tokens(source: &str, argument: &Argument) -> Vec<String> {
    let vocab = Vocabulary::builtin();
    Validator::new(&vocab)
        .validate(argument, &LineIndex::new(source))
        .into_iter()
        .map(|f| f.token)
        .collect()
}

#[rstest]
#[case::all_static("flex p-4 bg-red-500", &[])]
#[case::one_invalid("flex invalid-class bg-red-500", &["invalid-class"])]
#[case::arbitrary_value("h-[50px]", &[])]
#[case::empty_arbitrary_value("h-[]", &["h-[]"])]
#[case::unknown_prefix("invalid-[50px]", &["invalid-[50px]"])]
#[case::bare_value("h-50px", &["h-50px"])]
#[case::empty("", &[])]
#[case::whitespace_only("  \t ", &[])]
fn string_literals(#[case] text: &str, #[case] expected: &[&str]) {
    let (source, argument) = literal_source(text);
    assert_eq!(invalid_tokens(&source, &argument), expected);
}

#[test]
fn finding_spans_point_into_the_source() {
    let (source, argument) = literal_source("flex invalid-class");
    let vocab = Vocabulary::builtin();
    let findings = Validator::new(&vocab).validate(&argument, &LineIndex::new(&source));

    assert_eq!(findings.len(), 1);
    assert_eq!(&source[findings[0].range.clone()], "invalid-class");
    assert_eq!(findings[0].span.start, Position::new(1, 10));
    assert_eq!(findings[0].span.end, Position::new(1, 23));
}

#[test]
fn expression_as_arbitrary_value_is_valid() {
    let (source, argument) = template_source(&["border-color-[", "]"], &["color"]);
    assert!(invalid_tokens(&source, &argument).is_empty());
}

#[test]
fn bare_interpolation_is_left_to_the_expression_rule() {
    let (source, argument) = template_source(&["flex ", ""], &["dynamicClass"]);
    assert!(invalid_tokens(&source, &argument).is_empty());

    let vocab = Vocabulary::builtin();
    let index = LineIndex::new(&source);
    let cx = RuleContext {
        vocab: &vocab,
        index: &index,
    };
    let findings = TemplateExpressions.check(&argument, &cx);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].token, "${dynamicClass}");
    assert_eq!(&source[findings[0].range.clone()], "${dynamicClass}");
}

#[test]
fn unknown_prefix_before_an_expression() {
    let (source, argument) = template_source(&["foo-[", "] p-4 nope"], &["x"]);
    let vocab = Vocabulary::builtin();
    let findings = Validator::new(&vocab).validate(&argument, &LineIndex::new(&source));

    let tokens: Vec<&str> = findings.iter().map(|f| f.token.as_str()).collect();
    assert_eq!(tokens, vec!["foo-[...]", "nope"]);
    assert_eq!(&source[findings[0].range.clone()], "foo");
    assert_eq!(&source[findings[1].range.clone()], "nope");
}

#[test]
fn array_elements_are_validated_independently() {
    let source = r#"tw(["flex", "nope p-4", "zap"])"#;
    let argument = Argument::Array(vec![
        StringArg::new("flex", 4),
        StringArg::new("nope p-4", 12),
        StringArg::new("zap", 24),
    ]);
    let vocab = Vocabulary::builtin();
    let findings = Validator::new(&vocab).validate(&argument, &LineIndex::new(source));

    let located: Vec<&str> = findings.iter().map(|f| &source[f.range.clone()]).collect();
    assert_eq!(located, vec!["nope", "zap"]);
}

#[test]
fn alternate_vocabularies_do_not_interfere() {
    let (source, argument) = literal_source("card flex");
    let custom = Vocabulary::new(["card"], ["gap"]);

    assert_eq!(
        Validator::new(&custom)
            .validate(&argument, &LineIndex::new(&source))
            .into_iter()
            .map(|f| f.token)
            .collect::<Vec<_>>(),
        vec!["flex"]
    );
    assert_eq!(invalid_tokens(&source, &argument), vec!["card"]);
}

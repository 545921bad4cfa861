//! Tests for `GraphQLParseError` formatting.

use crate::tests::utils::parse_error;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

#[test]
fn format_oneline_uses_one_based_positions() {
    let error = parse_error("{a Int}");
    assert_eq!(
        error.format_oneline(),
        "<input>:1:4: error: expected `:`, found `Int`",
    );
    assert_eq!(error.to_string(), error.format_oneline());
}

#[test]
fn format_detailed_renders_snippet_and_help() {
    let source = "{a Int}";
    let error = parse_error(source);
    let detailed = error.format_detailed(Some(source));

    assert!(detailed.starts_with("error: expected `:`, found `Int`\n  --> <input>:1:4\n"));
    assert!(detailed.contains(" 1 | {a Int}\n"));
    assert!(detailed.contains("|    ^^^\n"));
    assert!(detailed.contains("   = help: "));
}

#[test]
fn format_detailed_without_source_omits_snippet() {
    let error = parse_error("{a Int}");
    let detailed = error.format_detailed(None);
    assert!(!detailed.contains('|'));
    assert!(detailed.contains("--> <input>:1:4"));
}

#[test]
fn format_detailed_renders_note_locations() {
    let source = "{a:\n  [Int}";
    let error = parse_error(source);
    let detailed = error.format_detailed(Some(source));

    assert!(detailed.contains("--> <input>:2:7"));
    assert!(detailed.contains("= note: list type opened with `[` here"));
    assert!(detailed.contains("2 |   [Int}"));
}

#[test]
fn reports_line_and_column_in_multiline_text() {
    let source = "{\n  a: Int\n  b Int\n}";
    let error = parse_error(source);
    let start = &error.span().start_inclusive;
    assert_eq!(start.line(), 2);
    assert_eq!(start.col_utf8(), 4);
}

#[test]
fn zero_width_span_yields_empty_offending_text() {
    let error = GraphQLParseError::new(
        "unexpected end of input",
        GraphQLSourceSpan::empty_at(SourcePosition::new(0, 3, 3, 3)),
        GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
    );
    assert_eq!(error.offending_text("{a:"), Some(""));
}

#[test]
fn kind_display_is_terse() {
    let kind = GraphQLParseErrorKind::MissingSeparator { found: "b".to_string() };
    assert_eq!(kind.to_string(), "missing separator before `b`");
}

#[cfg(target_pointer_width = "64")]
#[test]
fn byte_span_saturates_and_try_byte_span_rejects_large_offsets() {
    let far = SourcePosition::new(0, 0, 0, u32::MAX as usize + 1);
    let span = GraphQLSourceSpan::new(SourcePosition::start_of_input(), far);

    assert_eq!(span.byte_span(), crate::ByteSpan::new(0, u32::MAX));
    assert_eq!(span.try_byte_span(), None);

    let near = GraphQLSourceSpan::empty_at(SourcePosition::new(0, 7, 7, 7));
    assert_eq!(near.try_byte_span(), Some(crate::ByteSpan::new(7, 7)));
}

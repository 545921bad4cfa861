//! Tests for type expression parsing: nullability and list nesting.

use crate::ast;
use crate::tests::utils::parse_error_kind;
use crate::tests::utils::parse_object;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;

fn field_type(source: &str) -> ast::TypeAnnotation<'_> {
    parse_object(source).fields.remove(0).field_type
}

#[test]
fn nullable_named_type() {
    let ty = field_type("{a:Int}");
    let ast::TypeAnnotation::Named(named) = ty else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.as_str(), "Int");
    assert!(named.nullability.is_nullable());
}

#[test]
fn non_null_named_type_records_bang_span() {
    let ty = field_type("{a:Int!}");
    let ast::TypeAnnotation::Named(named) = ty else {
        panic!("expected a named type");
    };
    assert!(matches!(
        named.nullability,
        ast::Nullability::NonNull { bang_span } if bang_span.start == 6 && bang_span.end == 7,
    ));
    assert_eq!(named.span.start, 3);
    assert_eq!(named.span.end, 7);
}

#[test]
fn nullable_list_of_nullable() {
    let ty = field_type("{a:[Int]}");
    let ast::TypeAnnotation::List(list) = &ty else {
        panic!("expected a list type");
    };
    assert!(list.nullability.is_nullable());
    assert!(list.element_type.nullability().is_nullable());
}

#[test]
fn non_null_list_of_non_null() {
    let ty = field_type("{a:[Int!]!}");
    let ast::TypeAnnotation::List(list) = &ty else {
        panic!("expected a list type");
    };
    assert!(!list.nullability.is_nullable());
    assert!(!list.element_type.nullability().is_nullable());
    assert_eq!(list.span.start, 3);
    assert_eq!(list.span.end, 10);
}

#[test]
fn nested_lists() {
    let ty = field_type("{matrix:[[Float!]!]}");
    assert_eq!(ty.list_depth(), 2);
    assert!(ty.nullability().is_nullable());
    assert_eq!(ty.innermost_named().name.as_str(), "Float");
    assert!(!ty.innermost_named().nullability.is_nullable());
}

#[test]
fn double_bang_is_rejected() {
    assert!(matches!(
        parse_error_kind("{a:Int!!}"),
        GraphQLParseErrorKind::UnexpectedToken { ref found, .. } if found == "!",
    ));
}

#[test]
fn empty_list_type_is_rejected() {
    assert!(matches!(
        parse_error_kind("{a:[]}"),
        GraphQLParseErrorKind::UnexpectedToken { ref found, .. } if found == "]",
    ));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let depth = GraphQLParser::<crate::token_source::StrGraphQLTokenSource>::MAX_RECURSION_DEPTH - 1;
    let source = format!("{{a:{}Int{}}}", "[".repeat(depth), "]".repeat(depth));
    let ty = field_type(&source);
    assert_eq!(ty.list_depth(), depth);
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    let depth = GraphQLParser::<crate::token_source::StrGraphQLTokenSource>::MAX_RECURSION_DEPTH + 10;
    let source = format!("{{a:{}Int{}}}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(parse_error_kind(&source), GraphQLParseErrorKind::InvalidSyntax);
}

#[test]
fn deeply_unclosed_lists_do_not_overflow() {
    let source = format!("{{a:{}", "[".repeat(10_000));
    assert_eq!(parse_error_kind(&source), GraphQLParseErrorKind::InvalidSyntax);
}

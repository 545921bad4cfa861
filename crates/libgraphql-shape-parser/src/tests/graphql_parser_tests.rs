//! Tests for object and enum block parsing.

use crate::ast;
use crate::ast::AstNode;
use crate::tests::utils::parse_enum;
use crate::tests::utils::parse_object;
use crate::GraphQLParser;

// =============================================================================
// Object blocks
// =============================================================================

#[test]
fn parses_single_field() {
    let block = parse_object("{id:ID!}");

    assert_eq!(block.fields.len(), 1);
    let field = &block.fields[0];
    assert_eq!(field.name.as_str(), "id");
    assert!(!field.is_parameterized());
    assert_eq!(field.field_type.innermost_named().name.as_str(), "ID");
    assert!(!field.field_type.nullability().is_nullable());
}

#[test]
fn parses_fields_in_source_order() {
    let block = parse_object("{id:ID! name:String friends:[Character] appearsIn:[Episode]}");

    let names: Vec<&str> = block.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "friends", "appearsIn"]);
}

#[test]
fn parses_empty_object_block() {
    let block = parse_object("{}");
    assert!(block.fields.is_empty());
    assert_eq!(block.span().start, 0);
    assert_eq!(block.span().end, 2);
}

#[test]
fn keeps_duplicate_fields() {
    let block = parse_object("{a:Int a:String}");
    assert_eq!(block.fields.len(), 2);
    assert_eq!(
        block.fields[1].field_type.innermost_named().name.as_str(),
        "String",
    );
}

#[test]
fn parses_field_with_parameters() {
    let block = parse_object("{roll(numRolls:Int!,sides:Int):[Int]}");

    let field = &block.fields[0];
    assert_eq!(field.name.as_str(), "roll");
    assert!(field.is_parameterized());

    let params: Vec<(&str, &str)> = field
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.value_type.innermost_named().name.as_str()))
        .collect();
    assert_eq!(params, vec![("numRolls", "Int"), ("sides", "Int")]);
    assert!(!field.parameters[0].value_type.nullability().is_nullable());
    assert!(field.parameters[1].value_type.nullability().is_nullable());
    assert_eq!(field.field_type.list_depth(), 1);
}

#[test]
fn parses_parameter_with_list_type() {
    let block = parse_object("{search(terms:[String!]!):[Result]}");
    let param = &block.fields[0].parameters[0];
    assert_eq!(param.value_type.list_depth(), 1);
    assert!(!param.value_type.nullability().is_nullable());
}

#[test]
fn accepts_semicolon_separators() {
    let block = parse_object("{a:Int;b:String}");
    assert_eq!(block.fields.len(), 2);
}

#[test]
fn accepts_raw_multiline_text() {
    let source = "{\n  id: ID!\n  roll(numRolls: Int!, sides: Int): [Int]\n}\n";
    let block = parse_object(source);
    assert_eq!(block.fields.len(), 2);
    assert_eq!(block.fields[1].parameters.len(), 2);
}

#[test]
fn field_named_enum_is_not_a_keyword_inside_objects() {
    let block = parse_object("{enum:Int}");
    assert_eq!(block.fields[0].name.as_str(), "enum");
}

#[test]
fn field_span_covers_whole_declaration() {
    let source = "{roll(n:Int):[Int]! id:ID}";
    let block = parse_object(source);

    let mut text = String::new();
    block.fields[0].append_source(&mut text, source);
    assert_eq!(text, "roll(n:Int):[Int]!");

    let param_span = block.fields[0].parameters[0].span();
    assert_eq!(param_span.source_slice(source), Some("n:Int"));
}

#[test]
fn names_borrow_from_source() {
    let block = parse_object("{alpha:Beta}");
    assert!(matches!(
        block.fields[0].name.value,
        std::borrow::Cow::Borrowed("alpha"),
    ));
}

// =============================================================================
// Enum blocks
// =============================================================================

#[test]
fn parses_enum_values_in_order() {
    let block = parse_enum("enum{NEWHOPE EMPIRE JEDI}");
    let values: Vec<&str> = block.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(values, vec!["NEWHOPE", "EMPIRE", "JEDI"]);
}

#[test]
fn parses_enum_with_space_before_brace() {
    let block = parse_enum("enum {A B}");
    assert_eq!(block.values.len(), 2);
}

#[test]
fn parses_empty_enum_block() {
    let block = parse_enum("enum{}");
    assert!(block.values.is_empty());
}

#[test]
fn enum_span_starts_at_keyword() {
    let source = "enum{A}";
    let block = parse_enum(source);
    assert_eq!(block.span().source_slice(source), Some(source));
}

// =============================================================================
// Custom token sources
// =============================================================================

#[test]
fn parses_from_mock_token_source() {
    use crate::tests::utils;
    use crate::token::GraphQLTokenKind;

    let tokens = vec![
        utils::mock_token(GraphQLTokenKind::CurlyBraceOpen),
        utils::mock_name_token("a"),
        utils::mock_token(GraphQLTokenKind::Colon),
        utils::mock_name_token("Int"),
        utils::mock_token(GraphQLTokenKind::CurlyBraceClose),
        utils::mock_eof_token(),
    ];

    let block = GraphQLParser::from_token_source(utils::MockTokenSource::new(tokens))
        .parse_schema_block()
        .unwrap();
    let ast::SchemaBlock::Object(object) = block else {
        panic!("expected an object block");
    };
    assert_eq!(object.fields[0].name.as_str(), "a");
}

#[test]
fn token_source_without_eof_is_accepted() {
    use crate::tests::utils;
    use crate::token::GraphQLTokenKind;

    let tokens = vec![
        utils::mock_name_token("enum"),
        utils::mock_token(GraphQLTokenKind::CurlyBraceOpen),
        utils::mock_token(GraphQLTokenKind::CurlyBraceClose),
    ];
    let block = GraphQLParser::from_token_source(utils::MockTokenSource::new(tokens))
        .parse_schema_block()
        .unwrap();
    assert!(block.as_enum().is_some());
}

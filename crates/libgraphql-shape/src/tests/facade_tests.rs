use crate::parser::ast;
use crate::parser::GraphQLParser;
use crate::parse_schema;
use crate::EmptyTypeEnvironment;
use crate::TypeRegistry;
use crate::TypesMap;

#[test]
fn core_and_parser_apis_are_reachable() {
    let normalized = crate::normalize("{ a : Int }");
    assert_eq!(normalized, "{a:Int}");
    assert!(crate::parser::is_normalized(&normalized));

    let block = GraphQLParser::new(&normalized).parse_schema_block().unwrap();
    assert!(matches!(block, ast::SchemaBlock::Object(_)));

    let model = parse_schema(&normalized, &EmptyTypeEnvironment).unwrap();
    assert_eq!(model.as_object().map(|object| object.len()), Some(1));
}

#[test]
fn star_wars_shapes() {
    let mut registry = TypeRegistry::new();
    registry.declare("Episode").unwrap();
    registry
        .parse_and_define(
            "Character",
            "{
                id: ID!
                name: String!
                friends: [Character]
                appearsIn: [Episode]!
            }",
        )
        .unwrap();
    registry
        .parse_and_define("Episode", "enum { NEWHOPE EMPIRE JEDI }")
        .unwrap();

    let character = registry.get("Character").and_then(|m| m.as_object()).unwrap();
    let appears_in = character.field("appearsIn").unwrap();
    assert!(appears_in.is_list());
    assert!(!appears_in.nullable());

    let episode = appears_in
        .type_annotation()
        .innermost_named_type_annotation()
        .handle()
        .unwrap()
        .deref(&registry)
        .unwrap();
    assert!(episode.as_enum().unwrap().contains("EMPIRE"));
}

#[test]
fn parse_errors_render_diagnostics() {
    let env: TypesMap<()> = TypesMap::new();
    let error = parse_schema("{a Int}", &env).unwrap_err();
    assert_eq!(error.to_string(), "<input>:1:4: error: expected `:`, found `Int`");
    assert!(error.format_detailed(Some("{a Int}")).contains("^^^"));
}

#[test]
fn parse_errors_render_against_multiline_text() {
    let env: TypesMap<()> = TypesMap::new();
    let raw = "{\n  id: ID!\n  roll(n: Int!,): [Int]\n}";
    let error = parse_schema(raw, &env).unwrap_err();
    assert_eq!(error.offending_text(raw), Some(")"));

    let detailed = error.format_detailed(Some(raw));
    assert!(detailed.contains("  --> <input>:3:16\n"), "{detailed}");
    assert!(detailed.contains(" 3 |   roll(n: Int!,): [Int]\n"), "{detailed}");
}

use crate::tests::utils::expect_field;
use crate::tests::utils::expect_object;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::types::TypeResolution;
use crate::parse_schema;
use crate::EmptyTypeEnvironment;
use crate::ScalarType;
use std::collections::HashMap;

fn int(nullable: bool) -> TypeAnnotation<()> {
    NamedTypeAnnotation::new("Int", nullable, TypeResolution::Scalar(ScalarType::Int)).into()
}

#[test]
fn display_renders_schema_syntax() {
    assert_eq!(int(true).to_string(), "Int");
    assert_eq!(int(false).to_string(), "Int!");

    let list: TypeAnnotation<()> = ListTypeAnnotation::new(int(false), false).into();
    assert_eq!(list.to_string(), "[Int!]!");

    let nested: TypeAnnotation<()> =
        ListTypeAnnotation::new(ListTypeAnnotation::new(int(true), false).into(), true).into();
    assert_eq!(nested.to_string(), "[[Int]!]");
}

#[test]
fn display_matches_parsed_source() {
    let object = expect_object(
        parse_schema("{a:[[Character!]]! b:ID}", &EmptyTypeEnvironment).unwrap(),
    );
    assert_eq!(expect_field(&object, "a").type_annotation().to_string(), "[[Character!]]!");
    assert_eq!(expect_field(&object, "b").type_annotation().to_string(), "ID");
}

#[test]
fn innermost_named_type_annotation_unwraps_lists() {
    let nested: TypeAnnotation<()> =
        ListTypeAnnotation::new(ListTypeAnnotation::new(int(false), true).into(), true).into();
    let leaf = nested.innermost_named_type_annotation();
    assert_eq!(leaf.type_name(), "Int");
    assert!(!leaf.nullable());
    assert_eq!(leaf.scalar(), Some(ScalarType::Int));
}

#[test]
fn equivalence_checks_structure_and_nullability() {
    let list_of_int: TypeAnnotation<()> = ListTypeAnnotation::new(int(true), true).into();

    assert!(int(true).is_equivalent_to(&int(true)));
    assert!(!int(true).is_equivalent_to(&int(false)));
    assert!(!int(true).is_equivalent_to(&list_of_int));
    assert!(list_of_int.is_equivalent_to(&list_of_int.clone()));

    let list_of_non_null: TypeAnnotation<()> = ListTypeAnnotation::new(int(false), true).into();
    assert!(!list_of_int.is_equivalent_to(&list_of_non_null));
}

#[test]
fn equivalence_ignores_resolution() {
    let env = HashMap::from([("Character".to_string(), 7u8)]);
    let resolved = expect_object(parse_schema("{a:[Character]}", &env).unwrap());
    let unresolved = expect_object(parse_schema("{a:[Character]}", &EmptyTypeEnvironment).unwrap());

    let resolved_type = expect_field(&resolved, "a").type_annotation();
    let unresolved_type = expect_field(&unresolved, "a").type_annotation();
    assert!(resolved_type.is_equivalent_to(unresolved_type));
    assert!(resolved_type.innermost_named_type_annotation().is_resolved());
    assert!(!unresolved_type.innermost_named_type_annotation().is_resolved());
}

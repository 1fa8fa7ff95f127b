use crate::Schema;
use crate::SchemaBuilder;
use crate::types::TypeAnnotation;

fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn non_null_list_of_non_null_named_type() {
    let schema = build_schema(concat!(
        "type Query { people: [Person!]! }\n",
        "type Person { id: ID! }\n",
    ));
    let annot = schema.field("Query", "people").unwrap().type_annotation();

    assert!(annot.is_list());
    assert!(!annot.nullable());
    assert_eq!(annot.to_string(), "[Person!]!");
    assert_eq!(annot.innermost_type_ref().name(), "Person");

    let TypeAnnotation::List { inner, .. } = annot else {
        panic!("expected a list annotation, found {annot:?}");
    };
    assert!(!inner.nullable());
    assert!(!inner.is_list());
}

#[test]
fn nested_nullable_lists() {
    let schema = build_schema("type Query { grid: [[Int]] }");
    let field = schema.field("Query", "grid").unwrap();

    assert_eq!(field.type_annotation().to_string(), "[[Int]]");
    assert!(field.type_annotation().nullable());
    assert_eq!(field.base_type_name(), "Int");
    assert_eq!(field.base_type(&schema).unwrap().name(), "Int");
    assert!(field.base_type(&schema).unwrap().is_leaf());
}

#[test]
fn named_type_resolves_to_composite_base_type() {
    let schema = build_schema(concat!(
        "type Query { me: Person! }\n",
        "type Person { name: String }\n",
    ));
    let field = schema.field("Query", "me").unwrap();

    assert_eq!(field.type_annotation().to_string(), "Person!");
    let base_type = field.base_type(&schema).unwrap();
    assert_eq!(base_type.as_composite().unwrap().name(), "Person");
    assert!(!base_type.is_leaf());
}

#[test]
fn base_type_missing_from_another_schema() {
    let schema1 = build_schema(concat!(
        "type Query { me: Person }\n",
        "type Person { name: String }\n",
    ));
    let schema2 = build_schema("type Query { id: ID }");
    let field = schema1.field("Query", "me").unwrap();

    assert!(field.base_type(&schema2).is_err());
    assert!(field.parent_type(&schema2).is_some());
    assert!(schema2.field("Query", "me").is_none());
}

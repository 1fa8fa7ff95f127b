use crate::loc;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::NamedTypeRef;
use crate::Schema;
use crate::Transition;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));
    }

    #[test]
    fn builtin_scalars_are_predefined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { ok: Boolean }")?
            .build()?;

        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            let type_ = schema.type_(name).unwrap();
            assert!(type_.is_leaf());
            assert_eq!(type_.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        }
        assert_eq!(schema.types().len(), 6);

        Ok(())
    }

    #[test]
    fn conventional_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
                "type Subscription { c: Int }\n",
            ))?
            .build()?;

        let root_types = schema.root_types()
            .into_iter()
            .map(|(operation, type_)| (operation, type_.name()))
            .collect::<Vec<_>>();
        assert_eq!(root_types, vec![
            (OperationKind::Query, "Query"),
            (OperationKind::Mutation, "Mutation"),
            (OperationKind::Subscription, "Subscription"),
        ]);

        Ok(())
    }

    #[test]
    fn schema_block_names_root_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery mutation: RootMutation }\n",
                "type RootQuery { a: Int }\n",
                "type RootMutation { b: Int }\n",
                "type Query { unused: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert_eq!(schema.mutation_type().unwrap().name(), "RootMutation");
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn definitions_record_their_source_file() -> Result<()> {
        let path = PathBuf::from("products.graphql");
        let schema = SchemaBuilder::new()
            .load_str(Some(path.to_owned()), "type Query {\n  me: ID\n}")?
            .build()?;

        let field = schema.field("Query", "me").unwrap();
        assert_eq!(field.def_location(), &loc::SourceLocation::Schema(loc::FilePosition {
            col: 3,
            file: Some(path),
            line: 2,
        }));

        Ok(())
    }

    #[test]
    fn directive_definitions_are_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @key(fields: String!) on OBJECT\n",
                "type Query { me: User }\n",
                "type User @key(fields: \"id\") { id: ID! }\n",
            ))?
            .build()?;

        assert!(schema.composite_type("User").is_some());

        Ok(())
    }

    #[test]
    fn opaque_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { color: Color, at: DateTime, find(filter: Filter): Int }\n",
                "enum Color { RED GREEN }\n",
                "scalar DateTime\n",
                "input Filter { name: String }\n",
            ))?
            .build()?;

        assert!(schema.type_("Color").unwrap().is_leaf());
        assert!(schema.type_("DateTime").unwrap().is_leaf());
        assert!(!schema.type_("Filter").unwrap().is_leaf());
        assert!(schema.composite_type("Filter").is_none());

        Ok(())
    }
}

mod files {
    use super::*;

    #[test]
    fn load_file() -> Result<()> {
        let dir = std::env::temp_dir().join(format!(
            "query-graphs-schema-builder-{}",
            std::process::id(),
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let query_path = dir.join("query.graphql");
        let user_path = dir.join("user.graphql");
        std::fs::write(&query_path, "type Query { me: User }").unwrap();
        std::fs::write(&user_path, "type User { id: ID! }").unwrap();

        let schema = SchemaBuilder::from_files(&[&query_path, &user_path])?.build()?;

        let user = schema.composite_type("User").unwrap();
        let loc::SourceLocation::Schema(pos) = user.def_location() else {
            panic!("expected a schema location, found {:?}", user.def_location());
        };
        assert_eq!(pos.file.as_ref(), Some(&user_path));

        std::fs::remove_dir_all(&dir).unwrap();
        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let path = std::env::temp_dir().join("query-graphs-does-not-exist.graphql");

        let result = SchemaBuilder::new().load_file(&path);

        assert!(matches!(
            result,
            Err(SchemaBuildError::FileReadError { file_path, .. }) if file_path == path,
        ));
    }

    #[test]
    fn parse_error_names_the_file() {
        let result = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("broken.graphql")), "type Query {");

        let Err(err) = result else {
            panic!("expected a parse error");
        };
        assert!(matches!(
            &err,
            SchemaBuildError::ParseError { file: Some(file), .. }
                if file == &PathBuf::from("broken.graphql"),
        ));
        assert!(err.to_string().contains("`broken.graphql`"));
    }
}

mod definition_errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")
            .and_then(|builder| builder.load_str(None, "type Query { b: Int }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_a_builtin_scalar() {
        let result = SchemaBuilder::new().load_str(None, "scalar String");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { def1: loc::SourceLocation::GraphQLBuiltIn, .. }),
        ));
    }

    #[test]
    fn duplicate_field_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldDefinition { type_name, field_name, .. })
                if type_name == "Query" && field_name == "a",
        ));
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let result = SchemaBuilder::new()
            .load_str(None, "type __Query { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. })
                if type_name == "__Query",
        ));
    }

    #[test]
    fn duplicate_schema_block_root() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }")
            .and_then(|builder| builder.load_str(None, "schema { query: B }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }

    #[test]
    fn root_type_must_be_an_object() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root }\n",
                "interface Root { a: Int }\n",
            ))?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidRootOperationType {
                operation: OperationKind::Query,
                type_name,
            }) if type_name == "Root",
        ));

        Ok(())
    }
}

mod validation_errors {
    use super::*;

    fn validation_errors(sdl: &str) -> Vec<TypeValidationError> {
        let result = SchemaBuilder::new()
            .load_str(None, sdl)
            .unwrap()
            .build();

        match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("expected type validation errors, found {other:?}"),
        }
    }

    #[test]
    fn undefined_field_type() {
        let errors = validation_errors("type Query { me: User }");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "User",
        ));
    }

    #[test]
    fn input_object_field_type() {
        let errors = validation_errors(concat!(
            "type Query { filter: Filter }\n",
            "input Filter { name: String }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidFieldOutputType { parent_type_name, field_name, type_name, .. }
                if parent_type_name == "Query" && field_name == "filter" && type_name == "Filter",
        ));
    }

    #[test]
    fn implements_non_interface() {
        let errors = validation_errors(concat!(
            "type Query implements Thing { a: Int }\n",
            "type Thing { a: Int }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::InvalidImplementedInterfaceType { type_name, interface_name, .. }
                if type_name == "Query" && interface_name == "Thing",
        ));
    }

    #[test]
    fn union_member_must_be_an_object() {
        let errors = validation_errors(concat!(
            "type Query { a: Any }\n",
            "union Any = Query | Node | Missing\n",
            "interface Node { id: ID }\n",
        ));

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidUnionMemberTypeKind { member_type_name, union_type_name, .. }
                if member_type_name == "Node" && union_type_name == "Any",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "Missing",
        )));
    }

    #[test]
    fn duplicate_union_member() {
        let errors = validation_errors(concat!(
            "type Query { a: Any }\n",
            "type A { id: ID }\n",
            "union Any = A | A\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::DuplicateUnionMember { member_type_name, union_type_name, .. }
                if member_type_name == "A" && union_type_name == "Any",
        ));
    }

    #[test]
    fn union_extension_repeating_a_member() {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Any }\n",
                "type A { id: ID }\n",
                "union Any = A\n",
            ))
            .and_then(|builder| builder.load_str(None, "extend union Any = A"))
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors })
                if matches!(
                    errors.as_slice(),
                    [TypeValidationError::DuplicateUnionMember { member_type_name, .. }]
                        if member_type_name == "A",
                ),
        ));
    }

    #[test]
    fn duplicate_implemented_interface() {
        let errors = validation_errors(concat!(
            "type Query implements Node & Node { id: ID }\n",
            "interface Node { id: ID }\n",
        ));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeValidationError::DuplicateImplementedInterface { type_name, interface_name, .. }
                if type_name == "Query" && interface_name == "Node",
        ));
    }

    #[test]
    fn extension_repeating_an_implemented_interface() {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query implements Node { id: ID }\n",
                "interface Node { id: ID }\n",
            ))
            .and_then(|builder| builder.load_str(None, "extend type Query implements Node"))
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors })
                if matches!(
                    errors.as_slice(),
                    [TypeValidationError::DuplicateImplementedInterface { interface_name, .. }]
                        if interface_name == "Node",
                ),
        ));
    }

    #[test]
    fn errors_are_reported_together() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: A b: B }")
            .unwrap()
            .build();

        let Err(err) = result else {
            panic!("expected validation errors");
        };
        let message = err.to_string();
        assert!(message.contains("2 error(s)"));
        assert!(message.contains("`A`"));
        assert!(message.contains("`B`"));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { me: User }\n",
                "interface Node { id: ID! }\n",
                "type User { name: String }\n",
            ))?
            .load_str(None, "extend type User implements Node { id: ID! }")?
            .build()?;

        let user = schema.composite_type("User").unwrap();
        assert_eq!(
            user.fields().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["__typename", "name", "id"],
        );
        assert!(user.as_object().unwrap().implements_interface("Node"));
        assert!(schema.is_possible_runtime_type(
            schema.composite_type("Node").unwrap(),
            user,
        ));

        Ok(())
    }

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend union Result = Post")?
            .load_str(None, concat!(
                "type Query { search: Result }\n",
                "type User { id: ID }\n",
                "type Post { id: ID }\n",
                "union Result = User\n",
            ))?
            .build()?;

        assert_eq!(
            schema.composite_type("Result").unwrap().as_union().unwrap().member_type_names(),
            vec!["User", "Post"],
        );

        Ok(())
    }

    #[test]
    fn interface_extension() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { node: Node }\n",
                "interface Node { id: ID! }\n",
                "extend interface Node { createdAt: String }\n",
            ))?
            .build()?;

        assert!(schema.field("Node", "createdAt").is_some());

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Missing { b: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend interface Query { b: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionTypeKind { type_name, extension_kind: "interface", .. })
                if type_name == "Query",
        ));

        Ok(())
    }

    #[test]
    fn opaque_type_extensions_are_checked() -> Result<()> {
        let ok = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { color: Color }\n",
                "enum Color { RED }\n",
                "extend enum Color { BLUE }\n",
            ))?
            .build();
        assert!(ok.is_ok());

        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend scalar Query @foo")?
            .build();
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionTypeKind { extension_kind: "scalar", .. }),
        ));

        Ok(())
    }

    #[test]
    fn extension_redefining_a_field() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Query { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldDefinition { field_name, .. })
                if field_name == "a",
        ));

        Ok(())
    }
}

mod serialization {
    use super::*;

    #[test]
    fn schema_survives_bincode_serialization() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { search: [Result!]! }\n",
                "type User { id: ID! }\n",
                "type Post { id: ID! }\n",
                "union Result = User | Post\n",
            ))?
            .build()?;

        let bytes = bincode::serde::encode_to_vec(
            &schema,
            bincode::config::standard(),
        ).unwrap();
        let (decoded, _): (Schema, usize) = bincode::serde::decode_from_slice(
            &bytes,
            bincode::config::standard(),
        ).unwrap();

        assert_eq!(decoded, schema);

        // Transitions over the decoded schema render identically, but the
        // schema elements they borrow are different ones.
        let original = Transition::down_cast(
            schema.composite_type("Result").unwrap(),
            schema.composite_type("Post").unwrap(),
        );
        let copy = Transition::down_cast(
            decoded.composite_type("Result").unwrap(),
            decoded.composite_type("Post").unwrap(),
        );
        assert_eq!(original.to_string(), copy.to_string());
        assert_ne!(original, copy);

        Ok(())
    }

    fn decode(schema: &Schema) -> std::result::Result<Schema, bincode::error::DecodeError> {
        let bytes = bincode::serde::encode_to_vec(
            schema,
            bincode::config::standard(),
        ).unwrap();
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .map(|(decoded, _)| decoded)
    }

    #[test]
    fn decoding_rejects_dangling_root_type() -> Result<()> {
        let mut schema = SchemaBuilder::new()
            .load_str(None, "schema { query: Root } type Root { a: Int }")?
            .build()?;
        schema.query_type = NamedTypeRef::new(
            "Roox",
            loc::SourceLocation::GraphQLBuiltIn,
        );

        let err = decode(&schema).unwrap_err();

        assert!(err.to_string().contains("Roox"), "unexpected error: {err}");
        Ok(())
    }

    #[test]
    fn decoding_rejects_non_object_root_type() -> Result<()> {
        let mut schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } type Mutation { b: Int }")?
            .build()?;
        schema.mutation_type = Some(NamedTypeRef::new(
            "Int",
            loc::SourceLocation::GraphQLBuiltIn,
        ));

        assert!(decode(&schema).is_err());
        Ok(())
    }

    #[test]
    fn decoding_rejects_dangling_field_type() -> Result<()> {
        let mut schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .build()?;
        schema.types.shift_remove("Int");

        let err = decode(&schema).unwrap_err();

        assert!(err.to_string().contains("`Int`"), "unexpected error: {err}");
        Ok(())
    }
}

use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeValidationError;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use crate::OperationKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod root_operation_types {
    use super::*;

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { a: Int }\n",
                "type Query { b: Int }\n",
                "type Subscription { c: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().map(|t| t.name()), Some("Query"));
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(schema.subscription_type().map(|t| t.name()), Some("Subscription"));

        Ok(())
    }

    #[test]
    fn schema_block_overrides_default_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery }\n",
                "type Query { unused: Int }\n",
                "type RootQuery { used: Int }",
            ))?
            .build()?;

        let query_type = schema.root_operation_type(OperationKind::Query)
            .expect("no query root");
        assert_eq!(query_type.name(), "RootQuery");
        assert!(schema.mutation_type().is_none());

        Ok(())
    }

    #[test]
    fn missing_query_root_is_allowed() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Mutation { a: Int }")?
            .build()?;

        assert!(schema.query_type().is_none());
        assert!(schema.mutation_type().is_some());

        Ok(())
    }

    #[test]
    fn default_root_name_of_non_object_type_is_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "scalar Query")?
            .build()?;

        assert!(schema.query_type().is_none());

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_roots() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Query }\n",
                "type Query { a: Int }",
            ))?
            .load_str(None, "schema { query: Query }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn non_object_root_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Q }\n",
                "enum Q { A }",
            ))?
            .build();

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected a validation error, got {result:?}");
        };
        assert_eq!(errors, vec![TypeValidationError::NonObjectRootOperationType {
            actual_kind: GraphQLTypeKind::Enum,
            operation: "query".to_string(),
            root_type_name: "Q".to_string(),
        }]);

        Ok(())
    }

    #[test]
    fn undefined_root_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Nope }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors })
                if matches!(
                    &errors[..],
                    [TypeValidationError::UndefinedRootOperationType { .. }],
                ),
        ));

        Ok(())
    }
}

mod type_definitions {
    use super::*;

    #[test]
    fn types_keep_definition_order_after_builtins() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Zed }\n",
                "enum Zed { ONE }\n",
                "scalar Date\n",
                "interface Node { id: ID! }\n",
                "union Thing = Query\n",
                "input Filter { q: String }",
            ))?
            .build()?;

        let names = schema.all_types().keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec![
            "Boolean", "Float", "ID", "Int", "String",
            "Query", "Zed", "Date", "Node", "Thing", "Filter",
        ]);

        assert_eq!(schema.get_type("Node").map(GraphQLType::kind), Some(GraphQLTypeKind::Interface));
        assert_eq!(schema.get_type("Thing").map(GraphQLType::kind), Some(GraphQLTypeKind::Union));
        assert_eq!(schema.get_type("Filter").map(GraphQLType::kind), Some(GraphQLTypeKind::InputObject));

        Ok(())
    }

    #[test]
    fn object_fields_record_types_docs_and_deprecation() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("schema.graphql")), concat!(
                "\"The root\"\n",
                "type Query {\n",
                "  \"Look up users\"\n",
                "  users: [User!]!\n",
                "  old: Int @deprecated\n",
                "}\n",
                "type User { id: ID! }",
            ))?
            .build()?;

        let query_type = schema.query_type().expect("no query root");
        assert_eq!(query_type.description(), Some("The root"));

        let field_names = query_type.fields().keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(field_names, vec!["__typename", "users", "old"]);

        let users = query_type.field("users").expect("no users field");
        assert_eq!(users.description(), Some("Look up users"));
        assert_eq!(users.type_annotation(), &TypeAnnotation::non_null(
            TypeAnnotation::list(TypeAnnotation::non_null(TypeAnnotation::named("User"))),
        ));

        let old = query_type.field("old").expect("no old field");
        assert_eq!(old.def_location(), &loc::SchemaDefLocation::Schema(loc::FilePosition {
            col: 3,
            file: Some(PathBuf::from("schema.graphql")),
            line: 5,
        }));
        assert_eq!(old.deprecation().reason(), Some(DEFAULT_DEPRECATION_REASON));

        Ok(())
    }

    #[test]
    fn typename_meta_field_is_implicit() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let typename = schema.query_type()
            .and_then(|t| t.field("__typename"))
            .expect("no __typename field");
        assert_eq!(typename.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
        assert_eq!(typename.type_annotation().to_string(), "String!");

        Ok(())
    }

    #[test]
    fn directive_definitions_are_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @cached(ttl: Int) on FIELD_DEFINITION\n",
                "type Query { a: Int @cached(ttl: 10) }",
            ))?
            .build()?;

        assert_eq!(schema.all_types().len(), 6);

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\ntype Query { b: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn duplicate_field_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a",
        ));
    }

    #[test]
    fn dunder_prefixed_field_name() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { __secret: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { field_name, .. })
                if field_name == "__secret",
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
    fn duplicate_enum_value() {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Color { RED RED }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. })
                if value_name == "RED",
        ));
    }

    #[test]
    fn parse_error_names_file() {
        let result = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("broken.graphql")), "type Query {");

        let Err(err @ SchemaBuildError::ParseError { .. }) = result else {
            panic!("expected a parse error");
        };
        assert!(err.to_string().contains("`broken.graphql`"));
    }

    #[test]
    fn undefined_field_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Missing }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors })
                if matches!(
                    &errors[..],
                    [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
                        if undefined_type_name == "Missing",
                ),
        ));

        Ok(())
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .load_str(None, "extend type Query { b: String }")?
            .build()?;

        let field_names = schema.query_type()
            .expect("no query root")
            .fields()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        assert_eq!(field_names, vec!["__typename", "a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend enum Color { BLUE }")?
            .load_str(None, "enum Color { RED }\ntype Query { c: Color }")?
            .build()?;

        let color = schema.get_type("Color")
            .and_then(GraphQLType::as_enum)
            .expect("no Color enum");
        let value_names = color.values().map(|v| v.name()).collect::<Vec<_>>();
        assert_eq!(value_names, vec!["RED", "BLUE"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "extend type Nope { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Nope",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Query { A }\nextend type Query { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                schema_type_kind: GraphQLTypeKind::Enum,
                ..
            }),
        ));

        Ok(())
    }
}

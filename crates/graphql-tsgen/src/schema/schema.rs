use crate::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::introspection;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a fully built and immutable GraphQL schema: the type graph that
/// operation documents are resolved against.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns all types defined within this [`Schema`].
    ///
    /// [^note] The five built-in scalars come first, followed by the types
    /// defined in the schema in the order they were loaded.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Builds a [`Schema`] from a serialized introspection result, either the
    /// bare `{"__schema": ...}` object or a full `{"data": {"__schema": ...}}`
    /// response.
    pub fn from_introspection_json(json: &str) -> Result<Self, SchemaBuildError> {
        introspection::build_from_json(None, json)
    }

    pub fn from_introspection_file(
        file_path: impl AsRef<Path>,
    ) -> Result<Self, SchemaBuildError> {
        introspection::build_from_file(file_path.as_ref())
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Loads a schema file, choosing the loader by file extension: `.graphql`
    /// and `.graphqls` files are read as SDL, `.json` files as a serialized
    /// introspection result.
    pub fn load_file(file_path: impl AsRef<Path>) -> Result<Self, SchemaBuildError> {
        let file_path = file_path.as_ref();
        match file_path.extension().and_then(|ext| ext.to_str()) {
            Some("graphql" | "graphqls") =>
                SchemaBuilder::new().load_file(file_path)?.build(),
            Some("json") =>
                Self::from_introspection_file(file_path),
            _ => Err(SchemaBuildError::UnsupportedSchemaExtension {
                file: file_path.to_path_buf(),
            }),
        }
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    /// Returns this [`Schema`]'s Query root operation type (if one was
    /// defined).
    ///
    /// [^note] It is ***strongly*** recommended that you use this in favor of
    /// looking for an [`ObjectType`] whose name is `"Query"`. GraphQL
    /// [defines `Query` as the _default_ name
    /// ](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { ... }` block may pick a differently-named type.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
    }

    /// Returns the root object type operations of the given kind select from.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        let type_name = match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.types.get(type_name)?.as_object()
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }
}

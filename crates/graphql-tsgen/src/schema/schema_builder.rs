use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::OpaqueType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more GraphQL SDL documents.
///
/// ```
/// # use graphql_tsgen::schema::SchemaBuilder;
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
/// assert!(schema.query_type().is_some());
/// # Ok::<(), graphql_tsgen::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        // Extensions are applied only once every definition has been loaded
        // so that an extension may precede the type it extends.
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        assemble_schema(
            self.types_map_builder,
            RootTypeNames {
                mutation: self.mutation_type.map(|t| t.type_name),
                query: self.query_type.map(|t| t.type_name),
                subscription: self.subscription_type.map(|t| t.type_name),
            },
        )
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Enum(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(e) => (e.name.as_str(), e.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(e) => (e.name.as_str(), e.position, GraphQLTypeKind::Union),
        };
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();

        let Some(existing_type) = self.types_map_builder.get_type_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_type_loc: extension_loc,
            });
        };

        if existing_type.kind() != expected_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                extension_loc,
                schema_type_kind: existing_type.kind(),
                type_name: type_name.to_string(),
            });
        }

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(enum_ext)) =>
                add_enum_values(enum_type, file_path, &enum_ext.values),

            (GraphQLType::Object(obj_type), TypeExtension::Object(obj_ext)) =>
                add_object_fields(obj_type, file_path, &obj_ext.fields),

            // Extensions of the remaining kinds only add directives or
            // members that don't affect generated shapes.
            _ => Ok(()),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Ignoring definition of the `@{}` directive.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, enum_def.position).into();
                if enum_def.values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoValues {
                        type_name: enum_def.name,
                        location: def_location,
                    });
                }

                let mut enum_type = EnumType {
                    def_location: def_location.clone(),
                    description: enum_def.description,
                    name: enum_def.name.to_owned(),
                    values: IndexMap::new(),
                };
                add_enum_values(&mut enum_type, file_path, &enum_def.values)?;
                self.types_map_builder.add_new_type(
                    enum_def.name.as_str(),
                    &def_location,
                    GraphQLType::Enum(enum_type),
                )
            },

            TypeDefinition::InputObject(input_def) => self.add_opaque_type(
                file_path,
                input_def.position,
                input_def.name,
                input_def.description,
                GraphQLType::InputObject,
            ),

            TypeDefinition::Interface(iface_def) => self.add_opaque_type(
                file_path,
                iface_def.position,
                iface_def.name,
                iface_def.description,
                GraphQLType::Interface,
            ),

            TypeDefinition::Object(obj_def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, obj_def.position).into();
                let mut obj_type = ObjectType::new(
                    obj_def.name.as_str(),
                    obj_def.description,
                    def_location.clone(),
                );
                add_object_fields(&mut obj_type, file_path, &obj_def.fields)?;
                self.types_map_builder.add_new_type(
                    obj_def.name.as_str(),
                    &def_location,
                    GraphQLType::Object(obj_type),
                )
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, scalar_def.position).into();
                self.types_map_builder.add_new_type(
                    scalar_def.name.as_str(),
                    &def_location,
                    GraphQLType::Scalar(ScalarType {
                        def_location: def_location.clone(),
                        description: scalar_def.description,
                        name: scalar_def.name.to_owned(),
                    }),
                )
            },

            TypeDefinition::Union(union_def) => self.add_opaque_type(
                file_path,
                union_def.position,
                union_def.name,
                union_def.description,
                GraphQLType::Union,
            ),
        }
    }

    fn add_opaque_type(
        &mut self,
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
        name: String,
        description: Option<String>,
        wrap: fn(OpaqueType) -> GraphQLType,
    ) -> Result<()> {
        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();
        self.types_map_builder.add_new_type(
            name.as_str(),
            &def_location,
            wrap(OpaqueType {
                def_location: def_location.clone(),
                description,
                name: name.to_owned(),
            }),
        )
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_values(
    enum_type: &mut EnumType,
    file_path: Option<&Path>,
    ast_values: &[ast::schema::EnumValue],
) -> Result<()> {
    for ast_value in ast_values {
        let value_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, ast_value.position).into();

        if let Some(existing_value) = enum_type.values.get(ast_value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_type.name.to_owned(),
                value_name: ast_value.name.to_owned(),
                value_def1: existing_value.def_location.clone(),
                value_def2: value_loc,
            });
        }

        enum_type.values.insert(ast_value.name.to_owned(), EnumValue {
            def_location: value_loc,
            deprecation: DeprecationState::from_ast_directives(&ast_value.directives),
            description: ast_value.description.to_owned(),
            name: ast_value.name.to_owned(),
        });
    }
    Ok(())
}

fn add_object_fields(
    obj_type: &mut ObjectType,
    file_path: Option<&Path>,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        let field_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, ast_field.position).into();

        if ast_field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field_loc,
                field_name: ast_field.name.to_owned(),
                type_name: obj_type.name.to_owned(),
            });
        }

        if let Some(existing_field) = obj_type.fields.get(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: obj_type.name.to_owned(),
                field_name: ast_field.name.to_owned(),
                field_def1: existing_field.def_location.clone(),
                field_def2: field_loc,
            });
        }

        obj_type.fields.insert(ast_field.name.to_owned(), Field {
            def_location: field_loc,
            deprecation: DeprecationState::from_ast_directives(&ast_field.directives),
            description: ast_field.description.to_owned(),
            name: ast_field.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        });
    }
    Ok(())
}

/// Root operation type names as declared by a schema (if at all).
#[derive(Debug, Default)]
pub(crate) struct RootTypeNames {
    pub mutation: Option<String>,
    pub query: Option<String>,
    pub subscription: Option<String>,
}

/// Validates a fully populated types map and resolves the root operation
/// types, falling back to the default `Query`/`Mutation`/`Subscription` object
/// types when no root was declared explicitly.
pub(crate) fn assemble_schema(
    types_map_builder: TypesMapBuilder,
    root_names: RootTypeNames,
) -> Result<Schema> {
    let types = types_map_builder.into_types_map()?;
    let mut errors = vec![];

    let mut resolve_root = |operation: OperationKind, declared: Option<String>| {
        match declared {
            Some(type_name) => match types.get(type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Some(type_name),
                Some(other_type) => {
                    errors.push(TypeValidationError::NonObjectRootOperationType {
                        actual_kind: other_type.kind(),
                        operation: operation.as_str().to_string(),
                        root_type_name: type_name,
                    });
                    None
                },
                None => {
                    errors.push(TypeValidationError::UndefinedRootOperationType {
                        operation: operation.as_str().to_string(),
                        root_type_name: type_name,
                    });
                    None
                },
            },

            None => {
                let default_name = operation.default_root_type_name();
                match types.get(default_name) {
                    Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                    _ => None,
                }
            },
        }
    };

    let query_type = resolve_root(OperationKind::Query, root_names.query);
    let mutation_type = resolve_root(OperationKind::Mutation, root_names.mutation);
    let subscription_type = resolve_root(OperationKind::Subscription, root_names.subscription);

    if !errors.is_empty() {
        return Err(SchemaBuildError::TypeValidationErrors { errors });
    }

    Ok(Schema {
        mutation_type,
        query_type,
        subscription_type,
        types,
    })
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{value_name}` value is defined more than once on the \
        `{enum_name}` enum type"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{field_name}` field is defined more than once on the \
        `{type_name}` object type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("Multiple {operation} root operation types were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` enum type must define one or more values")]
    EnumWithNoValues {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Error decoding introspection JSON{}: {err}",
        file.as_ref()
            .map(|f| format!(" in `{}`", f.display()))
            .unwrap_or_default(),
    )]
    IntrospectionDecodeError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type with an extension of a \
        different kind (the type is a {schema_type_kind} type)"
    )]
    InvalidExtensionType {
        extension_loc: loc::SchemaDefLocation,
        schema_type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Error parsing schema{}: {err}",
        file.as_ref()
            .map(|f| format!(" file `{}`", f.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "Unsupported schema file extension for `{}` (expected `.graphql`, \
        `.graphqls`, or `.json`)",
        file.display(),
    )]
    UnsupportedSchemaExtension {
        file: PathBuf,
    },
}

/// Represents the file location of a root operation type declaration in a
/// `schema { ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}

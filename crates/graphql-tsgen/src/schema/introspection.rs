//! Builds a [`Schema`] from the JSON result of a GraphQL [introspection
//! query](https://spec.graphql.org/October2021/#sec-Schema-Introspection).

use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::schema_builder::RootTypeNames;
use crate::schema::schema_builder::assemble_schema;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::OpaqueType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum IntrospectionDocument {
    Response {
        data: IntrospectionData,
    },
    Bare(IntrospectionData),
}

#[derive(Debug, serde::Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    mutation_type: Option<IntrospectionNamedRef>,
    query_type: Option<IntrospectionNamedRef>,
    subscription_type: Option<IntrospectionNamedRef>,
    types: Vec<IntrospectionType>,
}

#[derive(Debug, serde::Deserialize)]
struct IntrospectionNamedRef {
    name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum IntrospectionTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionType {
    description: Option<String>,
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    fields: Option<Vec<IntrospectionField>>,
    kind: IntrospectionTypeKind,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    deprecation_reason: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    name: String,
    #[serde(rename = "type")]
    type_ref: IntrospectionTypeRef,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    deprecation_reason: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionTypeRef {
    kind: IntrospectionTypeKind,
    name: Option<String>,
    of_type: Option<Box<IntrospectionTypeRef>>,
}

pub(super) fn build_from_file(file_path: &Path) -> Result<Schema> {
    let content = file_reader::read_content(file_path)
        .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
    build_from_json(Some(file_path.to_path_buf()), content.as_str())
}

pub(super) fn build_from_json(file: Option<PathBuf>, json: &str) -> Result<Schema> {
    let decode_err = |err: String| SchemaBuildError::IntrospectionDecodeError {
        file: file.to_owned(),
        err,
    };

    let document: IntrospectionDocument =
        serde_json::from_str(json).map_err(|err| decode_err(err.to_string()))?;
    let introspected = match document {
        IntrospectionDocument::Response { data } => data.schema,
        IntrospectionDocument::Bare(data) => data.schema,
    };

    let mut types_map_builder = TypesMapBuilder::new();
    for introspected_type in introspected.types {
        // Introspection results list the `__Schema`/`__Type`/... meta types
        // and the built-in scalars alongside the schema's own types.
        if introspected_type.name.starts_with("__")
            || types_map_builder.get_type_mut(introspected_type.name.as_str())
                .is_some_and(|existing| existing.def_location() == &loc::SchemaDefLocation::GraphQLBuiltIn) {
            continue;
        }

        let type_name = introspected_type.name.to_owned();
        let type_ = convert_type(introspected_type).map_err(&decode_err)?;
        types_map_builder.add_new_type(
            type_name.as_str(),
            &loc::SchemaDefLocation::Introspection,
            type_,
        )?;
    }

    assemble_schema(types_map_builder, RootTypeNames {
        mutation: introspected.mutation_type.map(|t| t.name),
        query: introspected.query_type.map(|t| t.name),
        subscription: introspected.subscription_type.map(|t| t.name),
    })
}

fn convert_type(
    introspected: IntrospectionType,
) -> std::result::Result<GraphQLType, String> {
    let def_location = loc::SchemaDefLocation::Introspection;
    let opaque = |introspected: IntrospectionType| OpaqueType {
        def_location: loc::SchemaDefLocation::Introspection,
        description: introspected.description,
        name: introspected.name,
    };

    Ok(match introspected.kind {
        IntrospectionTypeKind::Enum => {
            let values = introspected.enum_values.unwrap_or_default();
            if values.is_empty() {
                return Err(format!(
                    "enum type `{}` has no `enumValues`",
                    introspected.name,
                ));
            }
            GraphQLType::Enum(EnumType {
                def_location,
                description: introspected.description,
                name: introspected.name,
                values: values.into_iter()
                    .map(|value| (value.name.to_owned(), EnumValue {
                        def_location: loc::SchemaDefLocation::Introspection,
                        deprecation: deprecation_state(
                            value.is_deprecated,
                            value.deprecation_reason,
                        ),
                        description: value.description,
                        name: value.name,
                    }))
                    .collect(),
            })
        },

        IntrospectionTypeKind::Object => {
            let mut obj_type = ObjectType::new(
                introspected.name.as_str(),
                introspected.description,
                def_location,
            );
            for field in introspected.fields.unwrap_or_default() {
                let type_annotation = convert_type_ref(&field.type_ref)?;
                obj_type.fields.insert(field.name.to_owned(), Field {
                    def_location: loc::SchemaDefLocation::Introspection,
                    deprecation: deprecation_state(
                        field.is_deprecated,
                        field.deprecation_reason,
                    ),
                    description: field.description,
                    name: field.name,
                    type_annotation,
                });
            }
            GraphQLType::Object(obj_type)
        },

        IntrospectionTypeKind::Scalar => GraphQLType::Scalar(ScalarType {
            def_location,
            description: introspected.description,
            name: introspected.name,
        }),

        IntrospectionTypeKind::InputObject => GraphQLType::InputObject(opaque(introspected)),
        IntrospectionTypeKind::Interface => GraphQLType::Interface(opaque(introspected)),
        IntrospectionTypeKind::Union => GraphQLType::Union(opaque(introspected)),

        IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull => return Err(format!(
            "`{}` is listed as a named type but has kind {:?}",
            introspected.name,
            introspected.kind,
        )),
    })
}

fn convert_type_ref(
    type_ref: &IntrospectionTypeRef,
) -> std::result::Result<TypeAnnotation, String> {
    let of_type = || type_ref.of_type.as_deref().ok_or_else(|| format!(
        "{:?} type reference is missing `ofType`",
        type_ref.kind,
    ));

    match type_ref.kind {
        IntrospectionTypeKind::List =>
            Ok(TypeAnnotation::list(convert_type_ref(of_type()?)?)),
        IntrospectionTypeKind::NonNull =>
            Ok(TypeAnnotation::non_null(convert_type_ref(of_type()?)?)),
        _ => type_ref.name.as_deref()
            .map(TypeAnnotation::named)
            .ok_or_else(|| format!(
                "{:?} type reference is missing `name`",
                type_ref.kind,
            )),
    }
}

fn deprecation_state(is_deprecated: bool, reason: Option<String>) -> DeprecationState {
    if is_deprecated {
        DeprecationState::Deprecated { reason }
    } else {
        DeprecationState::NotDeprecated
    }
}

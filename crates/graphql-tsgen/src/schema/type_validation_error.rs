use crate::loc;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{root_type_name}` type is declared as the {operation} root type, \
        but it is a {actual_kind} type rather than an object type"
    )]
    NonObjectRootOperationType {
        actual_kind: GraphQLTypeKind,
        operation: String,
        root_type_name: String,
    },

    #[error(
        "The `{parent_type_name}.{field_name}` field is declared with type \
        `{type_annotation}`, but `{undefined_type_name}` is not defined in the \
        schema"
    )]
    UndefinedTypeName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        parent_type_name: String,
        type_annotation: TypeAnnotation,
        undefined_type_name: String,
    },

    #[error(
        "The schema declares `{root_type_name}` as its {operation} root type, \
        but no such type is defined"
    )]
    UndefinedRootOperationType {
        operation: String,
        root_type_name: String,
    },
}

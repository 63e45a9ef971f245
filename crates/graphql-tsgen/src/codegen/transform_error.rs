use crate::loc;
use crate::OperationKind;
use thiserror::Error;

/// Errors that abort a [`transform_document`](super::transform_document) call.
/// No declarations are returned when any of these occur.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransformError {
    #[error(
        "Selection of `{field_name}` at {position} resolves to the object \
        type `{field_type_name}`, so it must have a nested selection set \
        (needed to generate `{synthetic_name}`)"
    )]
    MissingNestedSelection {
        field_name: String,
        field_type_name: String,
        position: loc::SourcePosition,
        synthetic_name: String,
    },

    #[error(
        "The schema defines no root type for {operation_kind} operations{}",
        operation_name.as_ref()
            .map(|name| format!(" (needed by `{name}`)"))
            .unwrap_or_default(),
    )]
    MissingRootType {
        operation_kind: OperationKind,
        operation_name: Option<String>,
        position: loc::SourcePosition,
    },

    #[error(
        "Selection of `{field_name}` at {position} does not match any field \
        defined on the `{type_name}` type"
    )]
    UndefinedField {
        field_name: String,
        position: loc::SourcePosition,
        type_name: String,
    },

    #[error("Unknown operation kind `{0}`")]
    UnknownOperationKind(String),

    #[error("The {operation_kind} operation at {position} must be named")]
    UnnamedOperation {
        operation_kind: OperationKind,
        position: loc::SourcePosition,
    },

    #[error(
        "Cannot copy the operation document into a plain literal: the value \
        at `{path}` {reason}"
    )]
    UnserializableAstValue {
        path: String,
        reason: String,
    },
}

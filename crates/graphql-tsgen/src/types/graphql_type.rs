use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::OpaqueType;
use crate::types::ScalarType;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(OpaqueType),
    Interface(OpaqueType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(OpaqueType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) | Self::Interface(t) | Self::Union(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) | Self::Interface(t) | Self::Union(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) | Self::Interface(t) | Self::Union(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
        }
    }
}

mod deprecation_state;
mod enum_type;
mod graphql_type;
mod graphql_type_kind;
mod object_type;
mod opaque_type;
mod scalar_type;
mod type_annotation;
mod types_map_builder;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use object_type::Field;
pub use object_type::ObjectType;
pub use opaque_type::OpaqueType;
pub use scalar_type::BUILTIN_SCALAR_NAMES;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;

use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;

/// The resolved nullability, list-ness, and category of one field's type.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor<'schema> {
    pub category: ShapeCategory<'schema>,
    pub field_nullable: bool,
    pub is_list: bool,
    /// Only meaningful when `is_list` is set.
    pub list_element_nullable: bool,
}

/// The schema type a field resolves to, grouped by how it is shaped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeCategory<'schema> {
    Enum(&'schema EnumType),
    Object(&'schema ObjectType),
    Scalar(&'schema ScalarType),
    /// Interfaces, unions, and input objects: fields of these types are left
    /// out of generated records.
    Unsupported(&'schema GraphQLType),
}
impl<'schema> ShapeCategory<'schema> {
    pub fn of(graphql_type: &'schema GraphQLType) -> Self {
        match graphql_type {
            GraphQLType::Enum(enum_type) => Self::Enum(enum_type),
            GraphQLType::Object(obj_type) => Self::Object(obj_type),
            GraphQLType::Scalar(scalar_type) => Self::Scalar(scalar_type),
            GraphQLType::InputObject(_)
                | GraphQLType::Interface(_)
                | GraphQLType::Union(_) => Self::Unsupported(graphql_type),
        }
    }
}

/// Resolves a field's declared type to a [`ShapeDescriptor`].
///
/// Modifiers are unwrapped in a fixed order: an outer non-null marks the field
/// non-nullable, then a list marks the field as a list, then a non-null
/// directly inside that list marks its elements non-nullable. Whatever remains
/// must be a named type, which is classified by its schema category.
///
/// Returns `None` if the named type isn't defined in `schema`, or if
/// anything other than a named type is left after unwrapping (a list nested
/// directly in a list, such as `[[Int]]`).
pub fn resolve_shape<'schema>(
    schema: &'schema Schema,
    type_annotation: &TypeAnnotation,
) -> Option<ShapeDescriptor<'schema>> {
    let mut field_nullable = true;
    let mut is_list = false;
    let mut list_element_nullable = true;
    let mut remaining = type_annotation;

    if let TypeAnnotation::NonNull(inner) = remaining {
        field_nullable = false;
        remaining = &**inner;
    }

    if let TypeAnnotation::List(inner) = remaining {
        is_list = true;
        remaining = &**inner;

        if let TypeAnnotation::NonNull(inner) = remaining {
            list_element_nullable = false;
            remaining = &**inner;
        }
    }

    let TypeAnnotation::Named(type_name) = remaining else {
        return None;
    };
    let graphql_type = schema.get_type(type_name)?;

    Some(ShapeDescriptor {
        category: ShapeCategory::of(graphql_type),
        field_nullable,
        is_list,
        list_element_nullable,
    })
}

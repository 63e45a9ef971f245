use crate::codegen::CodegenConfig;
use crate::codegen::Declaration;
use crate::codegen::DocComment;
use crate::codegen::EnumDeclaration;
use crate::codegen::EnumDeclarationMode;
use crate::codegen::EnumMember;
use crate::codegen::EnumMode;
use crate::codegen::Primitive;
use crate::codegen::ScalarAliasDeclaration;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::ScalarType;

/// One declaration per scalar and enum in `schema`, in schema order.
/// Introspection types are never included.
pub(crate) fn global_type_declarations(
    schema: &Schema,
    config: &CodegenConfig,
) -> Vec<Declaration> {
    schema.all_types()
        .iter()
        .filter(|(name, _)| !name.starts_with("__"))
        .filter_map(|(_, graphql_type)| match graphql_type {
            GraphQLType::Enum(enum_type) =>
                Some(Declaration::Enum(enum_declaration(enum_type, config.enum_as))),
            GraphQLType::Scalar(scalar_type) =>
                Some(Declaration::ScalarAlias(scalar_alias_declaration(scalar_type))),
            _ => None,
        })
        .collect()
}

fn enum_declaration(enum_type: &EnumType, enum_mode: EnumMode) -> EnumDeclaration {
    let (mode, compile_time_only) = match enum_mode {
        EnumMode::ConstEnum => (EnumDeclarationMode::Tagged, true),
        EnumMode::Enum => (EnumDeclarationMode::Tagged, false),
        EnumMode::Union => (EnumDeclarationMode::UnionOfLiterals, false),
    };

    EnumDeclaration {
        compile_time_only,
        doc: DocComment::from_description(enum_type.description()),
        members: enum_type.values()
            .map(|value| EnumMember {
                doc: DocComment::new(value.description(), value.deprecation()),
                name: value.name().to_string(),
                value: value.name().to_string(),
            })
            .collect(),
        mode,
        name: enum_type.name().to_string(),
    }
}

fn scalar_alias_declaration(scalar_type: &ScalarType) -> ScalarAliasDeclaration {
    ScalarAliasDeclaration {
        aliased: Primitive::for_scalar(scalar_type.name()),
        doc: DocComment::from_description(scalar_type.description()),
        name: scalar_type.name().to_string(),
    }
}

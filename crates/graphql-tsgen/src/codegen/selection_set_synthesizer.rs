use crate::ast;
use crate::codegen::resolve_shape;
use crate::codegen::CodegenConfig;
use crate::codegen::Declaration;
use crate::codegen::DocComment;
use crate::codegen::Property;
use crate::codegen::RecordDeclaration;
use crate::codegen::ShapeCategory;
use crate::codegen::ShapeDescriptor;
use crate::codegen::TransformError;
use crate::codegen::TypeExpr;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::ObjectType;
use crate::types::ScalarType;

type Result<T> = std::result::Result<T, TransformError>;

/// Builds the record declarations describing the data returned for one
/// selection set.
pub(crate) struct SelectionSetSynthesizer<'a> {
    config: &'a CodegenConfig,
    schema: &'a Schema,
}
impl<'a> SelectionSetSynthesizer<'a> {
    pub fn new(schema: &'a Schema, config: &'a CodegenConfig) -> Self {
        Self {
            config,
            schema,
        }
    }

    /// Returns the records for every nested object selection (depth first, in
    /// selection order) followed by the record named `synthetic_name` for
    /// `selection_set` itself.
    pub fn synthesize(
        &self,
        selection_set: &ast::query::SelectionSet,
        synthetic_name: &str,
        base_type: &ObjectType,
    ) -> Result<Vec<Declaration>> {
        let mut declarations = vec![];
        let mut properties = vec![];

        for selection in &selection_set.items {
            let ast::query::Selection::Field(selected_field) = selection else {
                log::trace!(
                    "Skipping a fragment selection in `{synthetic_name}`: \
                    fragments do not contribute properties.",
                );
                continue;
            };

            let Some(field) = base_type.field(&selected_field.name) else {
                return Err(TransformError::UndefinedField {
                    field_name: selected_field.name.to_owned(),
                    position: selected_field.position.into(),
                    type_name: base_type.name().to_string(),
                });
            };

            let Some(shape) = resolve_shape(self.schema, field.type_annotation()) else {
                log::debug!(
                    "Skipping `{}.{}`: its type `{}` is a nested list or is not \
                    defined in the schema.",
                    base_type.name(),
                    field.name(),
                    field.type_annotation(),
                );
                continue;
            };

            let response_key = selected_field.alias
                .as_deref()
                .unwrap_or(selected_field.name.as_str());

            let element_type = match shape.category {
                ShapeCategory::Enum(enum_type) =>
                    self.enum_type_expr(enum_type),

                ShapeCategory::Scalar(scalar_type) =>
                    self.scalar_type_expr(scalar_type),

                ShapeCategory::Object(obj_type) => {
                    let nested_name = format!("{synthetic_name}${response_key}");
                    if selected_field.selection_set.items.is_empty() {
                        return Err(TransformError::MissingNestedSelection {
                            field_name: selected_field.name.to_owned(),
                            field_type_name: obj_type.name().to_string(),
                            position: selected_field.position.into(),
                            synthetic_name: nested_name,
                        });
                    }
                    declarations.extend(self.synthesize(
                        &selected_field.selection_set,
                        nested_name.as_str(),
                        obj_type,
                    )?);
                    TypeExpr::reference(nested_name)
                },

                ShapeCategory::Unsupported(graphql_type) => {
                    log::debug!(
                        "Skipping `{}.{}`: fields of {} type `{}` are not \
                        represented in generated records.",
                        base_type.name(),
                        field.name(),
                        graphql_type.kind(),
                        graphql_type.name(),
                    );
                    continue;
                },
            };

            properties.push(Property {
                doc: DocComment::new(field.description(), field.deprecation()),
                name: response_key.to_string(),
                optional: false,
                readonly: true,
                type_expr: apply_modifiers(element_type, &shape),
            });
        }

        declarations.push(Declaration::Record(RecordDeclaration {
            doc: DocComment::from_description(base_type.description()),
            name: synthetic_name.to_string(),
            properties,
        }));

        Ok(declarations)
    }

    fn enum_type_expr(&self, enum_type: &EnumType) -> TypeExpr {
        if self.config.emit_global_types {
            return TypeExpr::reference(enum_type.name());
        }
        TypeExpr::enum_values(enum_type.name(), enum_type.values().map(|value| value.name()))
    }

    fn scalar_type_expr(&self, scalar_type: &ScalarType) -> TypeExpr {
        if self.config.emit_global_types {
            TypeExpr::reference(scalar_type.name())
        } else {
            TypeExpr::scalar(scalar_type.name())
        }
    }
}

/// Wraps a field's element type in its list and nullability modifiers.
fn apply_modifiers(element_type: TypeExpr, shape: &ShapeDescriptor<'_>) -> TypeExpr {
    let mut type_expr = element_type;

    if shape.is_list {
        if shape.list_element_nullable {
            type_expr = TypeExpr::nullable(type_expr);
        }
        type_expr = TypeExpr::array(type_expr);
    }

    if shape.field_nullable {
        type_expr = TypeExpr::nullable(type_expr);
    }

    type_expr
}

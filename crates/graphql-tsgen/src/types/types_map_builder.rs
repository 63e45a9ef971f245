use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub struct TypesMapBuilder {
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (
                    name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(name)),
                ))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SchemaDefLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            let GraphQLType::Object(obj_type) = type_ else {
                continue;
            };

            for field in obj_type.fields().values() {
                let type_name = field.type_annotation().innermost_type_name();
                match self.types.get(type_name) {
                    None => errors.push(TypeValidationError::UndefinedTypeName {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        parent_type_name: obj_type.name().to_string(),
                        type_annotation: field.type_annotation().to_owned(),
                        undefined_type_name: type_name.to_string(),
                    }),

                    Some(GraphQLType::InputObject(_)) => errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field.name().to_string(),
                            input_type_name: type_name.to_string(),
                            parent_type_name: obj_type.name().to_string(),
                        }
                    ),

                    Some(_) => (),
                }
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }
}
impl Default for TypesMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::loc;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents an [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectType {
    pub(crate) fn new(
        name: &str,
        description: Option<String>,
        def_location: loc::SchemaDefLocation,
    ) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("__typename".to_string(), Field {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            deprecation: DeprecationState::NotDeprecated,
            description: None,
            name: "__typename".to_string(),
            type_annotation: TypeAnnotation::non_null(
                TypeAnnotation::named("String"),
            ),
        });

        Self {
            def_location,
            description,
            fields,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The fields of this type in definition order. The implicit
    /// `__typename` meta-field always comes first.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Represents a field defined on an [`ObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

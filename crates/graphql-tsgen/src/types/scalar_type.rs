use crate::loc;

/// Names of the scalar types every GraphQL schema defines implicitly.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Represents a [scalar type](https://spec.graphql.org/October2021/#sec-Scalars),
/// either one of the built-ins or a custom scalar defined in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

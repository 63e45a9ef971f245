use crate::loc;
use crate::types::DeprecationState;
use indexmap::IndexMap;

/// Represents an [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in the order they were defined (values added
    /// by type extensions come after those on the definition).
    pub fn values(&self) -> impl Iterator<Item = &EnumValue> {
        self.values.values()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }
}

/// Represents one value defined within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValue {
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
}

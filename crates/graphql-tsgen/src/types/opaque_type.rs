use crate::loc;

/// An interface, union, or input object type. These are kept in the schema's
/// type map only so that references to them resolve; no shape is generated
/// for them.
#[derive(Clone, Debug, PartialEq)]
pub struct OpaqueType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl OpaqueType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Options controlling what [`transform_document`](super::transform_document)
/// emits.
///
/// Deserializes from JSON with camelCase keys. Absent keys take their default
/// value and unknown keys are ignored:
///
/// ```
/// # use graphql_tsgen::codegen::CodegenConfig;
/// # use graphql_tsgen::codegen::EnumMode;
/// let config: CodegenConfig =
///     serde_json::from_str(r#"{"enumAs": "constEnum", "someOtherTool": 1}"#)?;
/// assert_eq!(config.enum_as, EnumMode::ConstEnum);
/// assert!(!config.emit_global_types);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Emit a module-level declaration for every scalar and enum in the
    /// schema, and reference those declarations from result records instead
    /// of inlining the scalar's primitive or the enum's values.
    pub emit_global_types: bool,

    /// Emit a typed constant holding a copy of each operation's document.
    pub emit_runtime_documents: bool,

    /// How enum types from the schema are declared.
    pub enum_as: EnumMode,

    /// Whether generated operation documents should be laid out on multiple
    /// lines (`true`) or a single line (`false`). The outermost document
    /// object is always multi-line so that included definitions stand out.
    #[serde(rename = "multilineOperationAST")]
    pub multiline_operation_ast: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnumMode {
    /// A tagged enum with string values, marked compile-time-only. Behaves
    /// like [`EnumMode::Union`] at runtime but reads like [`EnumMode::Enum`].
    ConstEnum,
    /// A tagged enum with string values.
    Enum,
    /// A type alias of a union of string literals.
    #[default]
    Union,
}
impl std::str::FromStr for EnumMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constEnum" | "const-enum" => Ok(Self::ConstEnum),
            "enum" => Ok(Self::Enum),
            "union" => Ok(Self::Union),
            other => Err(format!(
                "unknown enum mode `{other}` (expected `union`, `enum`, or `constEnum`)",
            )),
        }
    }
}

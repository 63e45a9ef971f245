use crate::ast;

/// The reason GraphQL reports for `@deprecated` when no `reason` argument is
/// given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a field or enum value is marked as
/// [deprecated](https://spec.graphql.org/October2021/#sec--deprecated).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DeprecationState {
    Deprecated {
        reason: Option<String>,
    },
    #[default]
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated { reason } => reason.as_deref(),
            Self::NotDeprecated => None,
        }
    }

    pub(crate) fn from_ast_directives(
        directives: &[ast::schema::Directive],
    ) -> Self {
        let Some(deprecated) = directives.iter().find(|d| d.name == "deprecated") else {
            return Self::NotDeprecated;
        };

        let reason_arg =
            deprecated.arguments
                .iter()
                .find(|(arg_name, _)| arg_name == "reason")
                .map(|(_, value)| value);

        let reason = match reason_arg {
            None => Some(DEFAULT_DEPRECATION_REASON.to_string()),
            Some(ast::schema::Value::String(reason)) => Some(reason.to_owned()),
            Some(_) => None,
        };

        Self::Deprecated { reason }
    }
}

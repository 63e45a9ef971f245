use crate::ast;
use crate::codegen::TransformError;

/// The three kinds of [executable
/// operation](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// Name of the typed document wrapper a generated document constant is
    /// declared with (`QueryDocument<TData, TVariables>` and friends).
    pub fn document_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "MutationDocument",
            Self::Query => "QueryDocument",
            Self::Subscription => "SubscriptionDocument",
        }
    }

    /// The default name GraphQL gives this operation's root type when a schema
    /// has no explicit `schema { ... }` block.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    pub(crate) fn of_ast(op: &ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match op {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::str::FromStr for OperationKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutation" => Ok(Self::Mutation),
            "query" => Ok(Self::Query),
            "subscription" => Ok(Self::Subscription),
            other => Err(TransformError::UnknownOperationKind(other.to_string())),
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use crate::ast;

/// The declared type of a schema field, including its
/// [list](https://spec.graphql.org/October2021/#sec-List) and
/// [non-null](https://spec.graphql.org/October2021/#sec-Non-Null) wrappers
/// exactly as they were written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(type_name.into())
    }

    pub fn non_null(inner: TypeAnnotation) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::list(Self::from_ast_type(inner)),
            ast::schema::Type::NamedType(name) =>
                Self::named(name.as_str()),
            ast::schema::Type::NonNullType(inner) =>
                Self::non_null(Self::from_ast_type(inner)),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the name of the
    /// inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_name(),
            Self::Named(name) => name.as_str(),
        }
    }

    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

use crate::types::DeprecationState;
use indexmap::IndexMap;

/// One unit of generated output. A transform produces an ordered sequence of
/// these; a [`Renderer`](crate::render::Renderer) turns them into source text.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Const(ConstDeclaration),
    Enum(EnumDeclaration),
    Record(RecordDeclaration),
    ScalarAlias(ScalarAliasDeclaration),
}
impl Declaration {
    pub fn as_record(&self) -> Option<&RecordDeclaration> {
        if let Self::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Const(decl) => decl.name.as_str(),
            Self::Enum(decl) => decl.name.as_str(),
            Self::Record(decl) => decl.name.as_str(),
            Self::ScalarAlias(decl) => decl.name.as_str(),
        }
    }
}

/// A named record (interface) type with one property per selected field.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDeclaration {
    pub doc: Option<DocComment>,
    pub name: String,
    pub properties: Vec<Property>,
}
impl RecordDeclaration {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub doc: Option<DocComment>,
    pub name: String,
    pub optional: bool,
    pub readonly: bool,
    pub type_expr: TypeExpr,
}

/// A module-level alias of a schema scalar to a primitive type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarAliasDeclaration {
    pub aliased: Primitive,
    pub doc: Option<DocComment>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDeclaration {
    /// Set for tagged enums that exist only at compile time (no runtime
    /// object is emitted for them).
    pub compile_time_only: bool,
    pub doc: Option<DocComment>,
    pub members: Vec<EnumMember>,
    pub mode: EnumDeclarationMode,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumDeclarationMode {
    /// `type Color = "RED" | "GREEN";`
    UnionOfLiterals,
    /// `enum Color { RED = "RED", GREEN = "GREEN" }`
    Tagged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub doc: Option<DocComment>,
    pub name: String,
    pub value: String,
}

/// A module-level constant, used for the runtime copy of an operation's
/// document.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstDeclaration {
    /// Whether nested literal objects should be laid out over multiple lines.
    /// The outermost object is always multi-line.
    pub multiline: bool,
    pub name: String,
    pub type_expr: TypeExpr,
    pub value: Literal,
}

/// The primitive types a scalar can map onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Number,
    String,
    Unknown,
}
impl Primitive {
    /// Maps a scalar type name onto the primitive it is represented as.
    /// Custom scalars have no known representation.
    pub fn for_scalar(scalar_name: &str) -> Self {
        match scalar_name {
            "Int" | "Float" => Self::Number,
            "ID" | "String" => Self::String,
            "Boolean" => Self::Boolean,
            _ => Self::Unknown,
        }
    }
}

/// A type expression in the generated output.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    Array(Box<TypeExpr>),
    /// `type_expr` annotated with the name of the schema type it was derived
    /// from, rendered as a comment beside it.
    Commented {
        comment: String,
        placement: CommentPlacement,
        type_expr: Box<TypeExpr>,
    },
    /// The `{}` record with no properties.
    EmptyRecord,
    Null,
    Primitive(Primitive),
    Reference {
        name: String,
        type_args: Vec<TypeExpr>,
    },
    StringLiteral(String),
    Union(Vec<TypeExpr>),
}
impl TypeExpr {
    pub fn array(element: TypeExpr) -> Self {
        Self::Array(Box::new(element))
    }

    /// An inline enum: the union of its value names, led by the enum's name.
    pub fn enum_values<'a>(
        enum_name: &str,
        value_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::Commented {
            comment: enum_name.to_string(),
            placement: CommentPlacement::Leading,
            type_expr: Box::new(Self::Union(
                value_names.into_iter()
                    .map(|name| Self::StringLiteral(name.to_string()))
                    .collect(),
            )),
        }
    }

    /// `inner | null`
    pub fn nullable(inner: TypeExpr) -> Self {
        Self::Union(vec![inner, Self::Null])
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            type_args: vec![],
        }
    }

    /// An inline scalar: its primitive, trailed by the scalar's name.
    pub fn scalar(scalar_name: &str) -> Self {
        Self::Commented {
            comment: scalar_name.to_string(),
            placement: CommentPlacement::Trailing,
            type_expr: Box::new(Self::Primitive(Primitive::for_scalar(scalar_name))),
        }
    }
}

/// Which side of a [`TypeExpr::Commented`] type its comment sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentPlacement {
    Leading,
    Trailing,
}

/// A plain data value: what a generated constant is initialized with.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Array(Vec<Literal>),
    Bool(bool),
    Null,
    Object(IndexMap<String, Literal>),
    String(String),
}
impl Literal {
    pub fn as_array(&self) -> Option<&Vec<Literal>> {
        if let Self::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Literal>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Looks up `key` on an object literal.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.as_object()?.get(key)
    }
}

/// Documentation carried from the schema onto a declaration or property.
#[derive(Clone, Debug, PartialEq)]
pub struct DocComment {
    pub deprecation: Option<Deprecation>,
    pub description: Option<String>,
}
impl DocComment {
    /// Returns `None` when there is nothing to document.
    pub fn new(
        description: Option<&str>,
        deprecation: &DeprecationState,
    ) -> Option<Self> {
        let description = description.filter(|d| !d.is_empty()).map(str::to_string);
        let deprecation = match deprecation {
            DeprecationState::Deprecated { reason } => Some(Deprecation {
                reason: reason.to_owned(),
            }),
            DeprecationState::NotDeprecated => None,
        };

        if description.is_none() && deprecation.is_none() {
            None
        } else {
            Some(Self { deprecation, description })
        }
    }

    pub fn from_description(description: Option<&str>) -> Option<Self> {
        Self::new(description, &DeprecationState::NotDeprecated)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Deprecation {
    pub reason: Option<String>,
}

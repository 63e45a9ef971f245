use crate::codegen::CommentPlacement;
use crate::codegen::ConstDeclaration;
use crate::codegen::Declaration;
use crate::codegen::DocComment;
use crate::codegen::EnumDeclaration;
use crate::codegen::EnumDeclarationMode;
use crate::codegen::Literal;
use crate::codegen::Primitive;
use crate::codegen::RecordDeclaration;
use crate::codegen::ScalarAliasDeclaration;
use crate::codegen::TypeExpr;
use crate::render::Renderer;
use inherent::inherent;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Write;

/// Module the typed document wrappers are imported from.
pub const DEFAULT_RUNTIME_MODULE: &str = "graphql-tsgen-runtime";

const INDENT: &str = "    ";

/// Renders declarations as TypeScript source text.
#[derive(Clone, Debug)]
pub struct TypeScriptPrinter {
    runtime_module: String,
}
impl TypeScriptPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runtime_module(runtime_module: impl Into<String>) -> Self {
        Self {
            runtime_module: runtime_module.into(),
        }
    }
}
impl std::default::Default for TypeScriptPrinter {
    fn default() -> Self {
        Self::with_runtime_module(DEFAULT_RUNTIME_MODULE)
    }
}

#[inherent]
impl Renderer for TypeScriptPrinter {
    pub fn render_declaration(&self, declaration: &Declaration) -> String {
        DeclarationDisplay(declaration).to_string()
    }

    pub fn render_file(
        &self,
        source_name: &str,
        declarations: &[Declaration],
    ) -> String {
        let mut out = String::from("// tslint:disable\n");
        out.push_str(&format!("// generated from {source_name} by graphql-tsgen\n"));

        let document_types = declarations.iter()
            .filter_map(|decl| match decl {
                Declaration::Const(ConstDeclaration {
                    type_expr: TypeExpr::Reference { name, .. },
                    ..
                }) => Some(name.as_str()),
                _ => None,
            })
            .collect::<BTreeSet<_>>();
        if !document_types.is_empty() {
            out.push_str(&format!(
                "import {{ {} }} from {};\n",
                document_types.into_iter().collect::<Vec<_>>().join(", "),
                Quoted(&self.runtime_module),
            ));
        }

        for (idx, decl) in declarations.iter().enumerate() {
            // Two blank lines before every declaration.
            out.push_str(if idx == 0 { "\n\n" } else { "\n\n\n" });
            out.push_str(&self.render_declaration(decl));
        }
        out.push('\n');
        out
    }
}

struct DeclarationDisplay<'a>(&'a Declaration);
impl fmt::Display for DeclarationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Declaration::Const(decl) => write_const(f, decl),
            Declaration::Enum(decl) => write_enum(f, decl),
            Declaration::Record(decl) => write_record(f, decl),
            Declaration::ScalarAlias(decl) => write_scalar_alias(f, decl),
        }
    }
}

fn write_const(f: &mut fmt::Formatter<'_>, decl: &ConstDeclaration) -> fmt::Result {
    write!(f, "export const {}: {} = ", decl.name, TypeExprDisplay(&decl.type_expr))?;
    write_literal(f, &decl.value, 0, true, decl.multiline)?;
    f.write_char(';')
}

fn write_enum(f: &mut fmt::Formatter<'_>, decl: &EnumDeclaration) -> fmt::Result {
    if let Some(doc) = &decl.doc {
        write!(f, "{}", JsDoc(doc, ""))?;
    }

    match decl.mode {
        EnumDeclarationMode::UnionOfLiterals => {
            write!(f, "export type {} = ", decl.name)?;
            if decl.members.is_empty() {
                f.write_str("never")?;
            }
            for (idx, member) in decl.members.iter().enumerate() {
                if idx > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", Quoted(&member.value))?;
            }
            f.write_char(';')
        },

        EnumDeclarationMode::Tagged => {
            let const_prefix = if decl.compile_time_only { "const " } else { "" };
            writeln!(f, "export {const_prefix}enum {} {{", decl.name)?;
            for (idx, member) in decl.members.iter().enumerate() {
                if let Some(doc) = &member.doc {
                    write!(f, "{}", JsDoc(doc, INDENT))?;
                }
                write!(f, "{INDENT}{} = {}", member.name, Quoted(&member.value))?;
                if idx + 1 < decl.members.len() {
                    f.write_char(',')?;
                }
                f.write_char('\n')?;
            }
            f.write_char('}')
        },
    }
}

fn write_record(f: &mut fmt::Formatter<'_>, decl: &RecordDeclaration) -> fmt::Result {
    if let Some(doc) = &decl.doc {
        write!(f, "{}", JsDoc(doc, ""))?;
    }

    if decl.properties.is_empty() {
        return write!(f, "export interface {} {{}}", decl.name);
    }

    writeln!(f, "export interface {} {{", decl.name)?;
    for prop in &decl.properties {
        if let Some(doc) = &prop.doc {
            write!(f, "{}", JsDoc(doc, INDENT))?;
        }
        f.write_str(INDENT)?;
        if prop.readonly {
            f.write_str("readonly ")?;
        }
        write!(f, "{}", PropertyKey(&prop.name))?;
        if prop.optional {
            f.write_char('?')?;
        }
        writeln!(f, ": {};", TypeExprDisplay(&prop.type_expr))?;
    }
    f.write_char('}')
}

fn write_scalar_alias(
    f: &mut fmt::Formatter<'_>,
    decl: &ScalarAliasDeclaration,
) -> fmt::Result {
    if let Some(doc) = &decl.doc {
        write!(f, "{}", JsDoc(doc, ""))?;
    }
    write!(f, "export type {} = {};", decl.name, primitive_keyword(decl.aliased))
}

fn primitive_keyword(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Boolean => "boolean",
        Primitive::Number => "number",
        Primitive::String => "string",
        Primitive::Unknown => "any",
    }
}

/// Writes `literal` at nesting `depth`. The outermost value ignores
/// `multiline` and is always laid out over multiple lines.
fn write_literal(
    f: &mut fmt::Formatter<'_>,
    literal: &Literal,
    depth: usize,
    is_outermost: bool,
    multiline: bool,
) -> fmt::Result {
    let spread = is_outermost || multiline;
    match literal {
        Literal::Array(items) if items.is_empty() => f.write_str("[]"),
        Literal::Array(items) => {
            write_open(f, '[', spread)?;
            for (idx, item) in items.iter().enumerate() {
                write_separator(f, idx, depth + 1, spread)?;
                write_literal(f, item, depth + 1, false, multiline)?;
            }
            write_close(f, ']', depth, spread)
        },

        Literal::Bool(b) => write!(f, "{b}"),
        Literal::Null => f.write_str("null"),

        Literal::Object(entries) if entries.is_empty() => f.write_str("{}"),
        Literal::Object(entries) => {
            write_open(f, '{', spread)?;
            for (idx, (key, value)) in entries.iter().enumerate() {
                write_separator(f, idx, depth + 1, spread)?;
                write!(f, "{}: ", PropertyKey(key))?;
                write_literal(f, value, depth + 1, false, multiline)?;
            }
            write_close(f, '}', depth, spread)
        },

        Literal::String(s) => write!(f, "{}", Quoted(s)),
    }
}

fn write_open(f: &mut fmt::Formatter<'_>, delim: char, spread: bool) -> fmt::Result {
    f.write_char(delim)?;
    // Single-line objects are padded (`{ a: 1 }`), single-line arrays are not.
    if !spread && delim == '{' {
        f.write_char(' ')?;
    }
    Ok(())
}

fn write_separator(
    f: &mut fmt::Formatter<'_>,
    idx: usize,
    depth: usize,
    spread: bool,
) -> fmt::Result {
    if spread {
        if idx > 0 {
            f.write_char(',')?;
        }
        f.write_char('\n')?;
        write_indent(f, depth)
    } else if idx > 0 {
        f.write_str(", ")
    } else {
        Ok(())
    }
}

fn write_close(
    f: &mut fmt::Formatter<'_>,
    delim: char,
    depth: usize,
    spread: bool,
) -> fmt::Result {
    if spread {
        f.write_char('\n')?;
        write_indent(f, depth)?;
    } else if delim == '}' {
        f.write_char(' ')?;
    }
    f.write_char(delim)
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

struct TypeExprDisplay<'a>(&'a TypeExpr);
impl fmt::Display for TypeExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TypeExpr::Array(element) if is_union(element) =>
                write!(f, "({})[]", TypeExprDisplay(element)),
            TypeExpr::Array(element) => write!(f, "{}[]", TypeExprDisplay(element)),
            TypeExpr::Commented { comment, placement, type_expr } => match placement {
                CommentPlacement::Leading =>
                    write!(f, "/* {comment} */ {}", TypeExprDisplay(type_expr)),
                CommentPlacement::Trailing =>
                    write!(f, "{} /* {comment} */", TypeExprDisplay(type_expr)),
            },
            TypeExpr::EmptyRecord => f.write_str("{}"),
            TypeExpr::Null => f.write_str("null"),
            TypeExpr::Primitive(primitive) => f.write_str(primitive_keyword(*primitive)),
            TypeExpr::Reference { name, type_args } => {
                f.write_str(name)?;
                if !type_args.is_empty() {
                    f.write_char('<')?;
                    for (idx, arg) in type_args.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", TypeExprDisplay(arg))?;
                    }
                    f.write_char('>')?;
                }
                Ok(())
            },
            TypeExpr::StringLiteral(s) => write!(f, "{}", Quoted(s)),
            TypeExpr::Union(members) => {
                for (idx, member) in members.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", TypeExprDisplay(member))?;
                }
                Ok(())
            },
        }
    }
}

fn is_union(type_expr: &TypeExpr) -> bool {
    match type_expr {
        TypeExpr::Commented { type_expr, .. } => is_union(type_expr),
        TypeExpr::Union(_) => true,
        _ => false,
    }
}

/// A `/** ... */` block for a doc comment, each line prefixed with the given
/// indentation and followed by a newline.
struct JsDoc<'a>(&'a DocComment, &'a str);
impl fmt::Display for JsDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let JsDoc(doc, indent) = self;

        let mut text = doc.description.clone().unwrap_or_default();
        if let Some(deprecation) = &doc.deprecation {
            // `@deprecated` always starts its own line.
            text.push('\n');
            text.push_str("@deprecated");
            if let Some(reason) = &deprecation.reason {
                text.push(' ');
                text.push_str(reason);
            }
        }
        let text = text.replace("*/", "*\\/");

        if !text.contains('\n') {
            return writeln!(f, "{indent}/** {text} */");
        }

        for (idx, line) in text.lines().enumerate() {
            let lead = if idx == 0 { "/**" } else { " *" };
            if line.is_empty() {
                writeln!(f, "{indent}{lead}")?;
            } else {
                writeln!(f, "{indent}{lead} {line}")?;
            }
        }
        writeln!(f, "{indent} */")
    }
}

/// An object key, quoted only when it isn't a plain identifier.
struct PropertyKey<'a>(&'a str);
impl fmt::Display for PropertyKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        let is_identifier = chars.next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

        if is_identifier {
            f.write_str(self.0)
        } else {
            write!(f, "{}", Quoted(self.0))
        }
    }
}

/// A double-quoted string literal.
struct Quoted<'a>(&'a str);
impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '\r' => f.write_str("\\r"),
                '\n' => f.write_str("\\n"),
                '\t' => f.write_str("\\t"),
                '\\' => f.write_str("\\\\"),
                '"' => f.write_str("\\\""),
                c if c.is_control() => write!(f, "\\u{:04x}", c as u32),
                c => f.write_char(c),
            }?
        }
        f.write_char('"')
    }
}

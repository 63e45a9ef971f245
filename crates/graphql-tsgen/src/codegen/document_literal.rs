use crate::ast;
use crate::codegen::Literal;
use crate::codegen::TransformError;
use crate::document::OperationParts;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TransformError>;

/// Copies an operation into a plain literal shaped like the standard GraphQL
/// document AST (`kind`-tagged nodes, `Name` nodes for identifiers) wrapped
/// in a single-definition `Document` node.
///
/// Absent optional children and empty child lists are left out, and source
/// locations are never included.
pub(crate) fn document_literal(op: &ast::query::OperationDefinition) -> Result<Literal> {
    let op_literal = operation_literal(&OperationParts::of(op), "definitions[0]")?;
    Ok(
        Node::new("Document")
            .with("definitions", Literal::Array(vec![op_literal]))
            .build()
    )
}

/// Builds a `kind`-tagged AST node, dropping absent or empty children.
struct Node {
    entries: IndexMap<String, Literal>,
}
impl Node {
    fn new(kind: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert("kind".to_string(), Literal::String(kind.to_string()));
        Self { entries }
    }

    fn build(self) -> Literal {
        Literal::Object(self.entries)
    }

    fn with(mut self, key: &str, value: impl Into<Option<Literal>>) -> Self {
        match value.into() {
            None => (),
            Some(Literal::Array(items)) if items.is_empty() => (),
            Some(value) => {
                self.entries.insert(key.to_string(), value);
            },
        }
        self
    }
}

fn name_literal(name: &str) -> Literal {
    Node::new("Name")
        .with("value", Literal::String(name.to_string()))
        .build()
}

fn operation_literal(op: &OperationParts<'_>, path: &str) -> Result<Literal> {
    let variable_definitions = op.variable_definitions
        .iter()
        .enumerate()
        .map(|(idx, var_def)| variable_definition_literal(
            var_def,
            &format!("{path}.variableDefinitions[{idx}]"),
        ))
        .collect::<Result<Vec<_>>>()?;

    Ok(
        Node::new("OperationDefinition")
            .with("operation", Literal::String(op.kind.as_str().to_string()))
            .with("name", op.name.map(name_literal))
            .with("variableDefinitions", Literal::Array(variable_definitions))
            .with("directives", directives_literal(op.directives, path)?)
            .with("selectionSet", selection_set_literal(
                op.selection_set,
                &format!("{path}.selectionSet"),
            )?)
            .build()
    )
}

fn variable_definition_literal(
    var_def: &ast::query::VariableDefinition,
    path: &str,
) -> Result<Literal> {
    let default_value = var_def.default_value
        .as_ref()
        .map(|value| value_literal(value, &format!("{path}.defaultValue")))
        .transpose()?;

    Ok(
        Node::new("VariableDefinition")
            .with("variable", variable_literal(&var_def.name))
            .with("type", type_literal(&var_def.var_type))
            .with("defaultValue", default_value)
            .build()
    )
}

fn variable_literal(name: &str) -> Literal {
    Node::new("Variable")
        .with("name", name_literal(name))
        .build()
}

fn type_literal(ast_type: &ast::query::Type) -> Literal {
    use ast::query::Type;
    match ast_type {
        Type::NamedType(name) => named_type_literal(name),
        Type::ListType(inner) =>
            Node::new("ListType")
                .with("type", type_literal(inner))
                .build(),
        Type::NonNullType(inner) =>
            Node::new("NonNullType")
                .with("type", type_literal(inner))
                .build(),
    }
}

fn named_type_literal(name: &str) -> Literal {
    Node::new("NamedType")
        .with("name", name_literal(name))
        .build()
}

fn directives_literal(
    directives: &[ast::query::Directive],
    path: &str,
) -> Result<Literal> {
    let directives = directives.iter()
        .enumerate()
        .map(|(idx, directive)| {
            let directive_path = format!("{path}.directives[{idx}]");
            Ok(
                Node::new("Directive")
                    .with("name", name_literal(&directive.name))
                    .with("arguments", arguments_literal(
                        &directive.arguments,
                        &directive_path,
                    )?)
                    .build()
            )
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Literal::Array(directives))
}

fn arguments_literal(
    arguments: &[(String, ast::query::Value)],
    path: &str,
) -> Result<Literal> {
    let arguments = arguments.iter()
        .enumerate()
        .map(|(idx, (name, value))| Ok(
            Node::new("Argument")
                .with("name", name_literal(name))
                .with("value", value_literal(
                    value,
                    &format!("{path}.arguments[{idx}].value"),
                )?)
                .build()
        ))
        .collect::<Result<Vec<_>>>()?;
    Ok(Literal::Array(arguments))
}

/// `None` for an empty selection set (a leaf field has no `selectionSet`).
fn selection_set_literal(
    selection_set: &ast::query::SelectionSet,
    path: &str,
) -> Result<Option<Literal>> {
    if selection_set.items.is_empty() {
        return Ok(None);
    }

    let selections = selection_set.items
        .iter()
        .enumerate()
        .map(|(idx, selection)| selection_literal(
            selection,
            &format!("{path}.selections[{idx}]"),
        ))
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(
        Node::new("SelectionSet")
            .with("selections", Literal::Array(selections))
            .build()
    ))
}

fn selection_literal(selection: &ast::query::Selection, path: &str) -> Result<Literal> {
    use ast::query::Selection;
    use ast::query::TypeCondition;
    Ok(match selection {
        Selection::Field(field) =>
            Node::new("Field")
                .with("alias", field.alias.as_deref().map(name_literal))
                .with("name", name_literal(&field.name))
                .with("arguments", arguments_literal(&field.arguments, path)?)
                .with("directives", directives_literal(&field.directives, path)?)
                .with("selectionSet", selection_set_literal(
                    &field.selection_set,
                    &format!("{path}.selectionSet"),
                )?)
                .build(),

        Selection::FragmentSpread(spread) =>
            Node::new("FragmentSpread")
                .with("name", name_literal(&spread.fragment_name))
                .with("directives", directives_literal(&spread.directives, path)?)
                .build(),

        Selection::InlineFragment(inline_fragment) => {
            let type_condition = inline_fragment.type_condition
                .as_ref()
                .map(|TypeCondition::On(type_name)| named_type_literal(type_name));
            Node::new("InlineFragment")
                .with("typeCondition", type_condition)
                .with("directives", directives_literal(&inline_fragment.directives, path)?)
                .with("selectionSet", selection_set_literal(
                    &inline_fragment.selection_set,
                    &format!("{path}.selectionSet"),
                )?)
                .build()
        },
    })
}

fn value_literal(value: &ast::query::Value, path: &str) -> Result<Literal> {
    use ast::query::Value;
    Ok(match value {
        Value::Boolean(b) =>
            Node::new("BooleanValue")
                .with("value", Literal::Bool(*b))
                .build(),

        Value::Enum(enum_value) =>
            Node::new("EnumValue")
                .with("value", Literal::String(enum_value.to_owned()))
                .build(),

        Value::Float(f) => {
            if !f.is_finite() {
                return Err(TransformError::UnserializableAstValue {
                    path: path.to_string(),
                    reason: format!("is the non-finite float `{f}`"),
                });
            }
            Node::new("FloatValue")
                // Debug formatting always keeps a fractional part or exponent.
                .with("value", Literal::String(format!("{f:?}")))
                .build()
        },

        Value::Int(number) => {
            let Some(int) = number.as_i64() else {
                return Err(TransformError::UnserializableAstValue {
                    path: path.to_string(),
                    reason: "is an integer outside of the 64-bit range".to_string(),
                });
            };
            Node::new("IntValue")
                .with("value", Literal::String(int.to_string()))
                .build()
        },

        Value::List(items) => {
            let values = items.iter()
                .enumerate()
                .map(|(idx, item)| value_literal(item, &format!("{path}.values[{idx}]")))
                .collect::<Result<Vec<_>>>()?;
            Node::new("ListValue")
                .with("values", Literal::Array(values))
                .build()
        },

        Value::Null => Node::new("NullValue").build(),

        Value::Object(fields) => {
            let fields = fields.iter()
                .enumerate()
                .map(|(idx, (name, field_value))| Ok(
                    Node::new("ObjectField")
                        .with("name", name_literal(name))
                        .with("value", value_literal(
                            field_value,
                            &format!("{path}.fields[{idx}].value"),
                        )?)
                        .build()
                ))
                .collect::<Result<Vec<_>>>()?;
            Node::new("ObjectValue")
                .with("fields", Literal::Array(fields))
                .build()
        },

        Value::String(s) =>
            Node::new("StringValue")
                .with("value", Literal::String(s.to_owned()))
                .with("block", Literal::Bool(false))
                .build(),

        Value::Variable(name) => variable_literal(name),
    })
}

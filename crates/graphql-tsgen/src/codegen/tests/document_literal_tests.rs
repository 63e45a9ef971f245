use crate::codegen::tests::test_utils;
use crate::codegen::CodegenConfig;
use crate::codegen::Declaration;
use crate::codegen::Literal;
use crate::codegen::TransformError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TransformError>;

const SCHEMA: &str = "
    type Query {
        user(id: ID!, opts: Opts): User
        search(terms: [String], limit: Int, ratio: Float, exact: Boolean, mode: Mode): [User!]!
    }
    type User { id: ID!, name: String }
    enum Mode { FAST SLOW }
    input Opts { deep: Boolean }
";

fn document_literal(operation: &str) -> Result<Literal> {
    let config = CodegenConfig {
        emit_runtime_documents: true,
        ..Default::default()
    };
    let decls = test_utils::transform(SCHEMA, operation, &config)?;
    match decls.into_iter().last() {
        Some(Declaration::Const(doc_const)) => Ok(doc_const.value),
        other => panic!("expected a trailing const declaration, got {other:?}"),
    }
}

fn object(entries: &[(&str, Literal)]) -> Literal {
    Literal::Object(
        entries.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

fn string(s: &str) -> Literal {
    Literal::String(s.to_string())
}

fn name(value: &str) -> Literal {
    object(&[("kind", string("Name")), ("value", string(value))])
}

fn first_definition(doc: &Literal) -> &Literal {
    doc.get("definitions")
        .and_then(Literal::as_array)
        .and_then(|defs| defs.first())
        .expect("no definitions")
}

fn first_selection(node: &Literal) -> &Literal {
    node.get("selectionSet")
        .and_then(|ss| ss.get("selections"))
        .and_then(Literal::as_array)
        .and_then(|selections| selections.first())
        .expect("no selections")
}

fn argument_value<'a>(field: &'a Literal, arg_name: &str) -> &'a Literal {
    field.get("arguments")
        .and_then(Literal::as_array)
        .and_then(|args| args.iter().find(|arg| {
            arg.get("name").and_then(|n| n.get("value")).and_then(Literal::as_str)
                == Some(arg_name)
        }))
        .and_then(|arg| arg.get("value"))
        .unwrap_or_else(|| panic!("no `{arg_name}` argument on {field:?}"))
}

#[test]
fn minimal_query_shape() -> Result<()> {
    let doc = document_literal("query Me { user(id: \"1\") { id } }")?;

    let id_field = object(&[("kind", string("Field")), ("name", name("id"))]);
    let user_field = object(&[
        ("kind", string("Field")),
        ("name", name("user")),
        ("arguments", Literal::Array(vec![object(&[
            ("kind", string("Argument")),
            ("name", name("id")),
            ("value", object(&[
                ("kind", string("StringValue")),
                ("value", string("1")),
                ("block", Literal::Bool(false)),
            ])),
        ])])),
        ("selectionSet", object(&[
            ("kind", string("SelectionSet")),
            ("selections", Literal::Array(vec![id_field])),
        ])),
    ]);

    assert_eq!(doc, object(&[
        ("kind", string("Document")),
        ("definitions", Literal::Array(vec![object(&[
            ("kind", string("OperationDefinition")),
            ("operation", string("query")),
            ("name", name("Me")),
            ("selectionSet", object(&[
                ("kind", string("SelectionSet")),
                ("selections", Literal::Array(vec![user_field])),
            ])),
        ])])),
    ]));

    Ok(())
}

#[test]
fn variable_definitions_and_directives() -> Result<()> {
    let doc = document_literal(
        "query Find($limit: Int = 10, $terms: [String!]!) @live { \
            search(limit: $limit, terms: $terms) @include(if: true) { id } \
        }",
    )?;
    let op = first_definition(&doc);

    let var_defs = op.get("variableDefinitions")
        .and_then(Literal::as_array)
        .expect("no variable definitions");
    assert_eq!(var_defs[0], object(&[
        ("kind", string("VariableDefinition")),
        ("variable", object(&[("kind", string("Variable")), ("name", name("limit"))])),
        ("type", object(&[("kind", string("NamedType")), ("name", name("Int"))])),
        ("defaultValue", object(&[("kind", string("IntValue")), ("value", string("10"))])),
    ]));
    assert_eq!(var_defs[1].get("type"), Some(&object(&[
        ("kind", string("NonNullType")),
        ("type", object(&[
            ("kind", string("ListType")),
            ("type", object(&[
                ("kind", string("NonNullType")),
                ("type", object(&[("kind", string("NamedType")), ("name", name("String"))])),
            ])),
        ])),
    ])));

    assert_eq!(op.get("directives"), Some(&Literal::Array(vec![object(&[
        ("kind", string("Directive")),
        ("name", name("live")),
    ])])));

    let search = first_selection(op);
    assert_eq!(argument_value(search, "limit"), &object(&[
        ("kind", string("Variable")),
        ("name", name("limit")),
    ]));
    assert_eq!(search.get("directives"), Some(&Literal::Array(vec![object(&[
        ("kind", string("Directive")),
        ("name", name("include")),
        ("arguments", Literal::Array(vec![object(&[
            ("kind", string("Argument")),
            ("name", name("if")),
            ("value", object(&[("kind", string("BooleanValue")), ("value", Literal::Bool(true))])),
        ])])),
    ])])));

    Ok(())
}

#[test]
fn value_kinds() -> Result<()> {
    let doc = document_literal(
        "query Find { \
            search(terms: [\"a\", null], ratio: 0.5, exact: false, mode: FAST) { id } \
            user(id: 7, opts: { deep: true }) { id } \
        }",
    )?;
    let op = first_definition(&doc);
    let search = first_selection(op);

    assert_eq!(argument_value(search, "terms"), &object(&[
        ("kind", string("ListValue")),
        ("values", Literal::Array(vec![
            object(&[
                ("kind", string("StringValue")),
                ("value", string("a")),
                ("block", Literal::Bool(false)),
            ]),
            object(&[("kind", string("NullValue"))]),
        ])),
    ]));
    assert_eq!(argument_value(search, "ratio"), &object(&[
        ("kind", string("FloatValue")),
        ("value", string("0.5")),
    ]));
    assert_eq!(argument_value(search, "mode"), &object(&[
        ("kind", string("EnumValue")),
        ("value", string("FAST")),
    ]));

    let user = op.get("selectionSet")
        .and_then(|ss| ss.get("selections"))
        .and_then(Literal::as_array)
        .and_then(|selections| selections.get(1))
        .expect("no user selection");
    assert_eq!(argument_value(user, "id"), &object(&[
        ("kind", string("IntValue")),
        ("value", string("7")),
    ]));
    assert_eq!(argument_value(user, "opts"), &object(&[
        ("kind", string("ObjectValue")),
        ("fields", Literal::Array(vec![object(&[
            ("kind", string("ObjectField")),
            ("name", name("deep")),
            ("value", object(&[("kind", string("BooleanValue")), ("value", Literal::Bool(true))])),
        ])])),
    ]));

    Ok(())
}

#[test]
fn empty_list_and_object_values_drop_their_children() -> Result<()> {
    let doc = document_literal("query Find { search(terms: [], filter: {}) { id } }")?;
    let search = first_selection(first_definition(&doc));

    assert_eq!(argument_value(search, "terms"), &object(&[
        ("kind", string("ListValue")),
    ]));
    assert_eq!(argument_value(search, "filter"), &object(&[
        ("kind", string("ObjectValue")),
    ]));

    Ok(())
}

#[test]
fn alias_and_fragments() -> Result<()> {
    let doc = document_literal(
        "query Find { me: user(id: 1) { ...UserBits ... on User { name } } } \
        fragment UserBits on User { id }",
    )?;
    let me = first_selection(first_definition(&doc));

    assert_eq!(me.get("alias"), Some(&name("me")));
    assert_eq!(me.get("name"), Some(&name("user")));

    let selections = me.get("selectionSet")
        .and_then(|ss| ss.get("selections"))
        .and_then(Literal::as_array)
        .expect("no selections");
    assert_eq!(selections[0], object(&[
        ("kind", string("FragmentSpread")),
        ("name", name("UserBits")),
    ]));
    assert_eq!(selections[1].get("kind"), Some(&string("InlineFragment")));
    assert_eq!(selections[1].get("typeCondition"), Some(&object(&[
        ("kind", string("NamedType")),
        ("name", name("User")),
    ])));

    Ok(())
}

#[test]
fn only_the_operation_is_copied() -> Result<()> {
    let doc = document_literal("fragment F on User { id }\nquery Me { user(id: 1) { ...F } }")?;

    let defs = doc.get("definitions").and_then(Literal::as_array).expect("no definitions");
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].get("kind"), Some(&string("OperationDefinition")));

    Ok(())
}

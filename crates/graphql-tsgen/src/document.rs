use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::OperationKind;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentParseError>;

/// Parses GraphQL operation document source text.
pub fn parse_document(
    source: &str,
    file_path: Option<&Path>,
) -> Result<ast::query::Document> {
    graphql_parser::query::parse_query::<String>(source)
        .map(|doc| doc.into_static())
        .map_err(|err| DocumentParseError::ParseError {
            file: file_path.map(Path::to_path_buf),
            err: err.to_string(),
        })
}

/// Reads and parses an operation document file.
pub fn load_document_file(file_path: impl AsRef<Path>) -> Result<ast::query::Document> {
    let file_path = file_path.as_ref();
    let source = file_reader::read_content(file_path)
        .map_err(|err| DocumentParseError::DocumentFileReadError(Box::new(err)))?;
    parse_document(source.as_str(), Some(file_path))
}

#[derive(Debug, Error, PartialEq)]
pub enum DocumentParseError {
    #[error("Failure while trying to read an operation document from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Error parsing operation document{}: {err}",
        file.as_ref()
            .map(|f| format!(" `{}`", f.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}

/// A uniform view over the four shapes `graphql_parser` gives an operation
/// definition (the anonymous `{ ... }` shorthand being one of them).
pub(crate) struct OperationParts<'a> {
    pub directives: &'a [ast::query::Directive],
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub position: loc::SourcePosition,
    pub selection_set: &'a ast::query::SelectionSet,
    pub variable_definitions: &'a [ast::query::VariableDefinition],
}
impl<'a> OperationParts<'a> {
    pub fn of(op: &'a ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        let kind = OperationKind::of_ast(op);
        match op {
            OperationDefinition::SelectionSet(selection_set) => Self {
                directives: &[],
                kind,
                name: None,
                position: selection_set.span.0.into(),
                selection_set,
                variable_definitions: &[],
            },

            OperationDefinition::Query(query) => Self {
                directives: &query.directives,
                kind,
                name: query.name.as_deref(),
                position: query.position.into(),
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },

            OperationDefinition::Mutation(mutation) => Self {
                directives: &mutation.directives,
                kind,
                name: mutation.name.as_deref(),
                position: mutation.position.into(),
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },

            OperationDefinition::Subscription(subscription) => Self {
                directives: &subscription.directives,
                kind,
                name: subscription.name.as_deref(),
                position: subscription.position.into(),
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }
}

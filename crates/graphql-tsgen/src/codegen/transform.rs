use crate::ast;
use crate::codegen::document_literal::document_literal;
use crate::codegen::global_types::global_type_declarations;
use crate::codegen::selection_set_synthesizer::SelectionSetSynthesizer;
use crate::codegen::CodegenConfig;
use crate::codegen::ConstDeclaration;
use crate::codegen::Declaration;
use crate::codegen::TransformError;
use crate::codegen::TypeExpr;
use crate::document::OperationParts;
use crate::schema::Schema;

type Result<T> = std::result::Result<T, TransformError>;

/// Generates the declarations describing every operation in `document`.
///
/// With [`CodegenConfig::emit_global_types`] set, the output starts with one
/// declaration per schema scalar and enum. Each operation then contributes
/// its result records (innermost first, ending with `<Name>$Result`) and,
/// with [`CodegenConfig::emit_runtime_documents`] set, a constant holding a
/// copy of the operation's document. Fragment definitions contribute nothing.
///
/// Fails on the first operation that can't be transformed; no partial output
/// is returned.
pub fn transform_document(
    schema: &Schema,
    document: &ast::query::Document,
    config: &CodegenConfig,
) -> Result<Vec<Declaration>> {
    let mut declarations = vec![];
    if config.emit_global_types {
        declarations.extend(global_type_declarations(schema, config));
    }

    let synthesizer = SelectionSetSynthesizer::new(schema, config);
    for def in &document.definitions {
        match def {
            ast::query::Definition::Fragment(fragment) => log::trace!(
                "Skipping fragment definition `{}`.",
                fragment.name,
            ),

            ast::query::Definition::Operation(op) => declarations.extend(
                transform_operation(schema, &synthesizer, op, config)?,
            ),
        }
    }

    Ok(declarations)
}

fn transform_operation(
    schema: &Schema,
    synthesizer: &SelectionSetSynthesizer<'_>,
    op: &ast::query::OperationDefinition,
    config: &CodegenConfig,
) -> Result<Vec<Declaration>> {
    let parts = OperationParts::of(op);

    let Some(root_type) = schema.root_operation_type(parts.kind) else {
        return Err(TransformError::MissingRootType {
            operation_kind: parts.kind,
            operation_name: parts.name.map(str::to_string),
            position: parts.position,
        });
    };

    let Some(op_name) = parts.name else {
        return Err(TransformError::UnnamedOperation {
            operation_kind: parts.kind,
            position: parts.position,
        });
    };

    log::debug!(
        "Generating declarations for {} `{op_name}` (root type `{}`).",
        parts.kind,
        root_type.name(),
    );

    let result_name = format!("{op_name}$Result");
    let mut declarations = synthesizer.synthesize(
        parts.selection_set,
        result_name.as_str(),
        root_type,
    )?;

    if config.emit_runtime_documents {
        declarations.push(Declaration::Const(ConstDeclaration {
            multiline: config.multiline_operation_ast,
            name: op_name.to_string(),
            type_expr: TypeExpr::Reference {
                name: parts.kind.document_type_name().to_string(),
                type_args: vec![
                    TypeExpr::reference(result_name),
                    // Variables are not typed yet.
                    TypeExpr::EmptyRecord,
                ],
            },
            value: document_literal(op)?,
        }));
    }

    Ok(declarations)
}

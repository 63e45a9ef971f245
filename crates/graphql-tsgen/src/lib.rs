pub mod ast;
pub mod codegen;
pub mod document;
pub mod file_reader;
pub mod loc;
mod operation_kind;
pub mod render;
pub mod schema;
pub mod types;

pub use codegen::transform_document;
pub use codegen::CodegenConfig;
pub use operation_kind::OperationKind;
pub use schema::Schema;

#[cfg(test)]
mod test;

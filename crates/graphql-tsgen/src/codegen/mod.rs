mod config;
mod declaration;
mod document_literal;
mod global_types;
mod selection_set_synthesizer;
mod shape;
mod transform;
mod transform_error;

pub use config::CodegenConfig;
pub use config::EnumMode;
pub use declaration::CommentPlacement;
pub use declaration::ConstDeclaration;
pub use declaration::Declaration;
pub use declaration::Deprecation;
pub use declaration::DocComment;
pub use declaration::EnumDeclaration;
pub use declaration::EnumDeclarationMode;
pub use declaration::EnumMember;
pub use declaration::Literal;
pub use declaration::Primitive;
pub use declaration::Property;
pub use declaration::RecordDeclaration;
pub use declaration::ScalarAliasDeclaration;
pub use declaration::TypeExpr;
pub use shape::resolve_shape;
pub use shape::ShapeCategory;
pub use shape::ShapeDescriptor;
pub use transform::transform_document;
pub use transform_error::TransformError;

#[cfg(test)]
mod tests;

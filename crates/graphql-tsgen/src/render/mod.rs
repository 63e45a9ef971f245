mod typescript_printer;

pub use typescript_printer::DEFAULT_RUNTIME_MODULE;
pub use typescript_printer::TypeScriptPrinter;

use crate::codegen::Declaration;

/// Turns declarations into target-language source text.
pub trait Renderer {
    fn render_declaration(&self, declaration: &Declaration) -> String;

    /// Renders a whole generated file for the operation document named
    /// `source_name`.
    fn render_file(&self, source_name: &str, declarations: &[Declaration]) -> String;
}

/// Renders a whole TypeScript file with the default [`TypeScriptPrinter`].
pub fn render_file(source_name: &str, declarations: &[Declaration]) -> String {
    TypeScriptPrinter::default().render_file(source_name, declarations)
}

//! JavaScript AST builders for imports, declarations, literals and exports.
//!
//! These provide a high-level API for constructing JavaScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod consts;
mod exports;
mod fns;
mod imports;
mod objects;

pub use arrays::JsArray;
pub use consts::Const;
pub use exports::{DefaultObject, Export};
pub use fns::{Function, Method, guard};
pub use imports::Import;
pub use objects::{JsObject, KeyStyle, string_literal};

#[cfg(test)]
pub(crate) fn render(node: &impl ecat_codegen::builder::Renderable) -> String {
    let mut builder = ecat_codegen::builder::CodeBuilder::javascript();
    builder.emit(node);
    builder.build()
}

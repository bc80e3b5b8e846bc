//! CodeFile abstraction for structured JavaScript file generation.
//!
//! Provides a high-level API for generating JavaScript files with a header
//! comment, organized imports, body content, and exports sections.

use ecat_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a JavaScript file.
///
/// Sections are rendered in order (header, imports, body, exports) with a
/// blank line between non-empty sections and between body elements.
///
/// # Example
///
/// ```
/// use ecat_codegen_js::{CodeFile, RawCode, ast::{Export, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("./.config").named("moduleInfo"))
///     .add(RawCode::new("const info = moduleInfo;"))
///     .export(Export::new().default("info"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import { moduleInfo } from \"./.config\";\n\nconst info = moduleInfo;\n\nexport default info;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `//` comment lines at the top of the file.
    pub fn header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.header.is_empty() {
            sections.push(self.header.iter().map(CodeFragment::comment).collect());
        }
        if !self.imports.is_empty() {
            sections.push(self.imports.iter().flat_map(Renderable::to_fragments).collect());
        }
        sections.extend(self.body.iter().cloned());
        if !self.exports.is_empty() {
            sections.push(self.exports.iter().flat_map(Renderable::to_fragments).collect());
        }

        let mut builder = CodeBuilder::javascript();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                builder.apply_fragment(CodeFragment::Blank);
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

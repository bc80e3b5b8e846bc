//! JavaScript const declaration builder.

use ecat_codegen::builder::{CodeFragment, Renderable};

/// Builder for `const` declarations.
///
/// Multi-line values keep their own indentation; the terminating `;` is
/// appended to the last line.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: true,
        }
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or("");

        let mut out = vec![format!("{}const {} = {}", export, self.name, first)];
        out.extend(lines.map(String::from));
        if let Some(last) = out.last_mut() {
            last.push(';');
        }

        out.into_iter().map(CodeFragment::Line).collect()
    }
}

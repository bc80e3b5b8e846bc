//! Indentation-aware text buffer that renders code fragments.

use super::{CodeFragment, Indent, Renderable};

/// Collects emitted nodes into indented source text.
///
/// # Example
///
/// ```
/// use ecat_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::javascript();
/// builder.apply_fragment(CodeFragment::block(
///     "export default {",
///     vec![CodeFragment::line("install,")],
///     Some("};".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export default {\n  install,\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Builder for JavaScript output (2-space indentation).
    pub fn javascript() -> Self {
        Self {
            depth: 0,
            indent: Indent::JAVASCRIPT,
            buffer: String::new(),
        }
    }

    /// Append every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.push_line(&text),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Comment(text) => self.push_line(&format!("// {}", text)),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.depth = self.depth.saturating_sub(1);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

//! JavaScript function builders.

use ecat_codegen::builder::{CodeFragment, Renderable};

/// How a function is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    /// `function name() {}`
    Declaration,
    /// `export default function name() {}`
    ExportDefault,
    /// `export function name() {}`
    Export,
    /// `target = function name() {};`
    Assign(String),
}

/// Builder for JavaScript functions.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    params: Vec<String>,
    binding: Binding,
    body: Vec<CodeFragment>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            binding: Binding::Declaration,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn export(mut self) -> Self {
        self.binding = Binding::Export;
        self
    }

    pub fn export_default(mut self) -> Self {
        self.binding = Binding::ExportDefault;
        self
    }

    /// Assign the function expression to a property, e.g. `request.init`.
    pub fn assign_to(mut self, target: impl Into<String>) -> Self {
        self.binding = Binding::Assign(target.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add an arbitrary fragment to the function body.
    pub fn body(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let signature = format!("function {}({}) {{", self.name, self.params.join(", "));
        let (header, close) = match &self.binding {
            Binding::Declaration => (signature, "}"),
            Binding::Export => (format!("export {}", signature), "}"),
            Binding::ExportDefault => (format!("export default {}", signature), "}"),
            Binding::Assign(target) => (format!("{} = {}", target, signature), "};"),
        };

        vec![CodeFragment::block(
            header,
            self.body.clone(),
            Some(close.to_string()),
        )]
    }
}

/// A method in an object literal: `name(params) { ... },`.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    params: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{}({}) {{", self.name, self.params.join(", ")),
            self.body.clone(),
            Some("},".to_string()),
        )]
    }
}

/// An `if (condition) { ... }` statement.
pub fn guard(condition: &str, body: impl IntoIterator<Item = String>) -> CodeFragment {
    CodeFragment::block(
        format!("if ({}) {{", condition),
        body.into_iter().map(CodeFragment::Line).collect(),
        Some("}".to_string()),
    )
}

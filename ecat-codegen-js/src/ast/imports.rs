//! JavaScript import builder.

use ecat_codegen::builder::{CodeFragment, Renderable};

use super::objects::string_literal;

/// Builder for ES module import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        let from = string_literal(&self.from);

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from {};", def, from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from {};",
                def,
                self.named.join(", "),
                from
            ),
            (None, false) => format!("import {{ {} }} from {};", self.named.join(", "), from),
            (None, true) => format!("import {};", from),
        }
    }

}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

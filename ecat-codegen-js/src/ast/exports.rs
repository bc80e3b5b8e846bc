//! JavaScript export builders.

use ecat_codegen::builder::{CodeFragment, Renderable};

use super::fns::Method;

/// Builder for `export` statements that reference existing bindings.
#[derive(Debug, Clone, Default)]
pub struct Export {
    default: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.default
            .iter()
            .map(|def| CodeFragment::line(format!("export default {};", def)))
            .collect()
    }
}

/// `export default { ... };` with method members.
#[derive(Debug, Clone, Default)]
pub struct DefaultObject {
    methods: Vec<Method>,
}

impl DefaultObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl Renderable for DefaultObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.methods.iter().flat_map(Renderable::to_fragments).collect();
        vec![CodeFragment::block(
            "export default {",
            body,
            Some("};".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_export_default() {
        assert_eq!(
            render(&Export::new().default("request")),
            "export default request;\n"
        );
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert_eq!(render(&Export::new()), "");
    }

    #[test]
    fn test_default_object() {
        let obj = DefaultObject::new().method(Method::new("install").body_line("return 1;"));

        assert_eq!(
            render(&obj),
            "export default {\n  install() {\n    return 1;\n  },\n};\n"
        );
    }
}

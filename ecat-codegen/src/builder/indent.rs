//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 2-space indentation used by every generated JavaScript file.
    pub const JAVASCRIPT: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

//! Validation context and utilities for configuration parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the shared source for error reporting plus the current location
/// inside the document, e.g. `["sub_modules[1]"]`.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    path: Vec<String>,
}

impl ParseContext {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Current location as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe a value for error messages, e.g. "module in 'sub_modules[1]'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `"key": "value"` pair's value in the source.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that a module name can be used as a single directory name.
    pub fn validate_module_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_module_name(name) {
            return Err(self.source.invalid_module_name_error(
                name,
                self.context_for("module"),
                reason,
                self.find_span("module", name),
            ));
        }
        Ok(())
    }

    /// Validate that a required string field is not empty.
    pub fn require_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if !value.trim().is_empty() {
            return Ok(());
        }

        let message = format!("'{}' cannot be empty", key);
        match self.find_span(key, value) {
            Some(span) => Err(self.source.validation_error_at(message, span)),
            None => Err(self.source.validation_error(message)),
        }
    }
}

/// Check a module name. Returns `Some(reason)` when it is not usable.
pub(crate) fn validate_module_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("module name cannot be empty");
    }

    if name == "." || name == ".." {
        return Some("module name cannot be a relative directory reference");
    }

    if name.contains('/') || name.contains('\\') {
        return Some("module name must be a single path segment");
    }

    None
}

/// Find the span of the string value in a `"key": "value"` pair.
///
/// Only exact matches are reported; whitespace around the colon is allowed.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let quoted_key = format!("\"{}\"", key);
    let quoted_value = serde_json::Value::String(value.to_string()).to_string();

    for (pos, _) in src.match_indices(&quoted_key) {
        let rest = src[pos + quoted_key.len()..].trim_start();
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        let rest = rest.trim_start();
        if rest.starts_with(&quoted_value) {
            // +1 to skip the opening quote
            let start = src.len() - rest.len() + 1;
            return Some(SourceSpan::from((start, quoted_value.len() - 2)));
        }
    }

    None
}

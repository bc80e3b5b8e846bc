//! Lint trait for document validation.

use ecat_manifest::{ModuleConfig, Variant};

use crate::pipeline::Diagnostic;

/// A check over the whole configuration document.
pub trait Lint: Send + Sync {
    /// The name of this lint (e.g. "duplicate-mtype").
    fn name(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, config: &ModuleConfig, variant: Variant, diagnostics: &mut Vec<Diagnostic>);
}

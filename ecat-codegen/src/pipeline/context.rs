//! Compilation context passed through pipeline phases.

use ecat_manifest::{ModuleConfig, Variant};

use super::diagnostic::Diagnostic;

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The configuration document being checked.
    pub config: ModuleConfig,
    /// The route shape selected for this run.
    pub variant: Variant,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(config: ModuleConfig, variant: Variant) -> Self {
        Self {
            config,
            variant,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }
}

//! Pipeline orchestrator.

use ecat_manifest::{ModuleConfig, Variant};
use eyre::Result;

use super::{CompilationContext, Phase, phases::ValidatePhase};

/// Runs the checking phases over a document, in order.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            phases: vec![Box::new(ValidatePhase::new())],
        }
    }

    /// Run every phase over the document.
    ///
    /// # Errors
    ///
    /// Returns an error when a phase finds an error-severity problem.
    pub fn run(&self, config: ModuleConfig, variant: Variant) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(config, variant);

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the pipeline.
///
/// Phases run in order and may add diagnostics to the context. A phase
/// returns an error only when the run cannot continue.
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run this phase on the compilation context.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

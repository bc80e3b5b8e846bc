//! Lint for modules without routes.

use ecat_manifest::{ModuleConfig, Variant};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about modules that declare no routes.
pub struct EmptyRoutesLint;

impl Lint for EmptyRoutesLint {
    fn name(&self) -> &'static str {
        "empty-routes"
    }

    fn check(&self, config: &ModuleConfig, _variant: Variant, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &config.sub_modules {
            if entry.module_routes.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("module '{}' has no routes", entry.module),
                    )
                    .at(format!("sub_modules.{}.module_routes", entry.module)),
                );
            }
        }
    }
}

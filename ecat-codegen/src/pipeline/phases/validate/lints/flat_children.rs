//! Lint for children declared under the flat variant.

use ecat_manifest::{ModuleConfig, Variant};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when routes declare children but the flat variant is
/// selected. The flat shape has one level of routes, so children are
/// ignored.
pub struct FlatChildrenLint;

impl Lint for FlatChildrenLint {
    fn name(&self) -> &'static str {
        "flat-children"
    }

    fn check(&self, config: &ModuleConfig, variant: Variant, diagnostics: &mut Vec<Diagnostic>) {
        if variant.supports_children() {
            return;
        }

        for entry in &config.sub_modules {
            for route in entry.module_routes.iter().filter(|r| r.has_children()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "route '{}' in module '{}' has children, which the flat variant ignores",
                            route.name, entry.module
                        ),
                    )
                    .at(format!("sub_modules.{}.{}", entry.module, route.name)),
                );
            }
        }
    }
}

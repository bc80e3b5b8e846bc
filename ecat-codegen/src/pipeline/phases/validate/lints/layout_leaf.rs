//! Lint for layout nodes that group nothing.

use ecat_manifest::{ModuleConfig, Variant};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about `Layout` routes without children.
///
/// A layout node has no component of its own, so as a leaf it renders an
/// empty page.
pub struct LayoutLeafLint;

impl Lint for LayoutLeafLint {
    fn name(&self) -> &'static str {
        "layout-leaf"
    }

    fn check(&self, config: &ModuleConfig, _variant: Variant, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &config.sub_modules {
            for route in entry.walk() {
                if route.is_layout() && !route.has_children() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "route '{}' in module '{}' uses Layout but has no children",
                                route.name, entry.module
                            ),
                        )
                        .at(format!("sub_modules.{}.{}", entry.module, route.name)),
                    );
                }
            }
        }
    }
}

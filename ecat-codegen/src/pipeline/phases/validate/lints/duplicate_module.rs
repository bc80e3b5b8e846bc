//! Lint for modules that write into the same directory.

use std::collections::HashSet;

use ecat_manifest::{ModuleConfig, Variant};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a module directory is declared twice.
///
/// The later entry's files replace the earlier entry's output.
pub struct DuplicateModuleLint;

impl Lint for DuplicateModuleLint {
    fn name(&self) -> &'static str {
        "duplicate-module"
    }

    fn check(&self, config: &ModuleConfig, _variant: Variant, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for entry in &config.sub_modules {
            if !seen.insert(entry.module.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "module '{}' is declared more than once; its files will be overwritten",
                            entry.module
                        ),
                    )
                    .at(format!("sub_modules.{}", entry.module)),
                );
            }
        }
    }
}

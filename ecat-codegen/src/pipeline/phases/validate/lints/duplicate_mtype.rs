//! Lint for duplicate `mtype` discriminators.

use std::collections::HashMap;

use ecat_manifest::{ModuleConfig, Variant};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two modules share an `mtype`.
///
/// Runs over the whole document before any module is generated, so a
/// duplicate stops the run with nothing written.
pub struct DuplicateMtypeLint;

impl Lint for DuplicateMtypeLint {
    fn name(&self) -> &'static str {
        "duplicate-mtype"
    }

    fn check(&self, config: &ModuleConfig, _variant: Variant, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for entry in &config.sub_modules {
            if let Some(first) = seen.get(entry.mtype.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate mtype '{}' in module '{}' (already used by module '{}')",
                            entry.mtype, entry.module, first
                        ),
                    )
                    .at(format!("sub_modules.{}.mtype", entry.module)),
                );
            } else {
                seen.insert(&entry.mtype, &entry.module);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::parse_config;

    #[test]
    fn test_no_duplicates() {
        let config = parse_config(
            r#"{
                "module_path": "/system/",
                "module_name": "sys",
                "sub_modules": [
                    { "module": "a", "mtype": "a", "module_routes": [] },
                    { "module": "b", "mtype": "b", "module_routes": [] }
                ]
            }"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateMtypeLint.check(&config, Variant::Nested, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_names_mtype_and_modules() {
        let config = parse_config(
            r#"{
                "module_path": "/system/",
                "module_name": "sys",
                "sub_modules": [
                    { "module": "orders", "mtype": "biz", "module_routes": [] },
                    { "module": "users", "mtype": "user", "module_routes": [] },
                    { "module": "billing", "mtype": "biz", "module_routes": [] }
                ]
            }"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateMtypeLint.check(&config, Variant::Nested, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].message,
            "duplicate mtype 'biz' in module 'billing' (already used by module 'orders')"
        );
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("sub_modules.billing.mtype")
        );
    }

    #[test]
    fn test_every_repeat_is_reported() {
        let config = parse_config(
            r#"{
                "module_path": "/",
                "module_name": "sys",
                "sub_modules": [
                    { "module": "a", "mtype": "x", "module_routes": [] },
                    { "module": "b", "mtype": "x", "module_routes": [] },
                    { "module": "c", "mtype": "x", "module_routes": [] }
                ]
            }"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateMtypeLint.check(&config, Variant::Flat, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
    }
}

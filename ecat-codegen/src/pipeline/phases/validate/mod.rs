//! Validate phase - runs lints on the configuration document.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    DuplicateModuleLint, DuplicateMtypeLint, EmptyRoutesLint, FlatChildrenLint, LayoutLeafLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the document using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateMtypeLint),
                Box::new(DuplicateModuleLint),
                Box::new(EmptyRoutesLint),
                Box::new(LayoutLeafLint),
                Box::new(FlatChildrenLint),
            ],
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "checking");
            lint.check(&ctx.config, ctx.variant, &mut ctx.diagnostics);
        }

        // Warnings are allowed; any error stops the run before output is written
        if ctx.has_errors() {
            let messages: Vec<&str> = ctx.errors().map(|d| d.message.as_str()).collect();
            bail!(
                "validation failed with {} error(s): {}",
                messages.len(),
                messages.join("; ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ecat_manifest::{ModuleConfig, Variant};

    use super::*;

    fn parse_config(content: &str) -> ModuleConfig {
        ModuleConfig::from_str(content).expect("Failed to parse test config")
    }

    #[test]
    fn test_errors_stop_the_run() {
        let config = parse_config(
            r#"{
                "module_path": "/system/",
                "module_name": "sys",
                "sub_modules": [
                    { "module": "a", "mtype": "shared", "module_routes": [] },
                    { "module": "b", "mtype": "shared", "module_routes": [] }
                ]
            }"#,
        );
        let mut ctx = CompilationContext::new(config, Variant::Nested);

        let err = ValidatePhase::new().run(&mut ctx).unwrap_err();

        assert!(
            err.to_string()
                .starts_with("validation failed with 1 error(s): ")
        );
        assert!(err.to_string().contains("'shared'"));
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let config = parse_config(
            r#"{
                "module_path": "/system/",
                "module_name": "sys",
                "sub_modules": [{ "module": "demo", "mtype": "demo", "module_routes": [] }]
            }"#,
        );
        let mut ctx = CompilationContext::new(config, Variant::Nested);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert_eq!(ctx.warnings().count(), 1);
        assert!(!ctx.has_errors());
    }
}

//! Generate command report data structures.

use std::path::{Path, PathBuf};

use ecat_codegen_js::{GenerateResult, ModuleOutcome, ModuleStatus};
use ecat_core::{PreviewFile, WriteResult};
use ecat_manifest::Variant;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub base_path: PathBuf,
    pub variant: Variant,
    /// Warning messages from the validation pipeline.
    pub warnings: Vec<String>,
    /// Per-module outcomes.
    pub result: GenerateResult,
    pub build_config: Option<BuildConfigResult>,
}

/// The merged webpack configuration, when requested.
#[derive(Debug)]
pub enum BuildConfigResult {
    Written(WriteResult),
    Preview(PreviewFile),
}

impl GenerateReport {
    pub fn failed_count(&self) -> usize {
        self.result.failed().count()
    }

    /// Path relative to the base path, for display.
    fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.base_path).unwrap_or(path).display()
    }

    fn render_module(&self, out: &mut dyn Output, module: &ModuleOutcome) {
        match &module.status {
            ModuleStatus::Written(files) => {
                out.added_item(&module.module);
                for file in files.iter().filter(|f| !f.is_written()) {
                    out.list_item(&format!("{} (kept)", self.display_path(file.path())));
                }
            }
            ModuleStatus::Preview(files) => {
                for file in files {
                    self.render_preview(out, file);
                }
            }
            ModuleStatus::Failed(error) => {
                out.failed_item(&format!("{}: {:#}", module.module, error));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, file: &PreviewFile) {
        out.divider(&self.display_path(&file.path).to_string());
        out.preformatted(&file.content);
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Variant", self.variant.as_str());
        for module in &self.result.modules {
            self.render_module(out, module);
        }

        match &self.build_config {
            Some(BuildConfigResult::Written(written)) => {
                out.key_value("Build config", &written.path().display().to_string());
            }
            Some(BuildConfigResult::Preview(file)) => self.render_preview(out, file),
            None => {}
        }

        out.newline();
        let total = self.result.modules.len();
        let failed = self.failed_count();
        let previewed = self
            .result
            .modules
            .iter()
            .any(|m| matches!(m.status, ModuleStatus::Preview(_)));

        if previewed {
            out.divider("Summary");
            out.preformatted(&format!("{} module(s) would be generated", total - failed));
        } else {
            out.key_value(
                "Generated",
                &format!(
                    "{} of {} module(s) in {}",
                    total - failed,
                    total,
                    self.base_path.display()
                ),
            );
        }
        if failed > 0 {
            out.failed_item(&format!("{} module(s) failed", failed));
        }
    }
}

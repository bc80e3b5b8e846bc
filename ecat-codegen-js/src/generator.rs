//! Generation driver: writes every module's files below the base path.

use std::path::{Path, PathBuf};

use ecat_codegen::pipeline::CompilationContext;
use ecat_core::{GeneratedFile, PreviewFile, WriteResult, write_all};
use ecat_manifest::{ModuleConfig, ModuleEntry, Variant};
use eyre::Result;

use crate::{
    error::AssembleError,
    files::{ApiJs, ConfigJs, IndexJs, RequestJs},
    routes::{RouteRenderer, renderer_for},
};

/// What happened to one module.
#[derive(Debug)]
pub enum ModuleStatus {
    /// Files were written (or skipped because the module owns them).
    Written(Vec<WriteResult>),
    /// Files were rendered but not written.
    Preview(Vec<PreviewFile>),
    Failed(eyre::Report),
}

/// Outcome of one module, in declaration order.
#[derive(Debug)]
pub struct ModuleOutcome {
    pub module: String,
    pub dir: PathBuf,
    pub status: ModuleStatus,
}

impl ModuleOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, ModuleStatus::Failed(_))
    }
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub modules: Vec<ModuleOutcome>,
}

impl GenerateResult {
    pub fn failed(&self) -> impl Iterator<Item = &ModuleOutcome> {
        self.modules.iter().filter(|m| m.is_failed())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Generates the files of every module of a validated document.
///
/// Modules are processed one at a time in declaration order. A module that
/// cannot be assembled or written is reported and the run continues.
pub struct Generator<'a> {
    config: &'a ModuleConfig,
    renderer: Box<dyn RouteRenderer>,
}

impl<'a> Generator<'a> {
    /// Create a generator for a document that passed the validation pipeline.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        Self {
            config: &ctx.config,
            renderer: renderer_for(ctx.variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.renderer.variant()
    }

    /// Output directory of a module.
    pub fn module_dir(base: &Path, entry: &ModuleEntry) -> PathBuf {
        base.join(&entry.module)
    }

    /// Files of one module, assembled but not yet written.
    pub fn module_files(
        &self,
        entry: &ModuleEntry,
    ) -> Result<Vec<Box<dyn GeneratedFile>>, AssembleError> {
        let config_js = ConfigJs::assemble(self.config, entry, self.renderer.as_ref())?;
        let variant = self.variant();

        let mut files: Vec<Box<dyn GeneratedFile>> =
            vec![Box::new(config_js), Box::new(IndexJs::new(variant))];
        match variant {
            Variant::Nested => files.push(Box::new(RequestJs)),
            Variant::Flat => files.push(Box::new(ApiJs)),
        }
        Ok(files)
    }

    /// Write every module below `base`.
    ///
    /// A module's files are written as one unit: a failed module leaves no
    /// partial output behind.
    pub fn generate(&self, base: &Path) -> GenerateResult {
        self.run(base, |files, dir| {
            Ok(ModuleStatus::Written(write_all(files, dir)?))
        })
    }

    /// Render every module without touching the disk.
    pub fn preview(&self, base: &Path) -> GenerateResult {
        self.run(base, |files, dir| {
            Ok(ModuleStatus::Preview(
                files.iter().map(|file| file.preview(dir)).collect(),
            ))
        })
    }

    fn run<F>(&self, base: &Path, mut emit: F) -> GenerateResult
    where
        F: FnMut(&[Box<dyn GeneratedFile>], &Path) -> Result<ModuleStatus>,
    {
        let mut result = GenerateResult::default();

        for entry in &self.config.sub_modules {
            let dir = Self::module_dir(base, entry);
            let status = match self
                .module_files(entry)
                .map_err(eyre::Report::from)
                .and_then(|files| emit(&files, &dir))
            {
                Ok(status) => {
                    tracing::info!(module = %entry.module, path = %dir.display(), "module generated");
                    status
                }
                Err(error) => {
                    tracing::error!(module = %entry.module, error = %format!("{error:#}"), "module failed");
                    ModuleStatus::Failed(error)
                }
            };

            result.modules.push(ModuleOutcome {
                module: entry.module.clone(),
                dir,
                status,
            });
        }

        result
    }
}

//! Generate operation - module files from the configuration document.

use std::path::Path;

use ecat_codegen::pipeline::Pipeline;
use ecat_codegen_js::{Generator, files::BuildConfig};
use ecat_core::GeneratedFile;
use ecat_manifest::{ModuleConfig, Variant};
use eyre::{Context, Result};

use crate::reports::{BuildConfigResult, GenerateReport};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory holding the configuration; modules are written below it.
    pub base_path: &'a Path,
    /// Overrides the variant declared by the document.
    pub variant: Option<Variant>,
    pub dry_run: bool,
    /// Whether to produce the merged webpack configuration.
    pub build_config: bool,
    pub user_config: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Validation runs over the whole document first; any error aborts before
/// a single file is written. Module failures after that are collected in
/// the report.
pub fn generate(config: &ModuleConfig, opts: GenerateOptions) -> Result<GenerateReport> {
    let variant = opts.variant.unwrap_or_else(|| config.variant());

    let ctx = Pipeline::new()
        .run(config.clone(), variant)
        .wrap_err("Validation failed")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.message.clone()).collect();

    let generator = Generator::from_context(&ctx);
    let result = if opts.dry_run {
        generator.preview(opts.base_path)
    } else {
        generator.generate(opts.base_path)
    };

    let build_config = if opts.build_config {
        Some(build_config(&ctx.config, &opts)?)
    } else {
        None
    };

    Ok(GenerateReport {
        base_path: opts.base_path.to_path_buf(),
        variant,
        warnings,
        result,
        build_config,
    })
}

fn build_config(config: &ModuleConfig, opts: &GenerateOptions) -> Result<BuildConfigResult> {
    let mut build = BuildConfig::new(opts.base_path, config);
    if let Some(path) = opts.user_config {
        build = build.with_user_config(BuildConfig::load_user_config(path)?);
    }

    if opts.dry_run {
        return Ok(BuildConfigResult::Preview(build.preview(opts.base_path)));
    }

    let written = build
        .write(opts.base_path)
        .wrap_err("Failed to write build configuration")?;
    tracing::info!(path = %written.path().display(), "build configuration written");
    Ok(BuildConfigResult::Written(written))
}

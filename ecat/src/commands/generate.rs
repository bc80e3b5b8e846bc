use std::path::PathBuf;

use clap::Args;
use ecat_manifest::{ConfigFile, Variant};
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory holding module-config.json; modules are generated below it
    pub base_path: PathBuf,

    /// Route shape to generate (overrides module-config.json)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Print the generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the merged webpack configuration
    #[arg(long)]
    pub build_config: bool,

    /// JSON file merged into the webpack configuration
    #[arg(long, value_name = "FILE", requires = "build_config")]
    pub user_config: Option<PathBuf>,

    /// Exit with an error when any module fails
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::discover(&self.base_path).unwrap_or_exit();
        tracing::debug!(path = %config_file.path().display(), "loaded configuration");

        let report = generate(
            config_file.config(),
            GenerateOptions {
                base_path: &self.base_path,
                variant: self.variant,
                dry_run: self.dry_run,
                build_config: self.build_config,
                user_config: self.user_config.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        self.check_failures(&report)
    }

    /// Module failures are reported either way; `--strict` also fails the run.
    fn check_failures(&self, report: &GenerateReport) -> Result<()> {
        if self.strict && report.result.has_failures() {
            bail!("{} module(s) failed to generate", report.failed_count());
        }
        Ok(())
    }
}

mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ecat_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ecat")]
#[command(version)]
#[command(about = "Generate module route files from module-config.json")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long, env = "ECAT_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_base_path_is_required() {
        let err = Cli::try_parse_from(["ecat"]).err().unwrap();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_variant_flag() {
        let cli = Cli::try_parse_from(["ecat", "app", "--variant", "vue2", "--dry-run"]).unwrap();
        assert_eq!(cli.generate.variant, Some(ecat_manifest::Variant::Flat));
        assert!(cli.generate.dry_run);
    }

    #[test]
    fn test_unknown_variant() {
        assert!(Cli::try_parse_from(["ecat", "app", "--variant", "react"]).is_err());
    }

    #[test]
    fn test_user_config_requires_build_config() {
        assert!(Cli::try_parse_from(["ecat", "app", "--user-config", "w.json"]).is_err());
        assert!(
            Cli::try_parse_from(["ecat", "app", "--build-config", "--user-config", "w.json"])
                .is_ok()
        );
    }
}

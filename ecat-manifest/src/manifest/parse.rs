//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{CONFIG_FILE_NAME, ModuleConfig, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for ModuleConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl ModuleConfig {
    /// Parse a module-config.json file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration document with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<ModuleConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let config: ModuleConfig =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, content, filename)?;
    Ok(config)
}

/// Document-level checks that make generation impossible.
///
/// Cross-module findings such as duplicate `mtype` values are reported by
/// the codegen validation pipeline instead.
fn validate_config(config: &ModuleConfig, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.require_non_empty("module_name", &config.module_name)?;

    for (index, entry) in config.sub_modules.iter().enumerate() {
        let entry_ctx = ctx.push(format!("sub_modules[{}]", index));
        entry_ctx.validate_module_name(&entry.module)?;
    }
    Ok(())
}

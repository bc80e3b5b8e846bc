use std::path::{Path, PathBuf};

use super::{CONFIG_FILE_NAME, ModuleConfig};
use crate::Result;

/// A parsed module-config.json file and where it was read from.
pub struct ConfigFile {
    path: PathBuf,
    config: ModuleConfig,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = ModuleConfig::from_file(&path)?;
        Ok(Self { path, config })
    }

    /// Open `module-config.json` inside the base directory.
    pub fn discover(base: impl AsRef<Path>) -> Result<Self> {
        Self::open(base.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed document.
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }
}

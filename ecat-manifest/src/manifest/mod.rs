//! Manifest types and parsing for module-config.json files.

mod file;
mod parse;
mod route;
mod validate;
mod variant;

pub use file::ConfigFile;
pub use parse::parse_config;
pub use route::{LAYOUT, NO_REDIRECT, RouteNode};
use serde::Deserialize;
pub use validate::ParseContext;
pub use variant::Variant;

/// File name of the configuration document inside the base path.
pub const CONFIG_FILE_NAME: &str = "module-config.json";

/// Root of module-config.json.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Base mount path shared by every module; a trailing `/` is optional.
    pub module_path: String,

    /// Prefix for every generated route name (`<module_name>_<route>`).
    pub module_name: String,

    /// Public path handed to the build configuration.
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Route shape to generate. The CLI flag takes precedence.
    #[serde(default)]
    pub variant: Option<Variant>,

    /// Sub-modules in declaration order.
    pub sub_modules: Vec<ModuleEntry>,
}

fn default_public_path() -> String {
    "/".to_string()
}

impl ModuleConfig {
    /// The variant declared by the document, or the default.
    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    /// Look up a module entry by its directory name.
    pub fn module(&self, name: &str) -> Option<&ModuleEntry> {
        self.sub_modules.iter().find(|m| m.module == name)
    }

    /// `module_path` without trailing separators.
    pub fn normalized_module_path(&self) -> &str {
        self.module_path.trim_end_matches('/')
    }

    /// Mount path of a module: `<module_path>/<module>`.
    pub fn mount_path(&self, entry: &ModuleEntry) -> String {
        format!("{}/{}", self.normalized_module_path(), entry.module)
    }
}

/// One sub-module: its directory, discriminator and route tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleEntry {
    /// Directory and mount name.
    pub module: String,

    /// Discriminator; unique across the document.
    pub mtype: String,

    /// Top-level routes in declaration order.
    #[serde(default)]
    pub module_routes: Vec<RouteNode>,
}

impl ModuleEntry {
    /// Visit every route of the tree in pre-order.
    pub fn walk(&self) -> impl Iterator<Item = &RouteNode> {
        self.module_routes.iter().flat_map(RouteNode::walk)
    }
}

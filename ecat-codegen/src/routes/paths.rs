use ecat_manifest::{ModuleConfig, ModuleEntry, Variant};

/// Path composition for the routes of one module.
#[derive(Debug, Clone)]
pub struct RoutePaths {
    base: String,
    variant: Variant,
}

impl RoutePaths {
    pub fn new(config: &ModuleConfig, entry: &ModuleEntry, variant: Variant) -> Self {
        Self {
            base: config.mount_path(entry),
            variant,
        }
    }

    /// The module's mount path, `<module_path>/<module>`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Path of a route at the given depth (0 for top-level routes).
    ///
    /// Top-level routes are mounted below the module path. Nested routes
    /// keep their relative path; the flat variant has no nesting.
    pub fn route_path(&self, path: &str, depth: usize) -> String {
        match self.variant {
            Variant::Nested if depth > 0 => path.to_string(),
            _ => format!("{}/{}", self.base, path),
        }
    }
}

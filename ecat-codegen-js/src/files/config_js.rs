//! `.config.js`: a module's route table and metadata.

use std::path::{Path, PathBuf};

use ecat_codegen::routes::{ComponentRef, RoutePaths, duplicate_bindings};
use ecat_core::GeneratedFile;
use ecat_manifest::{ModuleConfig, ModuleEntry};

use super::GENERATED_HEADER;
use crate::{
    ast::{Const, Import, JsArray, JsObject, string_literal},
    code_file::CodeFile,
    error::AssembleError,
    naming::{binding_error, import_specifier},
    routes::RouteRenderer,
};

/// The assembled route-definition file of one module.
#[derive(Debug, Clone)]
pub struct ConfigJs {
    module: String,
    mtype: String,
    mount_path: String,
    components: Vec<ComponentRef>,
    routes: JsArray,
}

impl ConfigJs {
    /// Collect imports and render the route array of one module.
    ///
    /// Fails when two imported routes share a name or a name is not a usable
    /// JavaScript binding. `mtype` uniqueness is checked before assembly by
    /// the validation pipeline.
    pub fn assemble(
        config: &ModuleConfig,
        entry: &ModuleEntry,
        renderer: &dyn RouteRenderer,
    ) -> Result<Self, AssembleError> {
        let components = renderer.components(&entry.module_routes);
        check_bindings(&entry.module, &components)?;

        let paths = RoutePaths::new(config, entry, renderer.variant());
        let routes = renderer.render(&entry.module_routes, &paths, &config.module_name);

        Ok(Self {
            module: entry.module.clone(),
            mtype: entry.mtype.clone(),
            mount_path: paths.base().to_string(),
            components,
            routes,
        })
    }

    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    fn module_info(&self) -> JsObject {
        JsObject::quoted()
            .string("name", &self.module)
            .string("path", &self.mount_path)
            .raw("mtype", "mtype")
            .raw("routes", "routes")
    }
}

fn check_bindings(module: &str, components: &[ComponentRef]) -> Result<(), AssembleError> {
    if let Some((component, reason)) = components
        .iter()
        .find_map(|c| binding_error(&c.name).map(|reason| (c, reason)))
    {
        return Err(AssembleError::InvalidBinding {
            module: module.to_string(),
            name: component.name.clone(),
            reason,
        });
    }

    let duplicates = duplicate_bindings(components);
    if !duplicates.is_empty() {
        return Err(AssembleError::DuplicateBinding {
            module: module.to_string(),
            names: duplicates.into_iter().map(String::from).collect(),
        });
    }

    Ok(())
}

impl GeneratedFile for ConfigJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".config.js")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header([GENERATED_HEADER])
            .imports(
                self.components
                    .iter()
                    .map(|c| Import::new(import_specifier(&c.path)).default(&c.name)),
            )
            .add(Const::new("mtype", string_literal(&self.mtype)))
            .add(Const::new("routes", self.routes.build()))
            .add(Const::new("moduleInfo", self.module_info().build()))
            .render()
    }
}

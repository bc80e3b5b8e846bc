//! `.index.js`: the entry point the host framework installs.

use std::path::{Path, PathBuf};

use ecat_core::GeneratedFile;
use ecat_manifest::Variant;

use super::GENERATED_HEADER;
use crate::{
    ast::{DefaultObject, Import, Method},
    code_file::CodeFile,
};

/// Module entry point. Registers the request client and hands the module
/// metadata back to the host.
#[derive(Debug, Clone, Copy)]
pub struct IndexJs {
    variant: Variant,
}

impl IndexJs {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    fn install(&self) -> Method {
        let method = Method::new("install").params(["Vue", "VueRouter", "utils", "options"]);
        let method = match self.variant {
            Variant::Nested => method.body_line("request.init(utils.request);"),
            Variant::Flat => method
                .body_line("VueRouter.addRoutes(routes);")
                .body_line("initRequest(utils.request);"),
        };
        method.body_line("return moduleInfo;")
    }
}

impl GeneratedFile for IndexJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".index.js")
    }

    fn render(&self) -> String {
        let file = CodeFile::new().header([GENERATED_HEADER]);
        let file = match self.variant {
            Variant::Nested => file
                .import(Import::new("./.config").named("moduleInfo"))
                .import(Import::new("@/utils/request").default("request")),
            Variant::Flat => file
                .import(Import::new("./.config").named("routes").named("moduleInfo"))
                .import(Import::new("./api.js").default("initRequest")),
        };

        file.add(DefaultObject::new().method(self.install())).render()
    }
}

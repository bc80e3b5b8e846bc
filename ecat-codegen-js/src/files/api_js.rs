//! `api.js`: request setup stub of a flat-variant module.

use std::path::{Path, PathBuf};

use ecat_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Function, string_literal},
    code_file::{CodeFile, RawCode},
};

/// Stub created on the first run. The module owns it afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJs;

impl GeneratedFile for ApiJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("api.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let init = Function::new("initRequest")
            .param("providedRequest")
            .export_default()
            .body_line("request = providedRequest;");

        let get = Function::new("getRequest")
            .export()
            .body_line(format!(
                "if (request === null) throw new Error({});",
                string_literal("initRequest() has not been called")
            ))
            .body_line("return request;");

        CodeFile::new()
            .header(["Request setup for this module. Created once by ecat; edit freely."])
            .add(RawCode::new("let request = null;"))
            .add(init)
            .add(get)
            .render()
    }
}

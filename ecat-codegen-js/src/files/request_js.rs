//! `utils/request.js`: the request shim of a nested-variant module.

use std::path::{Path, PathBuf};

use ecat_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{
    ast::{Const, Export, Function, JsObject, guard, string_literal},
    code_file::CodeFile,
    shim::ShimError,
};

const UNSET: &str = "state.request === null";

fn throw(error: ShimError) -> String {
    format!("throw new Error({});", string_literal(&error.to_string()))
}

/// A callable that forwards to the host's request function once `init`
/// has installed it. See [`RequestShim`](crate::RequestShim).
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestJs;

impl GeneratedFile for RequestJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("request.js")
    }

    fn render(&self) -> String {
        let state = Const::new("state", JsObject::new().raw("request", "null").build()).private();

        let request = Function::new("request")
            .param("...args")
            .body(guard(UNSET, [throw(ShimError::NotInitialized)]))
            .body_line("return state.request(...args);");

        let init = Function::new("init")
            .param("providedRequest")
            .assign_to("request.init")
            .body(guard(
                "state.request !== null",
                [throw(ShimError::AlreadyInitialized)],
            ))
            .body(guard(
                "typeof providedRequest !== \"function\"",
                [throw(ShimError::NotCallable)],
            ))
            .body_line("state.request = providedRequest;");

        let get = Function::new("get")
            .assign_to("request.get")
            .body(guard(UNSET, [throw(ShimError::NotInitialized)]))
            .body_line("return state.request;");

        CodeFile::new()
            .header([GENERATED_HEADER])
            .add(state)
            .add(request)
            .add(init)
            .add(get)
            .export(Export::new().default("request"))
            .render()
    }
}

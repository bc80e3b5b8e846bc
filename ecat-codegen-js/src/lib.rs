//! JavaScript code generation for ecat modules.
//!
//! Turns a validated `module-config.json` into the files a module-federation
//! host loads for each sub-module:
//!
//! - `.config.js` - route table, discriminator and module metadata
//! - `.index.js` - entry point installed by the host
//! - `utils/request.js` (nested) or `api.js` (flat) - request client setup
//!
//! plus an optional merged webpack configuration.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use ecat_codegen::pipeline::Pipeline;
//! use ecat_codegen_js::Generator;
//! use ecat_manifest::ModuleConfig;
//!
//! let config = ModuleConfig::from_file("app/module-config.json")?;
//! let variant = config.variant();
//! let ctx = Pipeline::new().run(config, variant)?;
//!
//! let result = Generator::from_context(&ctx).generate(Path::new("app"));
//! assert!(!result.has_failures());
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod ast;
mod code_file;
mod error;
pub mod files;
mod generator;
mod naming;
pub mod routes;
mod shim;

pub use code_file::{CodeFile, RawCode};
pub use error::AssembleError;
pub use generator::{GenerateResult, Generator, ModuleOutcome, ModuleStatus};
pub use naming::{binding_error, import_specifier, is_reserved};
pub use shim::{RequestShim, ShimError};

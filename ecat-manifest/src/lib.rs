// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration document model for the ecat module generator.
//!
//! A `module-config.json` file describes a set of sub-modules, each with a
//! route tree. This crate parses the document, checks the parts that decide
//! where output is written, and reports problems as [`miette`] diagnostics.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CONFIG_FILE_NAME, ConfigFile, LAYOUT, ModuleConfig, ModuleEntry, NO_REDIRECT, ParseContext,
    RouteNode, Variant, parse_config,
};

//! Language-agnostic building blocks for the ecat module generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Validation pipeline and lints that run before generation
//! - [`routes`] - Route-tree traversal: component collection and path composition
//! - [`merge`] - Layered JSON merging for the build configuration

pub mod builder;
pub mod merge;
pub mod pipeline;
pub mod routes;

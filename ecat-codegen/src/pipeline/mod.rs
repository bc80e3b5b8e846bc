//! Validation pipeline that runs before any file is generated.
//!
//! The [`Pipeline`] runs its phases in order over a [`CompilationContext`]
//! and collects [`Diagnostic`]s. An error-severity diagnostic aborts the
//! run, so generation only starts on a document that passed every check.
//!
//! # Example
//!
//! ```ignore
//! use ecat_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(config, Variant::Nested)?;
//!
//! for warning in ctx.warnings() {
//!     eprintln!("{}", warning);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;

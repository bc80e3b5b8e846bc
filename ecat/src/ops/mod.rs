//! Core operations.
//!
//! Business logic for ecat, separated from CLI argument parsing and output
//! rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};

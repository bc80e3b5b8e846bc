//! Route-tree traversal shared by every output shape.
//!
//! - [`collect_components`] - Component Reference Collector (pre-order, Layout skipped)
//! - [`RoutePaths`] - path composition for a module's routes
//! - [`duplicate_bindings`] - import names that would be bound twice

mod bindings;
mod collect;
mod paths;

pub use bindings::duplicate_bindings;
pub use collect::{ComponentRef, collect_components, collect_top_level};
pub use paths::RoutePaths;

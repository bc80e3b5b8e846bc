//! Built-in lints for document validation.

mod duplicate_module;
mod duplicate_mtype;
mod empty_routes;
mod flat_children;
mod layout_leaf;

pub use duplicate_module::DuplicateModuleLint;
pub use duplicate_mtype::DuplicateMtypeLint;
pub use empty_routes::EmptyRoutesLint;
pub use flat_children::FlatChildrenLint;
pub use layout_leaf::LayoutLeafLint;

#[cfg(test)]
pub(crate) fn parse_config(content: &str) -> ecat_manifest::ModuleConfig {
    use std::str::FromStr;

    ecat_manifest::ModuleConfig::from_str(content).expect("Failed to parse test config")
}

//! Built-in pipeline phases.

mod validate;

pub use validate::{
    DuplicateModuleLint, DuplicateMtypeLint, EmptyRoutesLint, FlatChildrenLint, LayoutLeafLint,
    Lint, ValidatePhase,
};

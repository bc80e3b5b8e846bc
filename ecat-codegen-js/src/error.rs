use thiserror::Error;

/// A module whose route file cannot be assembled.
///
/// These are local to one module: the driver reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("module '{module}' binds {} more than once: {}", plural(.names.len()), .names.join(", "))]
    DuplicateBinding { module: String, names: Vec<String> },

    #[error("route '{name}' in module '{module}' is not a valid import binding: {reason}")]
    InvalidBinding {
        module: String,
        name: String,
        reason: &'static str,
    },
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "a route name" } else { "route names" }
}

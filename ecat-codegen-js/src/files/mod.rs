//! Files written into each module directory, plus the build configuration.

mod api_js;
mod build_config;
mod config_js;
mod index_js;
mod request_js;

pub use api_js::ApiJs;
pub use build_config::{BUILD_CONFIG_FILE, BuildConfig};
pub use config_js::ConfigJs;
pub use index_js::IndexJs;
pub use request_js::RequestJs;

/// First line of every file the generator owns.
pub const GENERATED_HEADER: &str =
    "Generated by ecat. Do not edit: this file is overwritten on every run.";

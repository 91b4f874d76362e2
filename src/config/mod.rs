//! Configuration for the packer
//!
//! Provides types and parsing for `atlas-packer.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, find_config_from, load_config, merge_cli_overrides, parse_dimensions, CliOverrides,
    ConfigError,
};
pub use schema::*;

//! Configuration loading and discovery for `atlas-packer.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{PackerConfig, CONFIG_FILENAME};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse atlas-packer.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
    /// Malformed `WxH` dimension string
    #[error("Invalid dimensions '{0}', expected WxH (e.g., 1024x1024)")]
    Dimensions(String),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override canvas dimensions
    pub size: Option<(u32, u32)>,
    /// Override spacing
    pub space: Option<u32>,
    /// Force a rebuild
    pub force: Option<bool>,
    /// Pretty-print the manifest
    pub pretty: Option<bool>,
}

/// Find `atlas-packer.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `atlas-packer.toml` by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// With an explicit path the file must exist. Without one, discovery runs
/// and the defaults are used when nothing is found.
pub fn load_config(path: Option<&Path>) -> Result<PackerConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PackerConfig::default()),
    }
}

/// Load configuration from a specific file path.
///
/// Values are not validated here; call [`validate`] once CLI overrides
/// have been merged.
fn load_config_file(path: &Path) -> Result<PackerConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PackerConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Turn validation problems into a single error
pub fn validate(config: &PackerConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PackerConfig, overrides: &CliOverrides) {
    if let Some((width, height)) = overrides.size {
        config.atlas.size = [width, height];
    }

    if let Some(space) = overrides.space {
        config.atlas.space = space;
    }

    if let Some(force) = overrides.force {
        config.output.force = force;
    }

    if let Some(pretty) = overrides.pretty {
        config.output.pretty = pretty;
    }
}

/// Parse a "WxH" dimension string into (width, height).
pub fn parse_dimensions(s: &str) -> Result<(u32, u32), ConfigError> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Dimensions(s.to_string()));
    }
    let width: u32 =
        parts[0].trim().parse().map_err(|_| ConfigError::Dimensions(s.to_string()))?;
    let height: u32 =
        parts[1].trim().parse().map_err(|_| ConfigError::Dimensions(s.to_string()))?;
    if width == 0 || height == 0 {
        return Err(ConfigError::Dimensions(s.to_string()));
    }
    Ok((width, height))
}

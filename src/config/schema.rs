//! Configuration schema types for `atlas-packer.toml`
//!
//! Defines the structure and validation rules for packer configuration.

use crate::atlas::AtlasConfig;
use serde::{Deserialize, Serialize};

/// Config file name looked up by discovery
pub const CONFIG_FILENAME: &str = "atlas-packer.toml";

/// Canvas and spacing section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSection {
    /// Canvas dimensions [width, height]
    #[serde(default = "default_size")]
    pub size: [u32; 2],
    /// Space inserted between sprites, in pixels
    #[serde(default = "default_space")]
    pub space: u32,
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self { size: default_size(), space: default_space() }
    }
}

fn default_size() -> [u32; 2] {
    [1024, 1024]
}

fn default_space() -> u32 {
    1
}

/// Output behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Pretty-print the manifest
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Rebuild even when outputs are up to date
    #[serde(default)]
    pub force: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true, force: false }
    }
}

fn default_true() -> bool {
    true
}

/// Root of `atlas-packer.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    #[serde(default)]
    pub atlas: CanvasSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "atlas.size")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' {}", CONFIG_FILENAME, self.field, self.message)
    }
}

impl PackerConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.atlas.size[0] == 0 || self.atlas.size[1] == 0 {
            errors.push(ConfigValidationError {
                field: "atlas.size".to_string(),
                message: "dimensions must be positive".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Packing parameters for the core
    pub fn atlas_config(&self) -> AtlasConfig {
        AtlasConfig::new(self.atlas.size[0], self.atlas.size[1], self.atlas.space)
    }
}

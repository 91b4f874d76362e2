//! Error type for atlas jobs
//!
//! Every variant is fatal: a job either produces a complete canvas and
//! manifest or nothing at all.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a packing job
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AtlasError {
    /// A sprite directory entry could not be read or decoded
    #[error("Cannot decode sprite '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The summed padded sprite area is larger than the canvas
    #[error("Atlas too small: sprites need {required} px but the canvas holds {available} px")]
    CapacityOverflow { required: u64, available: u64 },
    /// The packing tree had no free cell for a sprite
    #[error("Could not place sprite '{name}'")]
    Placement { name: String },
    /// Persisting the canvas or manifest failed
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Directory or metadata access failed
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AtlasError {
    /// Short machine-readable kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AtlasError::Decode { .. } => "decode_failure",
            AtlasError::CapacityOverflow { .. } => "capacity_overflow",
            AtlasError::Placement { .. } => "placement_failure",
            AtlasError::Write { .. } => "write_failure",
            AtlasError::Io { .. } => "io_error",
        }
    }
}

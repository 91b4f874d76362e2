//! End-to-end run: sprite directory in, atlas files out.
//!
//! ```ignore
//! use atlas_packer::config::PackerConfig;
//! use atlas_packer::output::OutputPaths;
//! use atlas_packer::pipeline::build_atlas;
//!
//! let paths = OutputPaths::from_base(Path::new("build/sprites"));
//! let outcome = build_atlas(Path::new("assets/sprites"), &paths, &PackerConfig::default())?;
//! ```

use crate::atlas::Atlas;
use crate::catalog::read_sprites;
use crate::config::PackerConfig;
use crate::error::AtlasError;
use crate::output::{write_atlas, OutputPaths};
use crate::staleness::{check_freshness, Freshness};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// What a run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Outputs were already newer than the sprite directory
    Skipped,
    /// A new atlas was packed and written
    Built { sprites: usize },
}

/// Pack `sprite_dir` into the files named by `paths`.
///
/// Skips the work when the outputs are up to date, unless
/// `config.output.force` is set.
pub fn build_atlas(
    sprite_dir: &Path,
    paths: &OutputPaths,
    config: &PackerConfig,
) -> Result<BuildOutcome, AtlasError> {
    let start = Instant::now();

    let freshness = check_freshness(sprite_dir, paths, config.output.force)?;
    if !freshness.needs_rebuild() {
        info!(dir = %sprite_dir.display(), "atlas is up to date");
        return Ok(BuildOutcome::Skipped);
    }
    debug!(reason = ?freshness, "rebuilding atlas");

    let inputs = read_sprites(sprite_dir)?;
    debug!(count = inputs.len(), "read sprite directory");

    let packed = Atlas::new(config.atlas_config(), inputs).pack()?;
    write_atlas(&packed, paths, config.output.pretty)?;

    let sprites = packed.manifest.len();
    info!(sprites, elapsed_ms = start.elapsed().as_millis() as u64, "build finished");
    Ok(BuildOutcome::Built { sprites })
}

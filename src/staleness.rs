//! Rebuild-skip check.
//!
//! An atlas is considered up to date when both output files exist and
//! neither is older than the sprite directory. Only the directory's own
//! modification time is compared: on most filesystems it changes when a
//! file is added, removed or renamed, but not when an existing file is
//! rewritten in place. Use `--force` after editing a sprite in place.

use crate::error::AtlasError;
use crate::output::OutputPaths;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Why a rebuild is or isn't needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Outputs are at least as new as the sprite directory
    UpToDate,
    /// Rebuild was requested explicitly
    Forced,
    /// At least one output file does not exist
    MissingOutput,
    /// The sprite directory changed after the outputs were written
    SourceChanged,
}

impl Freshness {
    pub fn needs_rebuild(&self) -> bool {
        !matches!(self, Freshness::UpToDate)
    }
}

fn modified(path: &Path) -> Result<Option<SystemTime>, AtlasError> {
    match fs::metadata(path) {
        Ok(meta) => meta
            .modified()
            .map(Some)
            .map_err(|source| AtlasError::Io { path: path.to_path_buf(), source }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AtlasError::Io { path: path.to_path_buf(), source }),
    }
}

/// Compare the sprite directory against previously written outputs
pub fn check_freshness(
    sprite_dir: &Path,
    outputs: &OutputPaths,
    force: bool,
) -> Result<Freshness, AtlasError> {
    if force {
        return Ok(Freshness::Forced);
    }

    let source_time = modified(sprite_dir)?.ok_or_else(|| AtlasError::Io {
        path: sprite_dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "sprite directory not found"),
    })?;

    for output in outputs.all() {
        match modified(output)? {
            None => {
                debug!(output = %output.display(), "output missing");
                return Ok(Freshness::MissingOutput);
            }
            Some(output_time) if output_time < source_time => {
                debug!(output = %output.display(), "output older than sprite directory");
                return Ok(Freshness::SourceChanged);
            }
            Some(_) => {}
        }
    }

    Ok(Freshness::UpToDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn set_mtime(path: &Path, time: SystemTime) {
        let file = File::options().write(true).open(path).expect("should open file");
        file.set_modified(time).expect("should set mtime");
    }

    fn setup() -> (TempDir, std::path::PathBuf, OutputPaths) {
        let temp = TempDir::new().expect("should create temp dir");
        let sprites = temp.path().join("sprites");
        fs::create_dir(&sprites).expect("should create sprite dir");
        let outputs = OutputPaths::from_base(&temp.path().join("atlas"));
        (temp, sprites, outputs)
    }

    #[test]
    fn test_force_always_rebuilds() {
        let (_temp, sprites, outputs) = setup();
        let freshness = check_freshness(&sprites, &outputs, true).unwrap();
        assert_eq!(freshness, Freshness::Forced);
        assert!(freshness.needs_rebuild());
    }

    #[test]
    fn test_missing_output_rebuilds() {
        let (_temp, sprites, outputs) = setup();
        fs::write(&outputs.image, b"png").unwrap();
        assert_eq!(check_freshness(&sprites, &outputs, false).unwrap(), Freshness::MissingOutput);
    }

    #[test]
    fn test_newer_outputs_are_up_to_date() {
        let (_temp, sprites, outputs) = setup();
        fs::write(&outputs.image, b"png").unwrap();
        fs::write(&outputs.manifest, b"[]").unwrap();
        let later = SystemTime::now() + Duration::from_secs(60);
        set_mtime(&outputs.image, later);
        set_mtime(&outputs.manifest, later);

        let freshness = check_freshness(&sprites, &outputs, false).unwrap();
        assert_eq!(freshness, Freshness::UpToDate);
        assert!(!freshness.needs_rebuild());
    }

    #[test]
    fn test_older_output_rebuilds() {
        let (_temp, sprites, outputs) = setup();
        fs::write(&outputs.image, b"png").unwrap();
        fs::write(&outputs.manifest, b"[]").unwrap();
        let earlier = SystemTime::now() - Duration::from_secs(3600);
        set_mtime(&outputs.manifest, earlier);

        assert_eq!(check_freshness(&sprites, &outputs, false).unwrap(), Freshness::SourceChanged);
    }

    #[test]
    fn test_missing_sprite_dir_is_error() {
        let (temp, _sprites, outputs) = setup();
        let result = check_freshness(&temp.path().join("nope"), &outputs, false);
        assert!(matches!(result, Err(AtlasError::Io { .. })));
    }
}

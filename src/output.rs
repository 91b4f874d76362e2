//! Persisting a packed atlas: `<output>.png` and `<output>.json`
//!
//! Both artifacts are written to temporary siblings and only renamed into
//! place once both writes succeeded. Previous outputs are kept aside until
//! both renames are done, so a failed run never leaves a new canvas next to
//! a stale manifest (or the other way around).

use crate::atlas::PackedAtlas;
use crate::error::AtlasError;
use image::{ImageError, ImageFormat, RgbaImage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Suffix appended to in-progress files
const TEMP_SUFFIX: &str = ".tmp";

/// Suffix for previous outputs while new ones are moved in
const BACKUP_SUFFIX: &str = ".bak";

/// Where the two artifacts of a run go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub image: PathBuf,
    pub manifest: PathBuf,
}

impl OutputPaths {
    /// Derive both paths from an output base name.
    ///
    /// `build/ui` becomes `build/ui.png` and `build/ui.json`. The base name
    /// is used as-is, so `ui.v2` becomes `ui.v2.png`.
    pub fn from_base(base: &Path) -> Self {
        Self { image: with_suffix(base, ".png"), manifest: with_suffix(base, ".json") }
    }

    pub fn all(&self) -> [&Path; 2] {
        [&self.image, &self.manifest]
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_err(path: &Path) -> impl FnOnce(io::Error) -> AtlasError + '_ {
    move |source| AtlasError::Write { path: path.to_path_buf(), source }
}

fn image_to_io(err: ImageError) -> io::Error {
    match err {
        ImageError::IoError(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

/// Create the parent directory of `path` if it is missing
fn ensure_parent(path: &Path) -> Result<(), AtlasError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_err(path))?;
        }
    }
    Ok(())
}

/// Encode `image` as PNG at `path`
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), AtlasError> {
    ensure_parent(path)?;
    image.save_with_format(path, ImageFormat::Png).map_err(|e| write_err(path)(image_to_io(e)))
}

/// Write the manifest JSON text to `path`
pub fn save_manifest(json: &str, path: &Path) -> Result<(), AtlasError> {
    ensure_parent(path)?;
    fs::write(path, json).map_err(write_err(path))
}

/// A staged file and the final path it replaces
struct Swap<'a> {
    temp: PathBuf,
    target: &'a Path,
    backup: Option<PathBuf>,
    placed: bool,
}

impl<'a> Swap<'a> {
    fn new(target: &'a Path) -> Self {
        Self { temp: with_suffix(target, TEMP_SUFFIX), target, backup: None, placed: false }
    }

    /// Move an existing regular file at the target aside
    fn back_up(&mut self) -> Result<(), AtlasError> {
        if self.target.is_file() {
            let backup = with_suffix(self.target, BACKUP_SUFFIX);
            fs::rename(self.target, &backup).map_err(write_err(self.target))?;
            self.backup = Some(backup);
        }
        Ok(())
    }

    fn place(&mut self) -> Result<(), AtlasError> {
        fs::rename(&self.temp, self.target).map_err(write_err(self.target))?;
        self.placed = true;
        Ok(())
    }

    /// Put the target back the way it was before this run
    fn roll_back(&self) {
        if self.placed {
            let _ = fs::remove_file(self.target);
        }
        if let Some(backup) = &self.backup {
            let _ = fs::rename(backup, self.target);
        }
        if self.temp.exists() {
            let _ = fs::remove_file(&self.temp);
        }
    }

    fn discard_backup(&self) {
        if let Some(backup) = &self.backup {
            let _ = fs::remove_file(backup);
        }
    }
}

fn stage_and_swap(
    canvas: &RgbaImage,
    json: &str,
    swaps: &mut [Swap<'_>; 2],
) -> Result<(), AtlasError> {
    save_png(canvas, &swaps[0].temp)?;
    save_manifest(json, &swaps[1].temp)?;
    for swap in swaps.iter_mut() {
        swap.back_up()?;
    }
    for swap in swaps.iter_mut() {
        swap.place()?;
    }
    Ok(())
}

/// Write the canvas and manifest of `packed` to `paths`.
///
/// Either both final paths hold the new files, or both are left as they
/// were before the call. Previous outputs are moved aside while the new
/// ones are renamed in and restored if any step fails.
pub fn write_atlas(packed: &PackedAtlas, paths: &OutputPaths, pretty: bool) -> Result<(), AtlasError> {
    let json = packed.manifest.to_json(pretty).map_err(|e| AtlasError::Write {
        path: paths.manifest.clone(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    let mut swaps = [Swap::new(&paths.image), Swap::new(&paths.manifest)];

    if let Err(err) = stage_and_swap(&packed.canvas, &json, &mut swaps) {
        for swap in swaps.iter().rev() {
            swap.roll_back();
        }
        debug!(error = %err, "rolled back partial outputs");
        return Err(err);
    }

    for swap in &swaps {
        swap.discard_backup();
    }

    info!(
        image = %paths.image.display(),
        manifest = %paths.manifest.display(),
        sprites = packed.manifest.len(),
        "atlas written"
    );
    Ok(())
}

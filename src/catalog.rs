//! Sprite directory loading.
//!
//! Every file in the directory must be a decodable image; anything else
//! fails the whole job. Subdirectories are skipped. Files are taken in
//! file-name order so repeated runs see the same catalog.

use crate::error::AtlasError;
use crate::sprite::SpriteInput;
use image::io::Reader as ImageReader;
use image::ImageError;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List the image files of a sprite directory, sorted by file name
pub fn list_sprite_files(dir: &Path) -> Result<Vec<PathBuf>, AtlasError> {
    let io_err = |source| AtlasError::Io { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if path.is_dir() {
            warn!(path = %path.display(), "skipping subdirectory");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Sprite name for a file: the file name without its extension
pub fn sprite_name(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Decode one image file, sniffing the format from its content
pub fn read_sprite(path: &Path) -> Result<SpriteInput, AtlasError> {
    let decode_err = |source| AtlasError::Decode { path: path.to_path_buf(), source };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?
        .into_rgba8();

    debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded sprite");
    Ok(SpriteInput::new(sprite_name(path), image))
}

/// Read every sprite in `dir`.
///
/// Decoding runs in parallel; the result keeps file-name order. Any file
/// that fails to decode fails the whole call.
pub fn read_sprites(dir: &Path) -> Result<Vec<SpriteInput>, AtlasError> {
    let files = list_sprite_files(dir)?;
    files.par_iter().map(|path| read_sprite(path)).collect()
}

//! Sprite records fed to the packer

use crate::geometry::Size;
use image::RgbaImage;

/// A decoded sprite as produced by a catalog
#[derive(Debug, Clone)]
pub struct SpriteInput {
    /// Sprite name (file name without extension for directory catalogs)
    pub name: String,
    pub image: RgbaImage,
}

impl SpriteInput {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self { name: name.into(), image }
    }
}

/// A sprite inside one packing job.
///
/// Sizes are fixed when the job is built; placement results are kept in
/// separate records and never written back here.
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    pixels: RgbaImage,
    raw_size: Size,
    padded_size: Size,
}

impl Sprite {
    /// Build a job sprite, adding `spacing` to both axes of the decoded size
    pub fn new(input: SpriteInput, spacing: u32) -> Self {
        let raw_size = Size::new(input.image.width(), input.image.height());
        Self { name: input.name, pixels: input.image, raw_size, padded_size: raw_size.grow(spacing) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Decoded size, spacing excluded
    pub fn raw_size(&self) -> Size {
        self.raw_size
    }

    /// Size of the cell the sprite occupies in the packing tree
    pub fn padded_size(&self) -> Size {
        self.padded_size
    }

    pub fn padded_area(&self) -> u64 {
        self.padded_size.area()
    }
}

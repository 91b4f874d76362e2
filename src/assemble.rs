//! Canvas assembly - copies placed sprites into the atlas image

use crate::geometry::Point;
use image::{GenericImage, ImageResult, RgbaImage};

/// Create an empty canvas; every channel starts at zero (transparent black)
pub fn new_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// Copy `sprite` into `canvas` with its top-left corner at `offset`.
///
/// Destination pixels are replaced, not blended. A sprite that would
/// extend past the canvas edge is an error and leaves the canvas untouched.
pub fn blit(canvas: &mut RgbaImage, sprite: &RgbaImage, offset: Point) -> ImageResult<()> {
    canvas.copy_from(sprite, offset.x, offset.y)
}

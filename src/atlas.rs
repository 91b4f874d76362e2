//! Atlas packing - combines multiple sprites into a single texture with a manifest
//!
//! One [`Atlas`] is one packing run over a fixed-size canvas. The run is
//! all-or-nothing: if the sprites cannot all be placed, no canvas and no
//! manifest are produced.

use crate::assemble::{blit, new_canvas};
use crate::error::AtlasError;
use crate::geometry::{Rect, Size};
use crate::manifest::{Manifest, ManifestBuilder};
use crate::packing::{order_by_padded_area, PackingTree, SpriteId};
use crate::sprite::{Sprite, SpriteInput};
use image::RgbaImage;
use tracing::{debug, info, trace};

/// Canvas size and sprite spacing for a packing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels added to the right and bottom of every sprite
    pub spacing: u32,
}

impl AtlasConfig {
    pub fn new(width: u32, height: u32, spacing: u32) -> Self {
        Self { width, height, spacing }
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn canvas_area(&self) -> u64 {
        self.canvas_size().area()
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { width: 1024, height: 1024, spacing: 1 }
    }
}

/// The padded cell a sprite was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into [`PackedAtlas::sprites`]
    pub sprite: SpriteId,
    pub cell: Rect,
}

/// Output of a successful packing run
#[derive(Debug)]
pub struct PackedAtlas {
    /// Composited canvas, exactly the configured size
    pub canvas: RgbaImage,
    /// Records in placement order
    pub manifest: Manifest,
    /// Sprites in placement order
    pub sprites: Vec<Sprite>,
    /// One entry per sprite, same order as `sprites`
    pub placements: Vec<Placement>,
    /// The tree the sprites were packed into
    pub tree: PackingTree,
}

/// A single packing job
#[derive(Debug)]
pub struct Atlas {
    config: AtlasConfig,
    sprites: Vec<Sprite>,
}

impl Atlas {
    /// Create a job; padded sizes are computed here from `config.spacing`
    pub fn new(config: AtlasConfig, inputs: Vec<SpriteInput>) -> Self {
        let sprites = inputs.into_iter().map(|input| Sprite::new(input, config.spacing)).collect();
        Self { config, sprites }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Sprites in the order they will be offered (catalog order until packed)
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Summed padded area of all sprites
    pub fn required_area(&self) -> u64 {
        self.sprites.iter().map(Sprite::padded_area).sum()
    }

    /// Fail fast when the sprites cannot possibly fit.
    ///
    /// Passing this check does not guarantee that packing succeeds.
    pub fn check_capacity(&self) -> Result<(), AtlasError> {
        let required = self.required_area();
        let available = self.config.canvas_area();
        if required > available {
            return Err(AtlasError::CapacityOverflow { required, available });
        }
        Ok(())
    }

    /// Run the job.
    ///
    /// Order of work: capacity check, largest-first ordering, tree
    /// insertion for every sprite, then canvas assembly and manifest
    /// building. The first sprite that cannot be placed aborts the run.
    pub fn pack(mut self) -> Result<PackedAtlas, AtlasError> {
        self.check_capacity()?;

        order_by_padded_area(&mut self.sprites);

        let mut tree = PackingTree::new(self.config.canvas_size());
        let mut placements = Vec::with_capacity(self.sprites.len());

        for (id, sprite) in self.sprites.iter().enumerate() {
            let cell = tree
                .insert(id, sprite.padded_size())
                .ok_or_else(|| AtlasError::Placement { name: sprite.name().to_string() })?;
            debug!(sprite = sprite.name(), x = cell.x(), y = cell.y(), size = %cell.size, "placed");
            placements.push(Placement { sprite: id, cell });
        }

        trace!("packing tree:\n{}", tree);

        let mut canvas = new_canvas(self.config.width, self.config.height);
        let mut manifest =
            ManifestBuilder::with_capacity(self.config.spacing, self.sprites.len());
        for placement in &placements {
            let sprite = &self.sprites[placement.sprite];
            blit(&mut canvas, sprite.pixels(), placement.cell.origin)
                .map_err(|_| AtlasError::Placement { name: sprite.name().to_string() })?;
            manifest.record(sprite.name(), placement.cell);
        }

        info!(
            sprites = placements.len(),
            width = self.config.width,
            height = self.config.height,
            used = self.required_area(),
            "atlas packed"
        );

        Ok(PackedAtlas {
            canvas,
            manifest: manifest.finish(),
            sprites: self.sprites,
            placements,
            tree,
        })
    }
}

/// Pack `inputs` into one canvas described by `config`
pub fn pack_atlas(inputs: Vec<SpriteInput>, config: &AtlasConfig) -> Result<PackedAtlas, AtlasError> {
    Atlas::new(*config, inputs).pack()
}

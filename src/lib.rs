//! Atlas packer - library for combining sprites into a texture atlas
//!
//! This library provides functionality to:
//! - Load a directory of sprite images
//! - Pack them into one fixed-size canvas with a binary guillotine tree
//! - Produce the composited canvas and an ordered placement manifest
//! - Persist both as `<output>.png` and `<output>.json`

pub mod assemble;
pub mod atlas;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod packing;
pub mod pipeline;
pub mod sprite;
pub mod staleness;

pub use atlas::{pack_atlas, Atlas, AtlasConfig, PackedAtlas, Placement};
pub use error::AtlasError;
pub use manifest::{Manifest, ManifestRecord};
pub use sprite::{Sprite, SpriteInput};

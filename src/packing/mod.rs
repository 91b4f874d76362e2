//! Packing engine: guillotine tree plus the ordering that feeds it.
//!
//! Sprites are offered largest padded area first. Each one descends the
//! tree from the root; a free leaf that fits exactly is taken, a larger one
//! is cut in two and the sprite retried in the first half. The heuristic is
//! greedy, so a set whose total area fits the canvas can still fail once
//! the free space is fragmented.

pub mod node;
pub mod order;

pub use node::{guillotine_cut, PackingNode, PackingTree, SpriteId};
pub use order::{by_descending_padded_area, order_by_padded_area};

//! Insertion order for the packer

use crate::sprite::Sprite;
use std::cmp::Ordering;

/// Compare two sprites so that the larger padded area comes first
pub fn by_descending_padded_area(a: &Sprite, b: &Sprite) -> Ordering {
    b.padded_area().cmp(&a.padded_area())
}

/// Sort sprites largest padded area first.
///
/// The sort is stable: sprites with equal area keep their catalog order.
pub fn order_by_padded_area(sprites: &mut [Sprite]) {
    sprites.sort_by(by_descending_padded_area);
}

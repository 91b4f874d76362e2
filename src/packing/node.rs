//! Binary guillotine tree over the canvas.
//!
//! Each node covers one rectangle of the canvas. A leaf is either free or
//! holds exactly one sprite whose padded size equals the leaf's size. A free
//! leaf that is larger than the sprite being inserted is cut in two, with the
//! first child sized exactly to the sprite along the cut axis. Internal nodes
//! are never merged back.

use crate::geometry::{Rect, Size};
use std::fmt;

/// Index of a sprite within its packing job
pub type SpriteId = usize;

/// One region of the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackingNode {
    /// Undivided region, optionally occupied by one sprite
    Leaf { rect: Rect, occupant: Option<SpriteId> },
    /// Region cut into two children that tile it exactly
    Internal { rect: Rect, children: Box<[PackingNode; 2]> },
}

impl PackingNode {
    /// A free leaf covering `rect`
    pub fn leaf(rect: Rect) -> Self {
        PackingNode::Leaf { rect, occupant: None }
    }

    pub fn rect(&self) -> Rect {
        match self {
            PackingNode::Leaf { rect, .. } | PackingNode::Internal { rect, .. } => *rect,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PackingNode::Leaf { .. })
    }

    pub fn occupant(&self) -> Option<SpriteId> {
        match self {
            PackingNode::Leaf { occupant, .. } => *occupant,
            PackingNode::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[PackingNode; 2]> {
        match self {
            PackingNode::Internal { children, .. } => Some(children),
            PackingNode::Leaf { .. } => None,
        }
    }

    /// Insert a sprite with padded size `size`.
    ///
    /// Returns the rectangle of the leaf it now occupies, or `None` if no
    /// free leaf below this node can hold it. After a split only the first
    /// child is tried.
    pub fn insert(&mut self, id: SpriteId, size: Size) -> Option<Rect> {
        let rect = match self {
            PackingNode::Internal { children, .. } => {
                let [first, second] = &mut **children;
                return first.insert(id, size).or_else(|| second.insert(id, size));
            }
            PackingNode::Leaf { occupant: Some(_), .. } => return None,
            PackingNode::Leaf { rect, occupant } => {
                if !rect.size.fits(size) {
                    return None;
                }
                if rect.size == size {
                    *occupant = Some(id);
                    return Some(*rect);
                }
                *rect
            }
        };

        let (first_rect, second_rect) = guillotine_cut(rect, size);
        let mut first = PackingNode::leaf(first_rect);
        let placed = first.insert(id, size);
        *self = PackingNode::Internal {
            rect,
            children: Box::new([first, PackingNode::leaf(second_rect)]),
        };
        placed
    }

    /// Visit this node and all of its descendants, parents first
    pub fn visit<F: FnMut(&PackingNode, usize)>(&self, f: &mut F) {
        self.visit_at(0, f);
    }

    fn visit_at<F: FnMut(&PackingNode, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        if let PackingNode::Internal { children, .. } = self {
            for child in children.iter() {
                child.visit_at(depth + 1, f);
            }
        }
    }
}

/// Cut `rect` so that its first part matches `size` along the cut axis.
///
/// The cut runs across the axis with less slack: with more horizontal slack
/// the cut is vertical, otherwise (ties included) it is horizontal. `size`
/// must fit inside `rect`.
pub fn guillotine_cut(rect: Rect, size: Size) -> (Rect, Rect) {
    let slack_x = rect.width() - size.width;
    let slack_y = rect.height() - size.height;

    if slack_x > slack_y {
        rect.split_vertical(size.width)
    } else {
        rect.split_horizontal(size.height)
    }
}

/// Packing tree for one job, rooted at the full canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingTree {
    root: PackingNode,
}

impl PackingTree {
    pub fn new(canvas: Size) -> Self {
        Self { root: PackingNode::leaf(Rect::from_size(canvas)) }
    }

    pub fn root(&self) -> &PackingNode {
        &self.root
    }

    /// Insert starting at the root; see [`PackingNode::insert`]
    pub fn insert(&mut self, id: SpriteId, size: Size) -> Option<Rect> {
        self.root.insert(id, size)
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.visit(&mut |_, _| count += 1);
        count
    }

    /// Rectangles of all free leaves with non-zero area
    pub fn free_rects(&self) -> Vec<Rect> {
        let mut free = Vec::new();
        self.root.visit(&mut |node, _| {
            if let PackingNode::Leaf { rect, occupant: None } = node {
                if !rect.is_empty() {
                    free.push(*rect);
                }
            }
        });
        free
    }
}

impl fmt::Display for PackingTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.root.visit(&mut |node, depth| {
            if result.is_err() {
                return;
            }
            let indent = depth * 2;
            result = match node {
                PackingNode::Internal { rect, .. } => writeln!(f, "{:indent$}split {}", "", rect),
                PackingNode::Leaf { rect, occupant: Some(id) } => {
                    writeln!(f, "{:indent$}sprite #{} {}", "", id, rect)
                }
                PackingNode::Leaf { rect, occupant: None } => {
                    writeln!(f, "{:indent$}free {}", "", rect)
                }
            };
        });
        result
    }
}

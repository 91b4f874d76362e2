//! Placement manifest - where each sprite ended up in the canvas.
//!
//! Records are kept in the order sprites were placed (largest padded area
//! first), not in catalog order.
//!
//! # Output Format
//!
//! The manifest serializes as a JSON array:
//!
//! ```json
//! [
//!   {
//!     "Name": "hero",
//!     "Offset": { "X": 0, "Y": 0 },
//!     "Size": { "X": 32, "Y": 48 }
//!   }
//! ]
//! ```
//!
//! `Offset` is the top-left corner of the sprite in the canvas and `Size`
//! its true pixel size, spacing excluded.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// One sprite's placement in the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Offset")]
    pub offset: Point,
    #[serde(rename = "Size")]
    pub size: Size,
}

impl ManifestRecord {
    /// The sprite's pixels within the canvas
    pub fn rect(&self) -> Rect {
        Rect { origin: self.offset, size: self.size }
    }
}

/// Ordered placement records for one atlas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    records: Vec<ManifestRecord>,
}

impl Manifest {
    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given name
    pub fn get(&self, name: &str) -> Option<&ManifestRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Serialize to JSON, pretty-printed or compact
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestRecord;
    type IntoIter = std::slice::Iter<'a, ManifestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Accumulates records as sprites are placed
#[derive(Debug)]
pub struct ManifestBuilder {
    spacing: u32,
    records: Vec<ManifestRecord>,
}

impl ManifestBuilder {
    pub fn new(spacing: u32) -> Self {
        Self { spacing, records: Vec::new() }
    }

    pub fn with_capacity(spacing: u32, capacity: usize) -> Self {
        Self { spacing, records: Vec::with_capacity(capacity) }
    }

    /// Record a sprite placed in the padded cell `cell`.
    ///
    /// The reported size drops the spacing from the cell size.
    pub fn record(&mut self, name: &str, cell: Rect) {
        self.records.push(ManifestRecord {
            name: name.to_string(),
            offset: cell.origin,
            size: cell.size.shrink(self.spacing),
        });
    }

    pub fn finish(self) -> Manifest {
        Manifest { records: self.records }
    }
}

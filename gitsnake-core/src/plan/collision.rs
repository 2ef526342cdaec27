use std::collections::BTreeMap;

use crate::foundation::core::{CellKey, same_coord};
use crate::grid::builder::Cell;
use crate::plan::path::{Axis, PathSegment};

#[derive(Clone, Debug, Default, PartialEq)]
/// Earliest cumulative distance at which each cell is crossed.
pub struct HitRecord {
    hits: BTreeMap<CellKey, f64>,
}

impl HitRecord {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `distance` for `key` unless an equal or earlier hit is already recorded.
    ///
    /// Returns whether the record changed.
    pub fn record(&mut self, key: CellKey, distance: f64) -> bool {
        match self.hits.get(&key) {
            Some(&existing) if existing <= distance => false,
            _ => {
                self.hits.insert(key, distance);
                true
            }
        }
    }

    /// Recorded distance for `key`.
    pub fn get(&self, key: CellKey) -> Option<f64> {
        self.hits.get(&key).copied()
    }

    /// Number of recorded cells.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// True when no cell has been hit.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Hits in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, f64)> + '_ {
        self.hits.iter().map(|(&k, &d)| (k, d))
    }
}

/// Record every active cell lying on `segment`.
///
/// A cell is hit at the segment's start distance plus its offset from `segment.from`
/// along the segment's axis. Zero-length segments are checked as horizontal.
pub fn record_segment_hits(mut hits: HitRecord, segment: &PathSegment, active: &[Cell]) -> HitRecord {
    let (from, to) = (segment.from, segment.to);
    for cell in active {
        let offset = match segment.axis {
            Axis::Horizontal => {
                if !same_coord(cell.y, from.y) || !within(cell.x, from.x, to.x) {
                    continue;
                }
                (cell.x - from.x).abs()
            }
            Axis::Vertical => {
                if !same_coord(cell.x, from.x) || !within(cell.y, from.y, to.y) {
                    continue;
                }
                (cell.y - from.y).abs()
            }
        };
        hits.record(cell.key(), segment.start_distance + offset);
    }
    hits
}

fn within(v: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v >= lo - 1e-9 && v <= hi + 1e-9
}

#[cfg(test)]
#[path = "../../tests/unit/plan/collision.rs"]
mod tests;

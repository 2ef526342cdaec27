use std::collections::BTreeMap;

use crate::config::engine::TimingConfig;
use crate::foundation::core::CellKey;
use crate::plan::collision::HitRecord;

/// How far below `finish` a clamped `trigger` is pulled.
pub const TRIGGER_PULL_EPSILON: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Keyframe window, as fractions of one loop, during which a cell disappears.
pub struct CellTiming {
    /// Fraction at which the cell starts to vanish.
    pub trigger: f64,
    /// Fraction by which the cell is gone.
    pub finish: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Playback duration and per-cell disappearance windows.
pub struct Timeline {
    /// Path length the head travels in one loop.
    pub total_distance: f64,
    /// Seconds per loop.
    pub total_duration: f64,
    cells: BTreeMap<CellKey, CellTiming>,
}

impl Timeline {
    /// Window for `key`, if the cell is ever consumed.
    pub fn get(&self, key: CellKey) -> Option<CellTiming> {
        self.cells.get(&key).copied()
    }

    /// Windows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, CellTiming)> + '_ {
        self.cells.iter().map(|(&k, &t)| (k, t))
    }

    /// Number of consumed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when nothing is consumed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Turn first-crossing distances into keyframe windows.
///
/// `total_duration = max(min_duration, total_distance / speed)`. Each window opens
/// `lead_epsilon` before the head arrives and lasts `lead_epsilon`, capped at
/// `finish_ceiling`; a window squeezed shut by the cap is reopened just below it.
pub fn synthesize_timeline(hits: &HitRecord, total_distance: f64, timing: &TimingConfig) -> Timeline {
    let total_duration = (total_distance / timing.speed_px_per_sec).max(timing.min_duration_secs);
    let cells = hits
        .iter()
        .map(|(key, d)| (key, cell_window(d, total_distance, timing)))
        .collect();
    Timeline {
        total_distance,
        total_duration,
        cells,
    }
}

/// Timeline for the straight fallback line: fixed duration, nothing consumed.
pub fn fallback_timeline(total_distance: f64, timing: &TimingConfig) -> Timeline {
    Timeline {
        total_distance,
        total_duration: timing.fallback_duration_secs,
        cells: BTreeMap::new(),
    }
}

fn cell_window(distance: f64, total_distance: f64, timing: &TimingConfig) -> CellTiming {
    let arrival = if total_distance > 0.0 {
        distance / total_distance
    } else {
        0.0
    };
    let mut trigger = (arrival - timing.lead_epsilon).max(0.0);
    let finish = (trigger + timing.lead_epsilon).min(timing.finish_ceiling);
    if trigger >= finish {
        trigger = (finish - TRIGGER_PULL_EPSILON).max(0.0);
    }
    CellTiming { trigger, finish }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/synth.rs"]
mod tests;

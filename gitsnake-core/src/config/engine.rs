use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::color::Rgb;
use crate::foundation::error::{SnakeError, SnakeResult};

/// Number of week columns in the contribution grid.
pub const GRID_COLUMNS: u32 = 53;
/// Number of weekday rows in the contribution grid.
pub const GRID_ROWS: u32 = 7;
/// Total cell count of the grid.
pub const GRID_CELLS: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete engine configuration.
///
/// Every section falls back to its defaults, so a JSON file only needs the fields it overrides.
pub struct EngineConfig {
    /// Grid geometry in pixels.
    pub layout: LayoutConfig,
    /// Playback speed and keyframe clamps.
    pub timing: TimingConfig,
    /// Trailing body shape and palette.
    pub body: BodyConfig,
    /// Cell and background palette.
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Pixel geometry of the grid and of the path's entry/exit.
pub struct LayoutConfig {
    /// Side length of a cell.
    pub cell_size: f64,
    /// Gap between neighbouring cells.
    pub cell_gap: f64,
    /// Left margin before column 0.
    pub margin_left: f64,
    /// Top margin above row 0 (room for the label).
    pub margin_top: f64,
    /// Right margin after the last column.
    pub margin_right: f64,
    /// Bottom margin below the last row.
    pub margin_bottom: f64,
    /// How far left of the first target the path enters.
    pub start_offset: f64,
    /// How far beyond the canvas' right edge the path exits.
    pub exit_overshoot: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            cell_gap: 3.0,
            margin_left: 10.0,
            margin_top: 30.0,
            margin_right: 10.0,
            margin_bottom: 10.0,
            start_offset: 50.0,
            exit_overshoot: 300.0,
        }
    }
}

impl LayoutConfig {
    /// Distance between the origins of neighbouring cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.cell_gap
    }

    /// Pixel origin of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: u32, row: u32) -> (f64, f64) {
        (
            self.margin_left + f64::from(column) * self.pitch(),
            self.margin_top + f64::from(row) * self.pitch(),
        )
    }

    /// Width of the rendered canvas.
    pub fn canvas_width(&self) -> f64 {
        self.margin_left + f64::from(GRID_COLUMNS) * self.pitch() - self.cell_gap + self.margin_right
    }

    /// Height of the rendered canvas.
    pub fn canvas_height(&self) -> f64 {
        self.margin_top + f64::from(GRID_ROWS) * self.pitch() - self.cell_gap + self.margin_bottom
    }

    /// X coordinate of the path's exit point.
    pub fn exit_x(&self) -> f64 {
        self.canvas_width() + self.exit_overshoot
    }

    /// Offset applied to path vertices so they run through cell centers.
    pub fn center_offset(&self) -> f64 {
        self.cell_size / 2.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Conversion between path distance, playback seconds and keyframe fractions.
pub struct TimingConfig {
    /// Head speed along the path.
    pub speed_px_per_sec: f64,
    /// Lower bound on one loop's duration.
    pub min_duration_secs: f64,
    /// Loop duration used when there is nothing to visit.
    pub fallback_duration_secs: f64,
    /// Keyframe lead accounting for the head's visual size.
    pub lead_epsilon: f64,
    /// Latest fraction at which a cell may finish disappearing.
    pub finish_ceiling: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: 110.0,
            min_duration_secs: 5.0,
            fallback_duration_secs: 20.0,
            lead_epsilon: 0.001,
            finish_ceiling: 0.95,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shape and palette of the trailing body.
pub struct BodyConfig {
    /// Number of body segments, head included.
    pub length: u32,
    /// Playback lag between consecutive segments.
    pub lag_secs: f64,
    /// Opacity floor for the tail.
    pub min_opacity: f64,
    /// Side length of a body segment.
    pub segment_size: f64,
    /// Head color.
    pub head_color: Rgb,
    /// Tail color.
    pub tail_color: Rgb,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            length: 12,
            lag_secs: 0.07,
            min_opacity: 0.4,
            segment_size: 8.0,
            head_color: Rgb::new(0x39, 0xd3, 0x53),
            tail_color: Rgb::new(0x0e, 0x44, 0x29),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Cell and background palette.
pub enum Theme {
    /// GitHub dark palette.
    #[default]
    Dark,
    /// GitHub light palette.
    Light,
}

impl Theme {
    /// Fill for contribution level `0..=4` (higher levels clamp to 4).
    pub fn level_color(self, level: u8) -> Rgb {
        let palette = match self {
            Self::Dark => [
                Rgb::new(0x16, 0x1b, 0x22),
                Rgb::new(0x0e, 0x44, 0x29),
                Rgb::new(0x00, 0x6d, 0x32),
                Rgb::new(0x26, 0xa6, 0x41),
                Rgb::new(0x39, 0xd3, 0x53),
            ],
            Self::Light => [
                Rgb::new(0xeb, 0xed, 0xf0),
                Rgb::new(0x9b, 0xe9, 0xa8),
                Rgb::new(0x40, 0xc4, 0x63),
                Rgb::new(0x30, 0xa1, 0x4e),
                Rgb::new(0x21, 0x6e, 0x39),
            ],
        };
        palette[usize::from(level.min(4))]
    }

    /// Canvas background.
    pub fn background(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0x0d, 0x11, 0x17),
            Self::Light => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Label text color.
    pub fn label(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0xc9, 0xd1, 0xd9),
            Self::Light => Rgb::new(0x24, 0x29, 0x2f),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SnakeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SnakeError::serde(format!("parse engine config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SnakeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SnakeError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject constants the planner cannot work with.
    pub fn validate(&self) -> SnakeResult<()> {
        let l = &self.layout;
        if !l.cell_size.is_finite() || l.cell_size <= 0.0 {
            return Err(SnakeError::validation("layout.cell_size must be finite and > 0"));
        }
        for (name, value) in [
            ("cell_gap", l.cell_gap),
            ("margin_left", l.margin_left),
            ("margin_top", l.margin_top),
            ("margin_right", l.margin_right),
            ("margin_bottom", l.margin_bottom),
            ("start_offset", l.start_offset),
            ("exit_overshoot", l.exit_overshoot),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SnakeError::validation(format!(
                    "layout.{name} must be finite and >= 0"
                )));
            }
        }

        let t = &self.timing;
        if !t.speed_px_per_sec.is_finite() || t.speed_px_per_sec <= 0.0 {
            return Err(SnakeError::validation(
                "timing.speed_px_per_sec must be finite and > 0",
            ));
        }
        for (name, value) in [
            ("min_duration_secs", t.min_duration_secs),
            ("fallback_duration_secs", t.fallback_duration_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SnakeError::validation(format!(
                    "timing.{name} must be finite and > 0"
                )));
            }
        }
        if !(t.finish_ceiling > 0.0 && t.finish_ceiling < 1.0) {
            return Err(SnakeError::validation(
                "timing.finish_ceiling must be in (0, 1)",
            ));
        }
        if !(t.lead_epsilon > 0.0 && t.lead_epsilon < t.finish_ceiling) {
            return Err(SnakeError::validation(
                "timing.lead_epsilon must be in (0, finish_ceiling)",
            ));
        }

        let b = &self.body;
        if b.length == 0 {
            return Err(SnakeError::validation("body.length must be > 0"));
        }
        if !b.lag_secs.is_finite() || b.lag_secs < 0.0 {
            return Err(SnakeError::validation("body.lag_secs must be finite and >= 0"));
        }
        if !(0.0..=1.0).contains(&b.min_opacity) {
            return Err(SnakeError::validation("body.min_opacity must be in [0, 1]"));
        }
        if !b.segment_size.is_finite() || b.segment_size <= 0.0 {
            return Err(SnakeError::validation(
                "body.segment_size must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/engine.rs"]
mod tests;

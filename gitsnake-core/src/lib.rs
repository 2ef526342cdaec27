//! Gitsnake turns a year of daily contribution counts into a looping "snake" animation
//! that eats its way through the contribution grid.
//!
//! # Pipeline overview
//!
//! 1. **Grid**: `[ContributionDay] -> Grid` (53 weeks × 7 days, column-major)
//! 2. **Order**: active cells -> shuffled `Target`s (injectable [`RandomSource`])
//! 3. **Plan**: `Target`s -> axis-aligned [`PlannedPath`] plus earliest crossing per cell
//! 4. **Timeline**: crossings -> per-cell keyframe windows and loop duration
//! 5. **Body**: fixed-length trail of [`SnakeSegment`]s replaying the path with a lag
//! 6. **Render** (optional): [`render_svg`] for the animated document, [`render_preview_png`]
//!    for a static preview
//!
//! Planning never fails on activity input: an empty grid yields a straight fallback line,
//! and a failing [`ContributionSource`] is replaced by a synthesized history in
//! [`load_activity`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod activity;
mod config;
mod engine;
mod foundation;
mod grid;
mod plan;
mod render;
mod timeline;

pub use activity::model::ContributionDay;
pub use activity::source::{
    Activity, ContributionSource, JsonFileSource, OfflineSource, SYNTHETIC_DAYS, StaticSource,
    load_activity, synthesize_history,
};
pub use config::engine::{
    BodyConfig, EngineConfig, GRID_CELLS, GRID_COLUMNS, GRID_ROWS, LayoutConfig, Theme,
    TimingConfig,
};
pub use engine::snake::{CellSchedule, SnakeAnimation, SnakeEngine, SnakeReport};
pub use foundation::color::Rgb;
pub use foundation::core::{BezPath, CellKey, Point, Vec2};
pub use foundation::error::{SnakeError, SnakeResult};
pub use foundation::random::{RandomSource, ScriptedSource};
pub use grid::builder::{Cell, Grid, build_grid};
pub use plan::collision::{HitRecord, record_segment_hits};
pub use plan::path::{Axis, PathSegment, PlannedPath, plan_path};
pub use plan::shuffle::{Target, shuffle_targets, targets_in_order};
pub use render::raster::{parse_svg, rasterize_svg, render_preview_png, write_png};
pub use render::svg::render_svg;
pub use timeline::body::{SnakeSegment, animate_body};
pub use timeline::synth::{
    CellTiming, TRIGGER_PULL_EPSILON, Timeline, fallback_timeline, synthesize_timeline,
};

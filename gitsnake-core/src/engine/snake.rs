use std::collections::BTreeSet;

use crate::activity::model::ContributionDay;
use crate::config::engine::EngineConfig;
use crate::foundation::core::CellKey;
use crate::foundation::error::{SnakeError, SnakeResult};
use crate::foundation::random::RandomSource;
use crate::grid::builder::{Grid, build_grid};
use crate::plan::path::{PlannedPath, plan_path};
use crate::plan::shuffle::{Target, shuffle_targets, targets_in_order};
use crate::timeline::body::{SnakeSegment, animate_body};
use crate::timeline::synth::{Timeline, fallback_timeline, synthesize_timeline};

#[derive(Clone, Debug, PartialEq)]
/// Everything a renderer needs to draw one looping snake.
pub struct SnakeAnimation {
    /// Handle shown in the label.
    pub username: String,
    /// Laid-out grid the snake eats through.
    pub grid: Grid,
    /// Visiting order actually used.
    pub targets: Vec<Target>,
    /// Route and first-crossing distances.
    pub path: PlannedPath,
    /// Loop duration and per-cell windows.
    pub timeline: Timeline,
    /// Body parts, tail first.
    pub body: Vec<SnakeSegment>,
}

impl SnakeAnimation {
    /// True when the grid had no active cells and the fallback line was used.
    pub fn degenerate(&self) -> bool {
        self.path.degenerate
    }

    /// Flatten into a serializable summary.
    pub fn report(&self) -> SnakeReport {
        let mut schedule: Vec<CellSchedule> = self
            .timeline
            .iter()
            .map(|(key, window)| CellSchedule {
                column: key.column,
                row: key.row,
                distance: self.path.hits.get(key).unwrap_or_default(),
                trigger: window.trigger,
                finish: window.finish,
            })
            .collect();
        schedule.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then((a.column, a.row).cmp(&(b.column, b.row)))
        });

        SnakeReport {
            username: self.username.clone(),
            degenerate: self.degenerate(),
            path_d: self.path.svg_path_data(),
            vertices: self.path.vertices().iter().map(|p| [p.x, p.y]).collect(),
            total_distance: self.timeline.total_distance,
            total_duration: self.timeline.total_duration,
            schedule,
            body: self.body.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// When one cell is eaten.
pub struct CellSchedule {
    /// Week column.
    pub column: u32,
    /// Weekday row.
    pub row: u32,
    /// Path length at first crossing.
    pub distance: f64,
    /// Keyframe fraction at which the cell starts to vanish.
    pub trigger: f64,
    /// Keyframe fraction by which the cell is gone.
    pub finish: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// JSON-friendly summary of a [`SnakeAnimation`].
pub struct SnakeReport {
    /// Labeled handle.
    pub username: String,
    /// Fallback line used.
    pub degenerate: bool,
    /// SVG path data the head follows.
    pub path_d: String,
    /// Path vertices on cell centers.
    pub vertices: Vec<[f64; 2]>,
    /// Path length.
    pub total_distance: f64,
    /// Seconds per loop.
    pub total_duration: f64,
    /// Consumed cells ordered by first crossing.
    pub schedule: Vec<CellSchedule>,
    /// Body parts, tail first.
    pub body: Vec<SnakeSegment>,
}

impl SnakeReport {
    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SnakeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnakeError::serde(format!("serialize snake report: {e}")))
    }
}

/// Stateless driver for grid, order, path, timeline and body.
pub struct SnakeEngine;

impl SnakeEngine {
    #[tracing::instrument(skip(days, config, rng), fields(days = days.len()))]
    /// Build an animation, drawing the visiting order from `rng`.
    pub fn generate<R: RandomSource + ?Sized>(
        username: &str,
        days: &[ContributionDay],
        config: &EngineConfig,
        rng: &mut R,
    ) -> SnakeResult<SnakeAnimation> {
        config.validate()?;
        let grid = build_grid(days, &config.layout);
        let targets = shuffle_targets(&grid.active_cells(), rng);
        Ok(Self::assemble(username, grid, targets, config))
    }

    #[tracing::instrument(skip(days, config, order), fields(days = days.len()))]
    /// Build an animation with a caller-chosen visiting order.
    ///
    /// `order` must list every active cell exactly once.
    pub fn generate_with_order(
        username: &str,
        days: &[ContributionDay],
        config: &EngineConfig,
        order: &[CellKey],
    ) -> SnakeResult<SnakeAnimation> {
        config.validate()?;
        let grid = build_grid(days, &config.layout);
        let active: BTreeSet<CellKey> = grid.active_cells().iter().map(|c| c.key()).collect();

        let mut seen = BTreeSet::new();
        let mut cells = Vec::with_capacity(order.len());
        for &key in order {
            if !active.contains(&key) {
                return Err(SnakeError::validation(format!(
                    "visiting order names inactive or out-of-grid cell {key}"
                )));
            }
            if !seen.insert(key) {
                return Err(SnakeError::validation(format!(
                    "visiting order lists cell {key} twice"
                )));
            }
            if let Some(cell) = grid.get(key) {
                cells.push(cell.clone());
            }
        }
        if seen.len() != active.len() {
            return Err(SnakeError::validation(format!(
                "visiting order covers {} of {} active cells",
                seen.len(),
                active.len()
            )));
        }

        Ok(Self::assemble(username, grid, targets_in_order(cells), config))
    }

    fn assemble(
        username: &str,
        grid: Grid,
        targets: Vec<Target>,
        config: &EngineConfig,
    ) -> SnakeAnimation {
        let active = grid.active_cells();
        let path = plan_path(&targets, &active, &config.layout);
        let timeline = if path.degenerate {
            fallback_timeline(path.total_distance, &config.timing)
        } else {
            synthesize_timeline(&path.hits, path.total_distance, &config.timing)
        };
        let body = animate_body(&config.body);

        tracing::info!(
            active = active.len(),
            total_distance = timeline.total_distance,
            total_duration = timeline.total_duration,
            "snake ready"
        );

        SnakeAnimation {
            username: username.to_owned(),
            grid,
            targets,
            path,
            timeline,
            body,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/snake.rs"]
mod tests;

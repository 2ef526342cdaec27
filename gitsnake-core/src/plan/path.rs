use crate::config::engine::LayoutConfig;
use crate::foundation::core::{BezPath, Point, Vec2, same_coord};
use crate::grid::builder::Cell;
use crate::plan::collision::{HitRecord, record_segment_hits};
use crate::plan::shuffle::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
/// Movement direction of a path segment.
pub enum Axis {
    /// Constant `y`.
    Horizontal,
    /// Constant `x`.
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One axis-aligned move, in cell-origin coordinates.
pub struct PathSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Direction of travel.
    pub axis: Axis,
    /// Path length travelled before this segment begins.
    pub start_distance: f64,
}

impl PathSegment {
    /// Build a segment.
    pub fn new(from: Point, to: Point, axis: Axis, start_distance: f64) -> Self {
        Self {
            from,
            to,
            axis,
            start_distance,
        }
    }

    /// Zero-length segment at the path's start, used to catch cells under the entry point.
    pub fn probe(at: Point) -> Self {
        Self::new(at, at, Axis::Horizontal, 0.0)
    }

    /// Length of the move.
    pub fn length(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => (self.to.x - self.from.x).abs(),
            Axis::Vertical => (self.to.y - self.from.y).abs(),
        }
    }

    /// Path length at the end of this segment.
    pub fn end_distance(&self) -> f64 {
        self.start_distance + self.length()
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Planned route through every target, plus the first-crossing distances it produced.
pub struct PlannedPath {
    /// Entry point in cell-origin coordinates.
    pub start: Point,
    /// Moves in travel order; the last one is the exit.
    pub segments: Vec<PathSegment>,
    /// Sum of all segment lengths.
    pub total_distance: f64,
    /// Earliest crossing distance per active cell.
    pub hits: HitRecord,
    /// True when there were no targets and the straight fallback line was used.
    pub degenerate: bool,
    center_offset: f64,
}

impl PlannedPath {
    /// Vertices shifted onto cell centers, from entry to exit.
    pub fn vertices(&self) -> Vec<Point> {
        let shift = Vec2::new(self.center_offset, self.center_offset);
        std::iter::once(self.start)
            .chain(self.segments.iter().map(|s| s.to))
            .map(|p| p + shift)
            .collect()
    }

    /// The route as a polyline.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut vertices = self.vertices().into_iter();
        if let Some(first) = vertices.next() {
            path.move_to(first);
            for p in vertices {
                path.line_to(p);
            }
        }
        path
    }

    /// SVG path data (`d` attribute) for the route.
    pub fn svg_path_data(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

struct Walk {
    pos: Point,
    distance: f64,
    segments: Vec<PathSegment>,
    hits: HitRecord,
}

impl Walk {
    fn advance(mut self, to: Point, axis: Axis, active: &[Cell]) -> Self {
        let segment = PathSegment::new(self.pos, to, axis, self.distance);
        self.hits = record_segment_hits(self.hits, &segment, active);
        self.distance = segment.end_distance();
        self.pos = to;
        self.segments.push(segment);
        self
    }

    fn visit(self, target: Point, active: &[Cell]) -> Self {
        let walk = if same_coord(target.x, self.pos.x) {
            self
        } else {
            let to = Point::new(target.x, self.pos.y);
            self.advance(to, Axis::Horizontal, active)
        };
        if same_coord(target.y, walk.pos.y) {
            walk
        } else {
            let to = Point::new(walk.pos.x, target.y);
            walk.advance(to, Axis::Vertical, active)
        }
    }
}

/// Route from an entry point left of the first target through every target, then off
/// the right edge.
///
/// Each target is reached with a horizontal move followed by a vertical one; cells are
/// checked against each move as it is emitted, so a corner cell belongs to the horizontal
/// move. An empty target list yields the straight fallback line.
#[tracing::instrument(skip_all, fields(targets = targets.len()))]
pub fn plan_path(targets: &[Target], active: &[Cell], layout: &LayoutConfig) -> PlannedPath {
    let Some(first) = targets.first() else {
        return fallback_path(layout);
    };

    let start = Point::new(
        (first.cell.x - layout.start_offset).max(0.0),
        first.cell.y,
    );
    let probe = PathSegment::probe(start);
    let walk = Walk {
        pos: start,
        distance: 0.0,
        segments: Vec::with_capacity(targets.len() * 2 + 1),
        hits: record_segment_hits(HitRecord::new(), &probe, active),
    };

    let mut walk = targets
        .iter()
        .fold(walk, |walk, t| walk.visit(t.cell.origin(), active));

    let exit = PathSegment::new(
        walk.pos,
        Point::new(layout.exit_x(), walk.pos.y),
        Axis::Horizontal,
        walk.distance,
    );
    walk.distance = exit.end_distance();
    walk.segments.push(exit);

    tracing::debug!(
        segments = walk.segments.len(),
        total_distance = walk.distance,
        hits = walk.hits.len(),
        "planned path"
    );

    PlannedPath {
        start,
        segments: walk.segments,
        total_distance: walk.distance,
        hits: walk.hits,
        degenerate: false,
        center_offset: layout.center_offset(),
    }
}

fn fallback_path(layout: &LayoutConfig) -> PlannedPath {
    let start = Point::new(0.0, layout.margin_top);
    let line = PathSegment::new(
        start,
        Point::new(layout.exit_x(), start.y),
        Axis::Horizontal,
        0.0,
    );
    tracing::info!("no active cells; using the straight fallback path");
    PlannedPath {
        start,
        total_distance: line.end_distance(),
        segments: vec![line],
        hits: HitRecord::new(),
        degenerate: true,
        center_offset: layout.center_offset(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/path.rs"]
mod tests;

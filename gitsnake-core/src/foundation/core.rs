pub use kurbo::{BezPath, Point, Vec2};

/// Composite grid coordinate used to key per-cell state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellKey {
    /// Week column, `0..53`.
    pub column: u32,
    /// Weekday row, `0..7`.
    pub row: u32,
}

impl CellKey {
    /// Build a key from column and row.
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Day offset in column-major (calendar week) order.
    pub fn day_index(self, rows: u32) -> usize {
        (self.column * rows + self.row) as usize
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.column, self.row)
    }
}

/// Coordinate equality for positions derived from the same layout arithmetic.
pub(crate) fn same_coord(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

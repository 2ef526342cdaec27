use crate::activity::model::ContributionDay;
use crate::config::engine::{GRID_CELLS, GRID_COLUMNS, GRID_ROWS, LayoutConfig};
use crate::foundation::core::{CellKey, Point};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One day on the contribution grid.
pub struct Cell {
    /// Week column.
    pub column: u32,
    /// Weekday row.
    pub row: u32,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Contributions that day.
    pub count: u32,
    /// Color level `0..=4`.
    pub level: u8,
    /// `count > 0`.
    pub active: bool,
}

impl Cell {
    /// Grid coordinate of this cell.
    pub fn key(&self) -> CellKey {
        CellKey::new(self.column, self.row)
    }

    /// Top-left corner as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fixed 53×7 grid of cells in column-major order.
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// All cells, column-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells; always 371.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `key`, if inside the grid.
    pub fn get(&self, key: CellKey) -> Option<&Cell> {
        if key.column >= GRID_COLUMNS || key.row >= GRID_ROWS {
            return None;
        }
        self.cells.get(key.day_index(GRID_ROWS))
    }

    /// Active cells, column-major.
    pub fn active_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|c| c.active).cloned().collect()
    }
}

/// Lay `days` out on the grid.
///
/// Day `i` lands at `(i / 7, i % 7)`. Days beyond the grid are ignored and missing days
/// become inactive zero cells.
pub fn build_grid(days: &[ContributionDay], layout: &LayoutConfig) -> Grid {
    let cells = (0..GRID_CELLS)
        .map(|i| {
            let column = i as u32 / GRID_ROWS;
            let row = i as u32 % GRID_ROWS;
            let (x, y) = layout.cell_origin(column, row);
            let (count, level) = days
                .get(i)
                .map(|d| (d.count, d.level.min(4)))
                .unwrap_or((0, 0));
            Cell {
                column,
                row,
                x,
                y,
                count,
                level,
                active: count > 0,
            }
        })
        .collect();
    Grid { cells }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/builder.rs"]
mod tests;

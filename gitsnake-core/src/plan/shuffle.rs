use crate::foundation::random::RandomSource;
use crate::grid::builder::Cell;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// An active cell and its position in the visiting order.
pub struct Target {
    /// Zero-based visiting order.
    pub order: usize,
    /// Cell to visit.
    pub cell: Cell,
}

/// Uniform Fisher–Yates permutation of `active`.
pub fn shuffle_targets<R: RandomSource + ?Sized>(active: &[Cell], rng: &mut R) -> Vec<Target> {
    let mut cells = active.to_vec();
    for i in (1..cells.len()).rev() {
        let j = rng.next_index(i);
        cells.swap(i, j);
    }
    targets_in_order(cells)
}

/// Wrap cells as targets without reordering them.
pub fn targets_in_order(cells: Vec<Cell>) -> Vec<Target> {
    cells
        .into_iter()
        .enumerate()
        .map(|(order, cell)| Target { order, cell })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/plan/shuffle.rs"]
mod tests;

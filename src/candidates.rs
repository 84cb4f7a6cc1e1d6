//! Legal-value resolution for a single cell.
//!
//! Scans are limited to cells visited before the target in row-major order:
//! the row to the left of the cell, the column above it, and the box rows
//! above it. Later cells may hold stale values left behind by backtracking,
//! so they must never be observed.

use crate::collections::square::Coord;
use crate::geometry::{CellCoords, Geometry};
use crate::{Board, Value};

/// Values legal for the cell at `index`, ascending.
///
/// An empty result is a dead end, not an error.
pub(crate) fn legal_values(board: &Board, geometry: &Geometry, index: usize) -> Vec<Value> {
    values_above(board, geometry, index, 0)
}

/// Values legal for the cell at `index` and greater than its current value,
/// ascending.
///
/// The cell's stored value acts as a resume pointer: candidates up to it have
/// already been tried in this descent. A never-visited cell holds `0`, which
/// leaves the full legal set.
pub(crate) fn untried_values(board: &Board, geometry: &Geometry, index: usize) -> Vec<Value> {
    values_above(board, geometry, index, board[index])
}

fn values_above(board: &Board, geometry: &Geometry, index: usize, floor: Value) -> Vec<Value> {
    let CellCoords {
        row,
        col,
        box_row,
        box_col,
    } = geometry.coords(index);
    let mut used = vec![false; geometry.max_value() as usize + 1];
    for &value in &board.row(row)[..col] {
        used[value as usize] = true;
    }
    for r in 0..row {
        used[board[Coord::new(col, r)] as usize] = true;
    }
    for r in box_row..row {
        for &value in &board.row(r)[box_col..box_col + geometry.box_size()] {
            used[value as usize] = true;
        }
    }
    (floor + 1..=geometry.max_value())
        .filter(|&value| !used[value as usize])
        .collect()
}

//! Rules module - the B3/S23 generation update
//!
//! Neighbor counting uses a bounded boundary: anything outside the grid is
//! permanently dead, so corner cells see at most 3 neighbors and edge cells 5.
//! `step` reads the current grid immutably and writes a fresh one.

use crate::grid::GridState;
use crate::types::CellState;

/// Moore neighborhood offsets (the 8 surrounding cells)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live cells in the Moore neighborhood of (x, y)
///
/// Out-of-range neighbors contribute 0.
pub fn count_live_neighbors(grid: &GridState, x: i32, y: i32) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.is_alive(x.saturating_add(dx), y.saturating_add(dy)))
        .count() as u8
}

/// Next state of a cell given its current state and live neighbor count
#[inline(always)]
pub fn next_state(cell: CellState, neighbors: u8) -> CellState {
    match (cell, neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Compute the next generation
///
/// The result has the same dimensions as `grid`.
pub fn step(grid: &GridState) -> GridState {
    let width = grid.width();
    let height = grid.height();
    let mut cells = Vec::with_capacity(grid.cells().len());

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let current = grid.cells()[(y as usize) * (width as usize) + (x as usize)];
            cells.push(next_state(current, count_live_neighbors(grid, x, y)));
        }
    }

    GridState::from_raw(width, height, cells)
}

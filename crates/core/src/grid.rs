//! Grid module - owns the cell matrix
//!
//! The grid is a fixed `width x height` matrix where each cell is dead or alive.
//! Uses a flat vector in row-major order (y * width + x) for cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom).
//! Dimensions are fixed at construction; a grid of another size is a new grid.

use rand::Rng;

use crate::error::{LifeError, Result};
use crate::types::CellState;

/// The simulation grid with flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl GridState {
    /// Create a new all-dead grid
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![CellState::Dead; len],
        }
    }

    /// Build a grid from row-major cells; the caller guarantees `cells.len() == width * height`
    pub(crate) fn from_raw(width: u32, height: u32, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        self.index(x, y).ok_or(LifeError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Liveness query that treats anything outside the grid as dead
    #[inline(always)]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx].is_alive())
    }

    /// Set cell at position (x, y)
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Flip cell at position (x, y), returning the new state
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<CellState> {
        let idx = self.checked_index(x, y)?;
        let flipped = self.cells[idx].flipped();
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Set each cell alive with probability 1/2, drawn from `rng`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = CellState::from(rng.gen_bool(0.5));
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Snapshot bytes (see [`crate::snapshot`])
    pub fn serialize(&self) -> Vec<u8> {
        crate::snapshot::encode(self)
    }

    /// Decode snapshot bytes into a new grid
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        crate::snapshot::decode(bytes)
    }

    /// Create from ASCII rows for testing (`#`/`O` alive, anything else dead)
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        assert!(rows.iter().all(|r| r.len() == width as usize));

        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|ch| CellState::from(ch == '#' || ch == 'O'))
            .collect();
        Self::from_raw(width, height, cells)
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}

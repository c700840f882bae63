//! Snapshot module - fixed binary layout for grid persistence
//!
//! Layout:
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 0..4 | width, u32 little-endian |
//! | 4..8 | height, u32 little-endian |
//! | 8.. | width*height cells, row-major (row 0 first), 0 = dead, 1 = alive |
//!
//! Decoding validates everything before building a grid, so a failed load
//! never yields a partially filled grid.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LifeError, Result};
use crate::grid::GridState;
use crate::types::{CellState, SNAPSHOT_HEADER_LEN};

/// Encode a grid into a new buffer
pub fn encode(grid: &GridState) -> Vec<u8> {
    let mut out = Vec::with_capacity(SNAPSHOT_HEADER_LEN + grid.cells().len());
    encode_into(grid, &mut out);
    out
}

/// Encode a grid, appending to `out`
pub fn encode_into(grid: &GridState, out: &mut Vec<u8>) {
    out.extend_from_slice(&grid.width().to_le_bytes());
    out.extend_from_slice(&grid.height().to_le_bytes());
    out.extend(grid.cells().iter().map(|c| c.as_byte()));
}

/// Decode snapshot bytes into a new grid
pub fn decode(bytes: &[u8]) -> Result<GridState> {
    if bytes.len() < SNAPSHOT_HEADER_LEN {
        return Err(LifeError::CorruptData(format!(
            "header needs {SNAPSHOT_HEADER_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let (header, body) = bytes.split_at(SNAPSHOT_HEADER_LEN);
    let width = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let height = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

    let expected = (width as u64) * (height as u64);
    if body.len() as u64 != expected {
        return Err(LifeError::CorruptData(format!(
            "{width}x{height} grid needs {expected} cell bytes, got {}",
            body.len()
        )));
    }

    let cells = body
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            CellState::from_byte(b).ok_or_else(|| {
                LifeError::CorruptData(format!("cell byte {i} has invalid value {b}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GridState::from_raw(width, height, cells))
}

/// Write encoded snapshot bytes to `path`
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "saved grid snapshot");
    Ok(())
}

/// Read raw snapshot bytes from `path`; decoding is left to the caller
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read grid snapshot");
    Ok(bytes)
}

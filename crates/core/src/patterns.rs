//! Patterns module - seed pattern catalog, orientation transforms and placement
//!
//! Every pattern is stored facing right (its direction of travel or asymmetry
//! points toward increasing x) as non-negative offsets from its local origin.
//! Rotation maps offsets through one of four quarter-turn transforms; placement
//! stamps the rotated offsets onto a grid and drops whatever falls outside.

use arrayvec::ArrayVec;

use crate::error::{LifeError, Result};
use crate::grid::GridState;
use crate::types::{CellState, Orientation};

/// Offset of a single cell relative to the pattern origin
pub type CellOffset = (i32, i32);

/// Upper bound on cells in any catalog pattern (pulsar has 48)
pub const MAX_PATTERN_CELLS: usize = 64;

/// Offsets of a pattern after rotation (stack-only)
pub type RotatedOffsets = ArrayVec<CellOffset, MAX_PATTERN_CELLS>;

/// A named catalog entry
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Catalog key used by `select_pattern`
    pub name: &'static str,
    /// Menu label
    pub label: &'static str,
    pub cells: &'static [CellOffset],
}

#[rustfmt::skip]
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    label: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

#[rustfmt::skip]
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    label: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

/// Gosper glider gun
#[rustfmt::skip]
pub const GLIDER_GUN: Pattern = Pattern {
    name: "glider_gun",
    label: "Glider Gun",
    cells: &[
        (24, 0), (22, 1), (24, 1), (12, 2), (13, 2), (20, 2), (21, 2),
        (34, 2), (35, 2), (11, 3), (15, 3), (20, 3), (21, 3), (34, 3),
        (35, 3), (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5),
        (24, 5), (10, 6), (16, 6), (24, 6), (11, 7), (15, 7), (12, 8), (13, 8),
    ],
};

/// U-shaped wall that absorbs incoming gliders
#[rustfmt::skip]
pub const GLIDER_STOPPER: Pattern = Pattern {
    name: "glider_stopper",
    label: "Glider Stopper",
    cells: &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
        (1, 6), (2, 6), (3, 6), (4, 6), (5, 6), (6, 6),
        (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    ],
};

#[rustfmt::skip]
pub const TOAD: Pattern = Pattern {
    name: "toad",
    label: "Toad",
    cells: &[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)],
};

#[rustfmt::skip]
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    label: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

#[rustfmt::skip]
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    label: "Pulsar",
    cells: &[
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

#[rustfmt::skip]
pub const SPACESHIP: Pattern = Pattern {
    name: "spaceship",
    label: "Spaceship",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (3, 1), (3, 2), (0, 3), (2, 3)],
};

/// Lightweight spaceship
#[rustfmt::skip]
pub const LWSS: Pattern = Pattern {
    name: "lwss",
    label: "LWSS",
    cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
};

/// Middleweight spaceship
#[rustfmt::skip]
pub const MWSS: Pattern = Pattern {
    name: "mwss",
    label: "MWSS",
    cells: &[
        (2, 0), (3, 0), (4, 0), (5, 0), (1, 1), (0, 2), (0, 3), (5, 3),
        (0, 4), (1, 4), (2, 4), (3, 4), (4, 4),
    ],
};

/// Heavyweight spaceship
#[rustfmt::skip]
pub const HWSS: Pattern = Pattern {
    name: "hwss",
    label: "HWSS",
    cells: &[
        (3, 0), (4, 0), (5, 0), (6, 0), (2, 1), (1, 2), (1, 3), (6, 3),
        (1, 4), (2, 4), (3, 4), (4, 4), (5, 4),
    ],
};

#[rustfmt::skip]
pub const DIEHARD: Pattern = Pattern {
    name: "diehard",
    label: "Diehard",
    cells: &[(0, 1), (1, 1), (1, 2), (5, 0), (6, 0), (7, 0), (6, 2)],
};

#[rustfmt::skip]
pub const ACORN: Pattern = Pattern {
    name: "acorn",
    label: "Acorn",
    cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
};

#[rustfmt::skip]
pub const R_PENTOMINO: Pattern = Pattern {
    name: "r_pentomino",
    label: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// The full catalog, in menu order
pub const PATTERNS: &[&Pattern] = &[
    &GLIDER,
    &BLINKER,
    &GLIDER_GUN,
    &GLIDER_STOPPER,
    &TOAD,
    &BEACON,
    &PULSAR,
    &SPACESHIP,
    &LWSS,
    &MWSS,
    &HWSS,
    &DIEHARD,
    &ACORN,
    &R_PENTOMINO,
];

/// Find a catalog pattern by key
pub fn lookup(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .copied()
        .find(|p| p.name == name)
        .ok_or_else(|| LifeError::InvalidPatternName(name.to_string()))
}

/// Catalog keys in menu order
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

/// Map raw offsets through an orientation transform
///
/// `offsets` must hold at most [`MAX_PATTERN_CELLS`] entries; every catalog
/// pattern does.
pub(crate) fn rotate_offsets(offsets: &[CellOffset], orientation: Orientation) -> RotatedOffsets {
    offsets.iter().map(|&o| orientation.apply(o)).collect()
}

/// Rotate a catalog pattern into the given orientation
pub fn rotate(pattern: &Pattern, orientation: Orientation) -> RotatedOffsets {
    rotate_offsets(pattern.cells, orientation)
}

/// Set alive every `anchor + offset` that lands inside the grid
///
/// Offsets outside the grid are dropped; nothing wraps. Returns the number of
/// cells that landed.
pub fn place_offsets(offsets: &[CellOffset], anchor: (i32, i32), grid: &mut GridState) -> usize {
    let mut placed = 0;
    for &(dx, dy) in offsets {
        let (Some(x), Some(y)) = (anchor.0.checked_add(dx), anchor.1.checked_add(dy)) else {
            continue;
        };
        if grid.set(x, y, CellState::Alive).is_ok() {
            placed += 1;
        }
    }
    placed
}

/// Rotate `pattern` and stamp it at `anchor`
pub fn place(
    pattern: &Pattern,
    orientation: Orientation,
    anchor: (i32, i32),
    grid: &mut GridState,
) -> usize {
    place_offsets(&rotate(pattern, orientation), anchor, grid)
}

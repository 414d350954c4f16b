use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// A named seed pattern. Cells are `(row, col)` offsets from the pattern's
/// top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| {
            (h.max(r + 1), w.max(c + 1))
        })
    }

    /// Origin that centres the pattern on `grid`, or `(0, 0)` if it doesn't fit.
    pub fn centered_origin(&self, grid: &Grid) -> (usize, usize) {
        let (height, width) = self.extent();
        (
            grid.rows().saturating_sub(height) / 2,
            grid.cols().saturating_sub(width) / 2,
        )
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears `grid` and stamps `pattern` with its top-left corner at `origin`.
/// Cells that fall outside the grid are skipped. Returns the number of cells
/// placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) -> usize {
    grid.clear();

    let mut placed = 0;
    for &(row, col) in pattern.cells {
        let (r, c) = (origin.0 + row, origin.1 + col);
        if grid.set_cell(r, c, true).is_ok() {
            placed += 1;
        }
    }
    if placed < pattern.cells.len() {
        tracing::debug!(
            pattern = pattern.name,
            placed,
            total = pattern.cells.len(),
            "pattern clipped to grid"
        );
    }
    placed
}

/// Clears `grid` and fills roughly a third of its cells from `seed`.
/// The same seed always yields the same board.
pub fn apply_random_pattern(grid: &mut Grid, seed: u32) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            if state % 3 == 0 {
                // In bounds by construction.
                let _ = grid.set_cell(row, col, true);
            }
        }
    }
}

// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use crate::error::GridError;

pub type Result<T> = std::result::Result<T, GridError>;

/// One generation of the automaton: a `rows x cols` board of alive/dead cells
/// with hard edges.
///
/// Cells are stored row-major in a single contiguous buffer, addressed as
/// `row * cols + col`, so every row always has exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: signed(rows),
                cols: signed(cols),
            });
        }
        let cells = allocate(rows, cols)?;
        tracing::trace!(rows, cols, "allocated grid");
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let index = self.index(row, col)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        self.cells[index] = !self.cells[index];
        Ok(self.cells[index])
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Number of alive cells among the up to 8 neighbours of `(row, col)`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    /// Computes the next generation into a freshly allocated grid.
    ///
    /// `self` is never modified; if the new buffer cannot be allocated the
    /// error is returned and the caller keeps the current generation.
    pub fn step(&self) -> Result<Grid> {
        let mut next = allocate(self.rows, self.cols)?;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let count = self.count_neighbors(row, col);

                next[index] = match (self.cells[index], count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }

        let next = Grid {
            rows: self.rows,
            cols: self.cols,
            cells: next,
        };
        tracing::trace!(population = next.population(), "stepped generation");
        Ok(next)
    }

    /// Applies [`step`](Self::step) `generations` times.
    pub fn steps(&self, generations: usize) -> Result<Grid> {
        if generations == 0 {
            return Ok(self.clone());
        }
        let mut current = self.step()?;
        for _ in 1..generations {
            current = current.step()?;
        }
        Ok(current)
    }

    /// Returns a `new_rows x new_cols` grid holding the cells of `self` that
    /// fall inside the new bounds, aligned at `(0, 0)`. Cells outside the old
    /// bounds are dead; cells outside the new bounds are dropped.
    pub fn resize(&self, new_rows: usize, new_cols: usize) -> Result<Grid> {
        let mut resized = Grid::new(new_rows, new_cols)?;

        let keep_rows = self.rows.min(new_rows);
        let keep_cols = self.cols.min(new_cols);
        for row in 0..keep_rows {
            let src = row * self.cols;
            let dst = row * new_cols;
            resized.cells[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }

        tracing::debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            to_rows = new_rows,
            to_cols = new_cols,
            "resized grid"
        );
        Ok(resized)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row: signed(row),
                col: signed(col),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // Neighbour window is clipped to the board, so edge cells see 5 and
    // corner cells see 3.
    fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let top = row.saturating_sub(1);
        let bottom = (row + 1).min(self.rows - 1);
        let left = col.saturating_sub(1);
        let right = (col + 1).min(self.cols - 1);

        let mut count = 0;
        for nr in top..=bottom {
            for nc in left..=right {
                if (nr, nc) != (row, col) && self.cells[nr * self.cols + nc] {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Same layout as a printed board: `1`/`0` per cell, each followed by a space.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{} ", u8::from(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn allocate(rows: usize, cols: usize) -> Result<Vec<bool>> {
    let failure = || GridError::AllocationFailure { rows, cols };
    let len = rows.checked_mul(cols).ok_or_else(failure)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| failure())?;
    cells.resize(len, false);
    Ok(cells)
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// board.rs - Host-facing facade over Grid
//
// Hosts hand over signed integers and nested rows of booleans; this layer
// validates them before anything reaches the engine.

use crate::error::{BoardError, GridError};
use crate::grid::Grid;

pub type Result<T> = std::result::Result<T, BoardError>;

/// A board owned by a host, replaced wholesale on every iteration or resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = dimensions(rows, cols)?;
        Ok(Self {
            grid: Grid::new(rows, cols)?,
        })
    }

    /// Builds a board from rows of cells. Input must be non-empty and
    /// rectangular.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(BoardError::EmptyBoard),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(BoardError::RaggedRow {
                row,
                expected,
                found,
            });
        }

        let mut grid = Grid::new(rows.len(), expected)?;
        for (i, row) in rows.iter().enumerate() {
            for (j, &alive) in row.as_ref().iter().enumerate() {
                if alive {
                    grid.set_cell(i, j, true)?;
                }
            }
        }
        Ok(Self { grid })
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.grid.iter_rows().map(<[bool]>::to_vec).collect()
    }

    pub fn get_m(&self) -> i64 {
        self.grid.rows() as i64
    }

    pub fn get_n(&self) -> i64 {
        self.grid.cols() as i64
    }

    pub fn get_cell(&self, i: i64, j: i64) -> Result<bool> {
        let (row, col) = self.coordinate(i, j)?;
        Ok(self.grid.get_cell(row, col)?)
    }

    /// `value` must be 0 (dead) or 1 (alive).
    pub fn set_cell(&mut self, i: i64, j: i64, value: i64) -> Result<()> {
        let (row, col) = self.coordinate(i, j)?;
        let alive = match value {
            0 => false,
            1 => true,
            other => return Err(BoardError::InvalidCellValue(other)),
        };
        Ok(self.grid.set_cell(row, col, alive)?)
    }

    pub fn toggle_cell(&mut self, i: i64, j: i64) -> Result<bool> {
        let (row, col) = self.coordinate(i, j)?;
        Ok(self.grid.toggle_cell(row, col)?)
    }

    /// Advances one generation. On failure the current board is kept.
    pub fn iterate_once(&mut self) -> Result<()> {
        self.grid = self.grid.step()?;
        Ok(())
    }

    /// On failure the current board is kept.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<()> {
        let (rows, cols) = dimensions(rows, cols)?;
        self.grid = self.grid.resize(rows, cols)?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn coordinate(&self, i: i64, j: i64) -> std::result::Result<(usize, usize), GridError> {
        match (usize::try_from(i), usize::try_from(j)) {
            (Ok(row), Ok(col)) if row < self.grid.rows() && col < self.grid.cols() => Ok((row, col)),
            _ => Err(GridError::OutOfBounds {
                row: i,
                col: j,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            }),
        }
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}

fn dimensions(rows: i64, cols: i64) -> std::result::Result<(usize, usize), GridError> {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok((r, c)),
        _ => Err(GridError::InvalidDimensions { rows, cols }),
    }
}

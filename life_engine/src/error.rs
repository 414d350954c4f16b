// error.rs - Error types for the grid engine and its adapters

use thiserror::Error;

/// Failures reported by [`Grid`](crate::Grid) operations.
///
/// None of these are transient; the grid involved is never left partially
/// mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("could not allocate storage for a {rows}x{cols} grid")]
    AllocationFailure { rows: usize, cols: usize },
}

/// Failures reported by the host-facing [`Board`](crate::Board) adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("board must be non-empty")]
    EmptyBoard,

    #[error("board must be rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell value must be 0 or 1, got {0}")]
    InvalidCellValue(i64),
}

/// Failures while loading or validating a [`LifeConfig`](crate::LifeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

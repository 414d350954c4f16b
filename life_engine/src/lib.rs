//! Conway's Game of Life on a finite board with hard edges.
//!
//! [`Grid`] is the engine: create a board, read and write cells, compute the
//! next generation, and resize while keeping the overlapping cells.
//! [`Board`] adapts it for hosts that pass signed indices and nested rows.
//!
//! ```
//! use life_engine::Grid;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! for col in 1..4 {
//!     grid.set_cell(2, col, true).unwrap();
//! }
//! let next = grid.step().unwrap();
//! assert!(next.get_cell(1, 2).unwrap());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod telemetry;

pub use board::Board;
pub use config::LifeConfig;
pub use error::{BoardError, ConfigError, GridError};
pub use grid::Grid;
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};

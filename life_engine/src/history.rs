// history.rs - Repetition detection over recent generations

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// How many recent generations are remembered.
pub const HISTORY_LEN: usize = 10;

/// Remembers hashes of the last [`HISTORY_LEN`] generations so a driver can
/// stop once the board settles into a still life or short oscillator.
#[derive(Debug, Default, Clone)]
pub struct CycleDetector {
    recent: VecDeque<u64>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and returns `true` if it matches one of the remembered
    /// generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        if self.recent.contains(&hash) {
            return true;
        }
        if self.recent.len() == HISTORY_LEN {
            self.recent.pop_front();
        }
        self.recent.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{apply_pattern, find};

    fn run_until_cycle(mut grid: Grid, limit: usize) -> Option<usize> {
        let mut detector = CycleDetector::new();
        for generation in 0..limit {
            if detector.observe(&grid) {
                return Some(generation);
            }
            grid = grid.step().unwrap();
        }
        None
    }

    #[test]
    fn still_life_is_detected_on_second_observation() {
        let mut grid = Grid::new(4, 4).unwrap();
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set_cell(r, c, true).unwrap();
        }
        assert_eq!(run_until_cycle(grid, 5), Some(1));
    }

    #[test]
    fn blinker_is_detected_after_one_period() {
        let mut grid = Grid::new(5, 5).unwrap();
        apply_pattern(&mut grid, find("Blinker").unwrap(), (2, 1));
        assert_eq!(run_until_cycle(grid, 5), Some(2));
    }

    #[test]
    fn reset_forgets_history() {
        let grid = Grid::new(3, 3).unwrap();
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&grid));
        detector.reset();
        assert!(!detector.observe(&grid));
        assert!(detector.observe(&grid));
    }

    #[test]
    fn only_recent_generations_are_remembered() {
        let mut detector = CycleDetector::new();
        let grids: Vec<Grid> = (1..=HISTORY_LEN + 1)
            .map(|cols| Grid::new(1, cols).unwrap())
            .collect();
        for grid in &grids {
            assert!(!detector.observe(grid));
        }
        // The first grid has been pushed out.
        assert!(!detector.observe(&grids[0]));
    }
}

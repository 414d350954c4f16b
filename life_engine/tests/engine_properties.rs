#![allow(clippy::unwrap_used)]

use life_engine::{Board, BoardError, Grid, GridError};

const SIZES: &[(usize, usize)] = &[(1, 1), (1, 7), (6, 1), (2, 2), (3, 5), (10, 10)];

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = grid.alive_cells().collect();
    cells.sort_unstable();
    cells
}

#[test]
fn new_grids_are_all_dead() {
    for &(rows, cols) in SIZES {
        let grid = Grid::new(rows, cols).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(grid.get_cell(i, j), Ok(false), "{rows}x{cols} at ({i}, {j})");
            }
        }
    }
}

#[test]
fn non_positive_dimensions_are_invalid() {
    assert!(matches!(Grid::new(0, 0), Err(GridError::InvalidDimensions { .. })));
    for (rows, cols) in [(0, 3), (3, -1), (-2, -2), (-1, 4)] {
        assert!(
            matches!(
                Board::new(rows, cols),
                Err(BoardError::Grid(GridError::InvalidDimensions { .. }))
            ),
            "{rows}x{cols}"
        );
    }

    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_cell(1, 1, true).unwrap();
    assert!(matches!(grid.resize(0, 3), Err(GridError::InvalidDimensions { .. })));
    assert!(matches!(grid.resize(3, 0), Err(GridError::InvalidDimensions { .. })));
    assert_eq!(alive(&grid), vec![(1, 1)]);
}

#[test]
fn set_cell_touches_only_its_target() {
    let (rows, cols) = (4, 5);
    for i in 0..rows {
        for j in 0..cols {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.set_cell(i, j, true).unwrap();
            assert_eq!(grid.get_cell(i, j), Ok(true));
            assert_eq!(alive(&grid), vec![(i, j)]);
        }
    }
}

#[test]
fn dead_grid_stays_dead() {
    for &(rows, cols) in SIZES {
        let grid = Grid::new(rows, cols).unwrap();
        let next = grid.step().unwrap();
        assert_eq!((next.rows(), next.cols()), (rows, cols));
        assert_eq!(next.population(), 0);
    }
}

#[test]
fn glider_advances_one_phase() {
    let mut grid = Grid::new(10, 10).unwrap();
    for (i, j) in [(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)] {
        grid.set_cell(i, j, true).unwrap();
    }

    let next = grid.step().unwrap();

    // .#..
    // ..##
    // .##.
    assert_eq!(alive(&next), vec![(0, 1), (1, 2), (1, 3), (2, 1), (2, 2)]);
    assert_eq!(alive(&grid), vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn lone_cell_dies() {
    let mut grid = Grid::new(1, 1).unwrap();
    grid.set_cell(0, 0, true).unwrap();
    assert_eq!(grid.step().unwrap().get_cell(0, 0), Ok(false));
}

#[test]
fn full_two_by_two_survives() {
    let mut grid = Grid::new(2, 2).unwrap();
    for (i, j) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        grid.set_cell(i, j, true).unwrap();
    }
    let next = grid.step().unwrap();
    assert_eq!(next, grid);
    assert_eq!(next.population(), 4);
}

#[test]
fn resize_growth_keeps_origin_block() {
    let mut grid = Grid::new(2, 2).unwrap();
    for (i, j) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        grid.set_cell(i, j, true).unwrap();
    }
    let grown = grid.resize(4, 4).unwrap();
    assert_eq!((grown.rows(), grown.cols()), (4, 4));
    assert_eq!(alive(&grown), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn resize_shrink_drops_cells_outside() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set_cell(3, 3, true).unwrap();
    let shrunk = grid.resize(2, 2).unwrap();
    assert_eq!((shrunk.rows(), shrunk.cols()), (2, 2));
    assert_eq!(shrunk.population(), 0);
    assert_eq!(grid.get_cell(3, 3), Ok(true));
}

#[test]
fn shrink_then_grow_loses_clipped_cells() {
    let mut board = Board::new(10, 10).unwrap();
    for (i, j) in [(0, 2), (1, 0), (1, 2), (2, 1), (2, 2), (6, 7), (7, 7), (8, 7)] {
        board.set_cell(i, j, 1).unwrap();
    }
    board.resize(5, 5).unwrap();
    board.resize(10, 10).unwrap();
    assert_eq!(
        alive(board.grid()),
        vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]
    );
}

#[test]
fn out_of_bounds_access_fails_everywhere() {
    for &(rows, cols) in SIZES {
        let mut grid = Grid::new(rows, cols).unwrap();
        assert!(matches!(grid.get_cell(rows, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.get_cell(0, cols), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.set_cell(rows, 0, true), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.set_cell(0, cols, true), Err(GridError::OutOfBounds { .. })));
        assert_eq!(grid.population(), 0);

        let mut board = Board::from(grid);
        let (m, n) = (rows as i64, cols as i64);
        for (i, j) in [(m, 0), (0, n), (-1, 0), (0, -1), (-1, -1)] {
            assert!(
                matches!(
                    board.get_cell(i, j),
                    Err(BoardError::Grid(GridError::OutOfBounds { .. }))
                ),
                "get ({i}, {j}) on {rows}x{cols}"
            );
            assert!(
                matches!(
                    board.set_cell(i, j, 1),
                    Err(BoardError::Grid(GridError::OutOfBounds { .. }))
                ),
                "set ({i}, {j}) on {rows}x{cols}"
            );
        }
    }
}

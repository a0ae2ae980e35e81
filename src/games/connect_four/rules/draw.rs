//! Tie detection logic for Connect Four.

use super::super::{Grid, WIDTH};
use tracing::instrument;

/// Checks if the board is full.
///
/// Only the top row is inspected: pieces fill columns from the bottom, so a
/// column whose top cell is occupied has no empty cell left.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    (0..WIDTH).all(|column| grid.is_column_full(column))
}

#[cfg(test)]
mod tests {
    use super::super::super::{HEIGHT, Player};
    use super::*;

    fn fill_column(grid: &mut Grid, column: usize) {
        for row in (0..HEIGHT).rev() {
            let player = if (row + column) % 2 == 0 { Player::One } else { Player::Two };
            grid.place(row, column, player);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new()));
    }

    #[test]
    fn test_one_open_column_not_full() {
        let mut grid = Grid::new();
        for column in 0..WIDTH - 1 {
            fill_column(&mut grid, column);
        }
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_full_board() {
        let mut grid = Grid::new();
        for column in 0..WIDTH {
            fill_column(&mut grid, column);
        }
        assert!(is_full(&grid));
    }
}

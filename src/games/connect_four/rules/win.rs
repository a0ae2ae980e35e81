//! Win detection logic for Connect Four.

use super::super::{Cell, Coordinate, Grid, HEIGHT, Player, WIDTH};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

/// Number of contiguous pieces needed to win.
pub const LINE_LENGTH: usize = 4;

/// Direction along which a four-in-a-row is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Orientation {
    /// The (row, column) step between consecutive cells of a line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Builds the four coordinates starting at `origin` along `orientation`.
///
/// Coordinates may fall off the board.
pub fn line_from(origin: Coordinate, orientation: Orientation) -> [Coordinate; LINE_LENGTH] {
    let delta = orientation.delta();
    std::array::from_fn(|i| origin.step(delta, i as isize))
}

fn is_winning(grid: &Grid, line: &[Coordinate; LINE_LENGTH], player: Player) -> bool {
    // Off-board coordinates read as empty, so they never match.
    line.iter()
        .all(|&coord| grid.cell_at(coord) == Cell::Occupied(player))
}

/// Returns the first line of four owned by `player`, scanning origins
/// row by row.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, player: Player) -> Option<[Coordinate; LINE_LENGTH]> {
    let found = (0..HEIGHT)
        .flat_map(|row| (0..WIDTH).map(move |column| Coordinate::from((row, column))))
        .flat_map(|origin| Orientation::iter().map(move |o| line_from(origin, o)))
        .find(|line| is_winning(grid, line, player));
    debug!(?found, "Win scan");
    found
}

/// True iff `player` has four contiguous pieces in any orientation.
pub fn check_win(grid: &Grid, player: Player) -> bool {
    winning_line(grid, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(pieces: &[(usize, usize, Player)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, column, player) in pieces {
            grid.place(row, column, player);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_board() {
        let grid = Grid::new();
        assert!(!check_win(&grid, Player::One));
        assert!(!check_win(&grid, Player::Two));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let grid = grid_with(&[
            (5, 3, Player::Two),
            (5, 4, Player::Two),
            (5, 5, Player::Two),
            (5, 6, Player::Two),
        ]);
        assert!(check_win(&grid, Player::Two));
        assert!(!check_win(&grid, Player::One));
        assert_eq!(
            winning_line(&grid, Player::Two).map(|line| line[0]),
            Some(Coordinate::new(5, 3))
        );
    }

    #[test]
    fn test_vertical_win() {
        let grid = grid_with(&[
            (5, 0, Player::One),
            (4, 0, Player::One),
            (3, 0, Player::One),
            (2, 0, Player::One),
        ]);
        assert!(check_win(&grid, Player::One));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let grid = grid_with(&[
            (2, 0, Player::One),
            (3, 1, Player::One),
            (4, 2, Player::One),
            (5, 3, Player::One),
        ]);
        assert_eq!(
            winning_line(&grid, Player::One),
            Some(line_from(Coordinate::new(2, 0), Orientation::DiagonalDownRight))
        );
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let grid = grid_with(&[
            (2, 6, Player::Two),
            (3, 5, Player::Two),
            (4, 4, Player::Two),
            (5, 3, Player::Two),
        ]);
        assert_eq!(
            winning_line(&grid, Player::Two),
            Some(line_from(Coordinate::new(2, 6), Orientation::DiagonalDownLeft))
        );
    }

    #[test]
    fn test_mixed_owners_do_not_win() {
        let grid = grid_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::Two),
            (5, 3, Player::One),
        ]);
        assert!(!check_win(&grid, Player::One));
    }

    #[test]
    fn test_gap_does_not_win() {
        let grid = grid_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
            (5, 4, Player::One),
        ]);
        assert!(!check_win(&grid, Player::One));
    }

    #[test]
    fn test_three_in_a_row_does_not_win() {
        let grid = grid_with(&[
            (5, 4, Player::One),
            (5, 5, Player::One),
            (5, 6, Player::One),
        ]);
        assert!(!check_win(&grid, Player::One));
    }

    #[test]
    fn test_line_from_steps_off_board() {
        let line = line_from(Coordinate::new(0, 1), Orientation::DiagonalDownLeft);
        assert_eq!(line[3], Coordinate::new(3, -2));
        assert_eq!(line[3].to_indices(), None);
    }
}

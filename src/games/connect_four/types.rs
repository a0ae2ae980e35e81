//! Core domain types for Connect Four.

use derive_more::Display;
use serde::Serialize;
use tracing::{debug, instrument};

/// Number of columns on the board.
pub const WIDTH: usize = 7;

/// Number of rows on the board.
pub const HEIGHT: usize = 6;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(into = "u8")]
pub enum Player {
    /// Player 1 (moves first).
    #[display("1")]
    One,
    /// Player 2.
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric identifier (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A (row, column) pair.
///
/// Signed so that win-line candidates may step past the board edge;
/// such coordinates simply never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({row}, {column})")]
pub struct Coordinate {
    /// Row index, 0 is the top row.
    pub row: isize,
    /// Column index, 0 is the leftmost column.
    pub column: isize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Returns this coordinate moved `steps` times by `(d_row, d_column)`.
    pub fn step(self, (d_row, d_column): (isize, isize), steps: isize) -> Self {
        Self {
            row: self.row + d_row * steps,
            column: self.column + d_column * steps,
        }
    }

    /// Converts to array indices if the coordinate lies on the board.
    pub fn to_indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        (row < HEIGHT && column < WIDTH).then_some((row, column))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row as isize, column as isize)
    }
}

/// The 7x6 Connect Four grid.
///
/// Stored as `HEIGHT` rows of `WIDTH` cells; row 0 is the top and pieces
/// settle toward row `HEIGHT - 1`. Cells never revert to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Returns the bottom-most empty row of `column`, or `None` if it is full.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    #[instrument(skip(self))]
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        assert!(column < WIDTH, "column {column} out of range (0..{WIDTH})");
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.rows[row][column] == Cell::Empty);
        debug!(?row, "Landing row");
        row
    }

    /// Puts `player`'s piece at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board or the cell is occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        assert!(column < WIDTH, "column {column} out of range (0..{WIDTH})");
        assert!(row < HEIGHT, "row {row} out of range (0..{HEIGHT})");
        let cell = &mut self.rows[row][column];
        assert_eq!(*cell, Cell::Empty, "cell ({row}, {column}) already occupied");
        *cell = Cell::Occupied(player);
    }

    /// True iff the top cell of `column` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    pub fn is_column_full(&self, column: usize) -> bool {
        assert!(column < WIDTH, "column {column} out of range (0..{WIDTH})");
        self.rows[0][column] != Cell::Empty
    }

    /// Returns the cell at `coord`, treating anything off the board as empty.
    pub fn cell_at(&self, coord: Coordinate) -> Cell {
        coord
            .to_indices()
            .map_or(Cell::Empty, |(row, column)| self.rows[row][column])
    }

    /// Gets the cell at (`row`, `column`) if it is on the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Returns all rows, top first.
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.rows
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Formats the grid as plain text, one line per row, `.` for empty.
    pub fn display(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(Player::One) => '1',
                        Cell::Occupied(Player::Two) => '2',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

//! Results of handling a column selection.

use super::{Outcome, Player};
use derive_getters::Getters;
use derive_more::Display;

/// A piece that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Display)]
#[display("Player {player} -> ({row}, {column})")]
pub struct Placement {
    /// Row the piece settled in.
    row: usize,
    /// Column it was dropped into.
    column: usize,
    /// Owner of the piece.
    player: Player,
}

impl Placement {
    /// Creates a placement record.
    pub fn new(row: usize, column: usize, player: Player) -> Self {
        Self { row, column, player }
    }
}

/// Why a column selection changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Ignored {
    /// The column has no empty cell.
    #[display("Column index {_0} is full")]
    ColumnFull(usize),
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// What a single call to `handle_move` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Nothing happened.
    Ignored(Ignored),
    /// A piece landed and the turn passed to the other player.
    Placed(Placement),
    /// A piece landed and ended the game.
    GameOver(Outcome),
}

//! Terminal outcomes of a game.

use super::Player;
use derive_more::Display;

/// Outcome of a finished game.
///
/// The display form is the message shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    /// Player completed four in a row.
    #[display("Player {_0} won!")]
    Winner(Player),
    /// Board filled with no winner.
    #[display("It's a tie!")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

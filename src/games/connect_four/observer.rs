//! Notification boundary between the game core and whatever draws it.

use super::{Outcome, Placement, Player};
use serde::Serialize;

/// Receives state changes from a [`GameSession`](super::GameSession).
///
/// Implementors draw pieces, announce results and clear their surface.
/// None of these calls may feed back into the session.
pub trait GameObserver {
    /// A piece landed and should be drawn.
    fn piece_dropped(&mut self, placement: Placement);

    /// The game reached a terminal state.
    fn game_ended(&mut self, outcome: Outcome);

    /// The session was reset; all drawn pieces should be cleared.
    fn reset(&mut self);
}

/// Discards every notification.
impl GameObserver for () {
    fn piece_dropped(&mut self, _placement: Placement) {}

    fn game_ended(&mut self, _outcome: Outcome) {}

    fn reset(&mut self) {}
}

/// A notification as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    /// See [`GameObserver::piece_dropped`].
    PieceDropped {
        /// Row the piece settled in.
        row: usize,
        /// Column it was dropped into.
        column: usize,
        /// Owner of the piece.
        player: Player,
    },
    /// See [`GameObserver::game_ended`].
    GameEnded {
        /// Message shown to the players.
        message: String,
        /// Winner, absent on a tie.
        winner: Option<Player>,
    },
    /// See [`GameObserver::reset`].
    Reset,
}

impl From<Placement> for Notification {
    fn from(placement: Placement) -> Self {
        Notification::PieceDropped {
            row: *placement.row(),
            column: *placement.column(),
            player: *placement.player(),
        }
    }
}

impl From<Outcome> for Notification {
    fn from(outcome: Outcome) -> Self {
        Notification::GameEnded {
            message: outcome.to_string(),
            winner: outcome.winner(),
        }
    }
}

/// Records notifications in order.
impl GameObserver for Vec<Notification> {
    fn piece_dropped(&mut self, placement: Placement) {
        self.push(placement.into());
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.push(outcome.into());
    }

    fn reset(&mut self) {
        self.push(Notification::Reset);
    }
}

//! Connect Four: grid state, rules and turn coordination.

mod action;
mod invariants;
mod observer;
mod phases;
mod rules;
mod session;
mod types;

pub use action::{Ignored, MoveResult, Placement};
pub use invariants::{
    BoardInvariant, GravityInvariant, TurnBalanceInvariant, violated_invariants,
};
pub use observer::{GameObserver, Notification};
pub use phases::Outcome;
pub use rules::{LINE_LENGTH, Orientation, check_win, is_full, line_from, winning_line};
pub use session::{GameSession, TurnState};
pub use types::{Cell, Coordinate, Grid, HEIGHT, Player, WIDTH};

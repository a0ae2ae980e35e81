//! Game rules for Connect Four.
//!
//! Pure functions over a [`Grid`](super::Grid) that decide whether the game
//! has reached a terminal state. Rules are kept apart from board storage so
//! the turn coordinator only composes them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINE_LENGTH, Orientation, check_win, line_from, winning_line};

//! Connect Four rules engine
//!
//! Grid state, win and tie detection, and turn coordination for a
//! two-player game on a fixed 7x6 board.
//!
//! # Architecture
//!
//! - **Grid**: occupancy of every cell, landing-row lookup
//! - **Rules**: four-in-a-row and full-board checks
//! - **Session**: turn alternation, terminal states, reset
//! - **Observer**: the notification boundary any front end implements
//! - **Console**: a terminal front end built on that boundary
//!
//! # Example
//!
//! ```
//! use connect_four::{GameSession, MoveResult, Notification, Outcome, Player};
//!
//! let mut session = GameSession::new(Vec::<Notification>::new());
//! for column in [3, 4, 3, 4, 3, 4] {
//!     session.handle_move(column);
//! }
//! assert_eq!(
//!     session.handle_move(3),
//!     MoveResult::GameOver(Outcome::Winner(Player::One))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{
    ConsoleRenderer, Input, InputError, JsonRenderer, ReplayError, column_index, parse_input,
    play_script, run_interactive, run_replay,
};

// Crate-level exports - Game types
pub use games::connect_four::{
    BoardInvariant, Cell, Coordinate, GameObserver, GameSession, GravityInvariant, Grid, HEIGHT,
    Ignored, LINE_LENGTH, MoveResult, Notification, Orientation, Outcome, Placement, Player,
    TurnBalanceInvariant, TurnState, WIDTH, check_win, is_full, line_from, violated_invariants,
    winning_line,
};

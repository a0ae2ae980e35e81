//! Board invariants for Connect Four.
//!
//! Properties every grid reached through alternating play must satisfy.
//! The session checks them after each applied move in debug builds.

use super::{Cell, Grid, HEIGHT, Player, WIDTH};
use tracing::warn;

/// A property of the grid that alternating play never breaks.
pub trait BoardInvariant {
    /// True if the grid satisfies the property.
    fn holds(grid: &Grid) -> bool;

    /// Short statement of the property.
    fn description() -> &'static str;
}

/// Descriptions of every board invariant `grid` breaks; empty when sound.
pub fn violated_invariants(grid: &Grid) -> Vec<&'static str> {
    [
        (GravityInvariant::holds(grid), GravityInvariant::description()),
        (TurnBalanceInvariant::holds(grid), TurnBalanceInvariant::description()),
    ]
    .into_iter()
    .filter_map(|(holds, description)| (!holds).then_some(description))
    .collect()
}

/// Gravity: no empty cell sits beneath an occupied one.
///
/// This is what makes the top-row full-board check exact.
pub struct GravityInvariant;

impl BoardInvariant for GravityInvariant {
    fn holds(grid: &Grid) -> bool {
        let rows = grid.rows();
        for column in 0..WIDTH {
            for row in 1..HEIGHT {
                if rows[row - 1][column] != Cell::Empty && rows[row][column] == Cell::Empty {
                    warn!(row, column, "Empty cell beneath a piece");
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "Pieces rest on the bottom or on another piece"
    }
}

/// Turn balance: player 1 has as many pieces as player 2, or one more.
pub struct TurnBalanceInvariant;

impl BoardInvariant for TurnBalanceInvariant {
    fn holds(grid: &Grid) -> bool {
        let one = grid.count(Player::One);
        let two = grid.count(Player::Two);
        let valid = one == two || one == two + 1;
        if !valid {
            warn!(one, two, "Piece counts out of balance");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate, player 1 first"
    }
}

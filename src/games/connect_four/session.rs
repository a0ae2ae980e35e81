//! Turn coordination for a single Connect Four game.

use super::invariants::violated_invariants;
use super::rules::{check_win, is_full};
use super::{GameObserver, Grid, Ignored, MoveResult, Outcome, Placement, Player};
use tracing::{debug, info, instrument, warn};

/// Where the game stands between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given player to choose a column.
    AwaitingMove(Player),
    /// The game ended; moves are ignored until reset.
    GameOver(Outcome),
}

/// One game: the grid, whose turn it is, and the observer that draws it.
///
/// Each session owns its state outright, so any number can run side by side.
#[derive(Debug)]
pub struct GameSession<O> {
    grid: Grid,
    state: TurnState,
    observer: O,
}

impl<O: GameObserver> GameSession<O> {
    /// Creates a fresh game with player 1 to move.
    pub fn new(observer: O) -> Self {
        Self {
            grid: Grid::new(),
            state: TurnState::AwaitingMove(Player::One),
            observer,
        }
    }

    /// Handles a column selection for the player to move.
    ///
    /// A full column, or any selection after the game ended, is ignored
    /// without notifying the observer. A winning move that also fills the
    /// board is reported as a win.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not a column of the board.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn handle_move(&mut self, column: usize) -> MoveResult {
        let player = match self.state {
            TurnState::AwaitingMove(player) => player,
            TurnState::GameOver(_) => {
                warn!("Move after game over ignored");
                return MoveResult::Ignored(Ignored::GameOver);
            }
        };

        let Some(row) = self.grid.find_landing_row(column) else {
            warn!(column, "Column full, move ignored");
            return MoveResult::Ignored(Ignored::ColumnFull(column));
        };

        self.grid.place(row, column, player);
        let placement = Placement::new(row, column, player);
        debug!(%placement, "Piece placed");
        debug_assert!(
            violated_invariants(&self.grid).is_empty(),
            "board invariants violated {:?}:\n{}",
            violated_invariants(&self.grid),
            self.grid.display()
        );
        self.observer.piece_dropped(placement);

        let outcome = if check_win(&self.grid, player) {
            Some(Outcome::Winner(player))
        } else if is_full(&self.grid) {
            Some(Outcome::Tie)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.state = TurnState::GameOver(outcome);
                self.observer.game_ended(outcome);
                MoveResult::GameOver(outcome)
            }
            None => {
                self.state = TurnState::AwaitingMove(player.opponent());
                MoveResult::Placed(placement)
            }
        }
    }

    /// Clears the grid, gives the move back to player 1 and tells the observer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.grid = Grid::new();
        self.state = TurnState::AwaitingMove(Player::One);
        self.observer.reset();
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingMove(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::AwaitingMove(_) => None,
            TurnState::GameOver(outcome) => Some(outcome),
        }
    }

    /// Returns true once a win or tie has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the session, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<O: GameObserver + Default> Default for GameSession<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

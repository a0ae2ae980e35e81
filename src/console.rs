//! Console front end: renderers, input parsing and the game loops.

use crate::config::GameConfig;
use crate::games::connect_four::{
    GameObserver, GameSession, HEIGHT, MoveResult, Notification, Outcome, Placement, Player,
    TurnState, WIDTH,
};
use crossterm::style::{Color, Stylize, style};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Input
// ─────────────────────────────────────────────────────────────

/// A line typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Drop a piece in this column (0-based).
    Column(usize),
    /// Leave the game.
    Quit,
}

/// Input that never reaches the game core.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not a number.
    #[display("'{_0}' is not a column number")]
    NotANumber(#[error(not(source))] String),
    /// A number naming no column.
    #[display("Column {_0} is off the board (choose 1-{})", WIDTH)]
    OutOfRange(#[error(not(source))] usize),
}

/// Converts a 1-based column number to a column index.
pub fn column_index(number: usize) -> Result<usize, InputError> {
    if (1..=WIDTH).contains(&number) {
        Ok(number - 1)
    } else {
        Err(InputError::OutOfRange(number))
    }
}

/// Parses a typed line: a 1-based column number, or `q`/`quit`.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Input::Quit);
    }
    let number = line
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    column_index(number).map(Input::Column)
}

// ─────────────────────────────────────────────────────────────
//  Console renderer
// ─────────────────────────────────────────────────────────────

/// Draws the board as text and talks to the players.
///
/// Keeps its own copy of drawn pieces; it learns about the game only
/// through [`GameObserver`] calls.
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    out: W,
    config: GameConfig,
    pieces: [[Option<Player>; WIDTH]; HEIGHT],
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, config: GameConfig) -> Self {
        Self {
            out,
            config,
            pieces: [[None; WIDTH]; HEIGHT],
        }
    }

    fn symbol(&self, piece: Option<Player>) -> String {
        let (symbol, color) = match piece {
            None => return self.config.empty_symbol().clone(),
            Some(Player::One) => (self.config.player_one_symbol(), Color::Red),
            Some(Player::Two) => (self.config.player_two_symbol(), Color::Blue),
        };
        if *self.config.color() {
            style(symbol.as_str()).with(color).bold().to_string()
        } else {
            symbol.clone()
        }
    }

    /// Writes the column numbers and every row of the board.
    pub fn draw_board(&mut self) -> io::Result<()> {
        let header = (1..=WIDTH).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(self.out)?;
        writeln!(self.out, "{header}")?;
        for row in self.pieces {
            let line = row
                .iter()
                .map(|&piece| self.symbol(piece))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Asks `player` for a column.
    pub fn prompt_move(&mut self, player: Player) -> io::Result<()> {
        let symbol = self.symbol(Some(player));
        write!(
            self.out,
            "Player {player} ({symbol}), choose a column (1-{WIDTH}, q to quit): "
        )?;
        self.out.flush()
    }

    /// Asks whether to start another game.
    pub fn prompt_play_again(&mut self) -> io::Result<()> {
        write!(self.out, "Would you like to play again? [y/n]: ")?;
        self.out.flush()
    }

    /// Writes a one-line message.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    /// Returns the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn announce(&mut self, outcome: Outcome) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{outcome}")?;
        writeln!(self.out, "Thanks for playing Connect 4!")?;
        self.out.flush()
    }
}

impl<W: Write> GameObserver for ConsoleRenderer<W> {
    fn piece_dropped(&mut self, placement: Placement) {
        self.pieces[*placement.row()][*placement.column()] = Some(*placement.player());
        if let Err(e) = self.draw_board() {
            warn!(error = %e, "Failed to draw board");
        }
    }

    fn game_ended(&mut self, outcome: Outcome) {
        let delay = Duration::from_millis(*self.config.end_game_delay_ms());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        if let Err(e) = self.announce(outcome) {
            warn!(error = %e, "Failed to announce outcome");
        }
    }

    fn reset(&mut self) {
        self.pieces = [[None; WIDTH]; HEIGHT];
        if let Err(e) = self.notice("New game!").and_then(|()| self.draw_board()) {
            warn!(error = %e, "Failed to clear board");
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  JSON renderer
// ─────────────────────────────────────────────────────────────

/// Writes each notification as one line of JSON.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, notification: Notification) {
        let written = serde_json::to_writer(&mut self.out, &notification)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            warn!(error = %e, ?notification, "Failed to write notification");
        }
    }
}

impl<W: Write> GameObserver for JsonRenderer<W> {
    fn piece_dropped(&mut self, placement: Placement) {
        self.emit(placement.into());
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.emit(outcome.into());
    }

    fn reset(&mut self) {
        self.emit(Notification::Reset);
    }
}

// ─────────────────────────────────────────────────────────────
//  Game loops
// ─────────────────────────────────────────────────────────────

fn is_yes(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Plays games interactively until the players quit or input ends.
///
/// Returns the renderer so callers can inspect what was written.
#[instrument(skip_all)]
pub fn run_interactive<R, W>(config: GameConfig, input: R, out: W) -> io::Result<ConsoleRenderer<W>>
where
    R: BufRead,
    W: Write,
{
    info!("Starting interactive game");
    let mut session = GameSession::new(ConsoleRenderer::new(out, config));
    session.observer_mut().draw_board()?;
    let mut lines = input.lines();

    loop {
        match session.state() {
            TurnState::AwaitingMove(player) => {
                session.observer_mut().prompt_move(player)?;
                let Some(line) = lines.next().transpose()? else {
                    break;
                };
                match parse_input(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Column(column)) => {
                        if let MoveResult::Ignored(reason) = session.handle_move(column) {
                            debug!(%reason, "Move ignored");
                            let message = format!("Column {} is full, pick another.", column + 1);
                            session.observer_mut().notice(&message)?;
                        }
                    }
                    Err(e) => session.observer_mut().notice(&e.to_string())?,
                }
            }
            TurnState::GameOver(_) => {
                session.observer_mut().prompt_play_again()?;
                let Some(line) = lines.next().transpose()? else {
                    break;
                };
                match is_yes(&line) {
                    Some(true) => session.reset(),
                    Some(false) => break,
                    None => session.observer_mut().notice("Please answer y or n.")?,
                }
            }
        }
    }

    session.observer_mut().notice("Goodbye!")?;
    Ok(session.into_observer())
}

/// Plays a fixed list of 1-based column numbers through a fresh session.
///
/// Every number is validated before any move is made. Numbers after the
/// game ends are fed in anyway and ignored by the session.
#[instrument(skip(observer))]
pub fn play_script<O: GameObserver>(
    observer: O,
    columns: &[usize],
) -> Result<GameSession<O>, InputError> {
    let columns = columns
        .iter()
        .map(|&number| column_index(number))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = GameSession::new(observer);
    for column in columns {
        let result = session.handle_move(column);
        debug!(column, ?result, "Scripted move");
    }
    Ok(session)
}

/// Failure while replaying scripted moves.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A column number named no column.
    #[display("{_0}")]
    Input(InputError),
    /// Writing the result failed.
    #[display("Output failed: {_0}")]
    Io(io::Error),
}

/// Replays 1-based column numbers and writes the result to `out`.
///
/// With `json` set, every notification is written as a JSON line; otherwise
/// the board is drawn without the end-of-game pause and an unfinished game
/// is reported as still in progress.
#[instrument(skip(config, out))]
pub fn run_replay<W: Write>(
    config: GameConfig,
    json: bool,
    columns: &[usize],
    mut out: W,
) -> Result<Option<Outcome>, ReplayError> {
    if json {
        return Ok(play_script(JsonRenderer::new(out), columns)?.outcome());
    }

    let renderer = ConsoleRenderer::new(&mut out, config.with_end_game_delay_ms(0));
    let outcome = play_script(renderer, columns)?.outcome();
    if outcome.is_none() {
        writeln!(out, "Game still in progress.")?;
    }
    info!(?outcome, "Replay finished");
    Ok(outcome)
}

//! The match runner: owns the board, drives the turn cycle, applies the
//! rules.
//!
//! A runner moves through three logical states: idle after construction, in
//! progress while [`run`](MatchRunner::run) executes the turn loop, and
//! finished once an outcome is determined and the players notified. One
//! runner can execute many independent matches back to back; only the board
//! is rebuilt between runs, the player/side bindings persist.

use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::{error, info, trace};

use crate::board::{Board, Cell, SIDES};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::logger::init_logger;
use crate::player::Player;
use crate::rules;

/// The result of a completed match: a win for one side, or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given side completed a line.
    Win(Cell),
    /// The board filled up with no complete line.
    Draw,
}

impl Outcome {
    /// The winning side, or `None` for a draw.
    pub fn winner(&self) -> Option<Cell> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{} win", rules::side_name(*side)),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Simulates noughts-and-crosses matches between two players.
///
/// The runner owns the authoritative board and mutates it only through
/// validated moves. Players are held as trait objects and interacted with
/// exclusively through the [`Player`] capability.
pub struct MatchRunner {
    board: Board,
    players: Vec<Box<dyn Player>>,
    config: MatchConfig,
}

impl std::fmt::Debug for MatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRunner")
            .field("board", &self.board)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MatchRunner {
    /// Create a runner for the given players.
    ///
    /// The board side length comes from `config`. When `config` enables file
    /// logging, the global file logger is initialized here.
    ///
    /// # Errors
    /// Returns [`MatchError::PlayerCount`] unless exactly two players are
    /// supplied.
    pub fn new(
        players: Vec<Box<dyn Player>>,
        config: MatchConfig,
    ) -> Result<MatchRunner, MatchError> {
        if config.log {
            init_logger();
        }
        trace!(?config);

        let mut runner = MatchRunner {
            board: Board::new(config.board_size),
            players: Vec::new(),
            config,
        };
        runner.set_players(players)?;
        Ok(runner)
    }

    /// Replace the game players.
    ///
    /// Each player is assigned a side from [`SIDES`] in list order. This
    /// binding is deterministic, persists across repeated [`run`](Self::run)
    /// calls, and is never affected by turn-order shuffling.
    ///
    /// # Errors
    /// Returns [`MatchError::PlayerCount`] if the number of players does not
    /// match the number of sides.
    pub fn set_players(&mut self, players: Vec<Box<dyn Player>>) -> Result<(), MatchError> {
        if players.len() != SIDES.len() {
            return Err(MatchError::PlayerCount {
                expected: SIDES.len(),
                actual: players.len(),
            });
        }
        self.players = players;
        for (player, side) in self.players.iter_mut().zip(SIDES) {
            player.assign_side(side);
        }
        Ok(())
    }

    /// The current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Execute a single match.
    ///
    /// The board is reset to empty, every player is notified via
    /// [`Player::start`] (in the collection's current order), the turn loop
    /// runs to termination, and every player is notified via
    /// [`Player::finish`] with the outcome.
    ///
    /// # Errors
    /// Returns [`MatchError::IllegalMove`] if a player returns an occupied or
    /// out-of-range coordinate. The match is aborted and `finish` is not
    /// called.
    pub fn run(&mut self) -> Result<Outcome, MatchError> {
        self.board.reset();

        for player in &mut self.players {
            player.start();
        }

        let outcome = self.play()?;

        for player in &mut self.players {
            player.finish(outcome);
        }

        Ok(outcome)
    }

    /// The turn loop: visit players in a repeating cycle, one move per visit.
    ///
    /// Each move consumes one empty cell, so the loop terminates within n²
    /// moves.
    fn play(&mut self) -> Result<Outcome, MatchError> {
        if self.config.shuffle {
            // Turn order only; the side each player holds was fixed in
            // `set_players`.
            self.players.shuffle(&mut thread_rng());
        }

        let mut current = 0usize;
        loop {
            trace!(player = current, "requesting move");
            let snapshot = self.board.clone();
            let mov = self.players[current].choose_move(&snapshot);

            if !rules::valid_move(&self.board, mov) {
                error!(%mov, player = current, "invalid move");
                return Err(MatchError::IllegalMove(mov));
            }

            let side = self.players[current].side();
            self.board.set(mov, side);

            if rules::winning_move(&self.board, mov) {
                info!(
                    "{}\nGame over: {}",
                    rules::board_str(&self.board),
                    Outcome::Win(side)
                );
                return Ok(Outcome::Win(side));
            }
            if rules::board_full(&self.board) {
                info!("{}\nGame over: Draw", rules::board_str(&self.board));
                return Ok(Outcome::Draw);
            }

            current = (current + 1) % self.players.len();
        }
    }
}

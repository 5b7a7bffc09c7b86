//! # Noughts
//!
//! A modular Rust crate for simulating n-by-n noughts-and-crosses matches between pluggable players.
//!
//! It provides:
//! - The rules of the game as pure functions over a board snapshot ([`rules`])
//! - Match execution via [`MatchRunner`](crate::match_runner::MatchRunner)
//! - The [`Player`](crate::player::Player) capability trait, with built-in
//!   [`ScriptedPlayer`](crate::player::ScriptedPlayer) and
//!   [`RandomPlayer`](crate::player::RandomPlayer) implementations
//!
//! A match alternates turns between two players bound to opposing sides. The
//! runner owns the board; players only ever see snapshots and answer with a
//! coordinate pair. Any board size n >= 1 is supported, with win lines
//! generalized to full rows, columns, and both diagonals of length n.
//!
//! # Documentation Overview
//!
//! - For the rules engine (legality, win detection, rendering), see the [`rules`] module.
//! - For driving a match and its outcome type, see the [`match_runner`] module.
//! - For implementing custom players, see the [`Player`](crate::player::Player) trait.
//! - For configuring board size, turn-order shuffling, and file logging, see
//!   [`MatchConfig`](crate::config::MatchConfig).
//!
//! Logging uses the [`tracing`] facade: with no subscriber installed the
//! runner is silent, and [`MatchConfig::with_log`](crate::config::MatchConfig::with_log)
//! opts into a file subscriber.
//!
//! # Usage Example
//!
//! Running a scripted 3x3 match in which the first player takes the main
//! diagonal:
//!
//! ```
//! use noughts::prelude::*;
//!
//! fn main() -> Result<(), MatchError> {
//!     let first = ScriptedPlayer::new([Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)]);
//!     let second = ScriptedPlayer::new([Move::new(0, 1), Move::new(1, 0)]);
//!
//!     let config = MatchConfig::new().with_board_size(3);
//!     let mut runner = MatchRunner::new(vec![Box::new(first), Box::new(second)], config)?;
//!
//!     let outcome = runner.run()?;
//!     assert_eq!(outcome, Outcome::Win(NOUGHT));
//!     println!("{}", noughts::rules::board_str(runner.board()));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Player Requirements
//!
//! - `choose_move` must return a legal move: an illegal move is treated as a
//!   defect in the player and aborts the match with
//!   [`MatchError::IllegalMove`](crate::error::MatchError::IllegalMove)
//! - A player that never returns stalls the match; bounding search time is
//!   the player's responsibility
#![warn(missing_docs)]

pub mod board;
pub mod config;
pub mod error;
mod logger;
pub mod match_runner;
pub mod player;
pub mod rules;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use noughts::prelude::*;
/// ```
///
/// Includes:
/// - [`Board`](crate::board::Board), [`Move`](crate::board::Move) and the cell constants
/// - [`MatchConfig`](crate::config::MatchConfig)
/// - [`MatchRunner`](crate::match_runner::MatchRunner) and [`Outcome`](crate::match_runner::Outcome)
/// - [`Player`](crate::player::Player) and the built-in players
pub mod prelude {
    pub use crate::board::{Board, Cell, Move, CROSS, EMPTY, NOUGHT, SIDES};
    pub use crate::config::MatchConfig;
    pub use crate::error::MatchError;
    pub use crate::match_runner::{MatchRunner, Outcome};
    pub use crate::player::{Player, RandomPlayer, ScriptedPlayer};
}

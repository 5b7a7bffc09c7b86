//! The player capability the match runner depends on, plus two reference
//! implementations.
//!
//! Anything that can be bound to a side, asked for moves, and notified of the
//! match lifecycle is a player. The runner holds players as trait objects and
//! assumes nothing beyond this trait; human frontends, search agents, and
//! scripted stand-ins all plug in the same way.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

use crate::board::{Board, Cell, Move, EMPTY};
use crate::match_runner::Outcome;
use crate::rules;

/// The contract between the match runner and a player.
///
/// The runner calls [`assign_side`](Player::assign_side) once per binding,
/// [`start`](Player::start) before each match, [`choose_move`](Player::choose_move)
/// once per turn, and [`finish`](Player::finish) when the match ends normally.
/// The board passed to `choose_move` is a snapshot: mutating it (after
/// cloning) never affects the authoritative board.
pub trait Player {
    /// Bind this player to a side for the upcoming matches.
    fn assign_side(&mut self, side: Cell);

    /// The side this player was bound to.
    fn side(&self) -> Cell;

    /// Notification that a match is about to start.
    fn start(&mut self) {}

    /// Choose the next move for the given board snapshot.
    ///
    /// Returning an occupied or out-of-range coordinate is a contract
    /// violation and aborts the match.
    fn choose_move(&mut self, board: &Board) -> Move;

    /// Notification that the match ended with `outcome`.
    fn finish(&mut self, _outcome: Outcome) {}
}

/// A player that replays a fixed sequence of moves.
///
/// Useful for tests and reproducing positions. Asking for a move once the
/// script is exhausted is a defect in the script and panics.
#[derive(Debug)]
pub struct ScriptedPlayer {
    side: Cell,
    script: VecDeque<Move>,
}

impl ScriptedPlayer {
    /// Create a player that will play `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        ScriptedPlayer {
            side: EMPTY,
            script: moves.into_iter().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn assign_side(&mut self, side: Cell) {
        self.side = side;
    }

    fn side(&self) -> Cell {
        self.side
    }

    fn choose_move(&mut self, _board: &Board) -> Move {
        self.script.pop_front().expect("scripted player ran out of moves")
    }
}

/// A player that picks uniformly among the empty cells.
#[derive(Debug)]
pub struct RandomPlayer {
    side: Cell,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a random player seeded from system entropy.
    pub fn new() -> Self {
        RandomPlayer {
            side: EMPTY,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a random player with a fixed seed, for reproducible matches.
    pub fn from_seed(seed: u64) -> Self {
        RandomPlayer {
            side: EMPTY,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn assign_side(&mut self, side: Cell) {
        self.side = side;
    }

    fn side(&self) -> Cell {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        let candidates = rules::empty_cells(board);
        // The runner never requests a move on a full board.
        *candidates
            .choose(&mut self.rng)
            .expect("no empty cell to choose from")
    }
}

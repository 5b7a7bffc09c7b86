//! The game board and the values it holds.
//!
//! Cells are plain signed integers so that a complete line of one side sums
//! to `n` or `-n`. The win check in [`crate::rules`] relies on this encoding,
//! as does [`crate::rules::opponent`], which is simple negation.

use std::fmt;

/// A single cell value. One of [`EMPTY`], [`NOUGHT`] or [`CROSS`].
///
/// Side values double as cell values: writing a player's side into a cell is
/// a plain assignment.
pub type Cell = i8;

/// An unclaimed cell.
pub const EMPTY: Cell = 0;
/// The noughts (`o`) side.
pub const NOUGHT: Cell = 1;
/// The crosses (`x`) side.
pub const CROSS: Cell = -1;

/// The fixed list of sides, in the order they are assigned to players.
pub const SIDES: [Cell; 2] = [NOUGHT, CROSS];

/// A move: the zero-based coordinates of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Move {
    /// Create a move at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An n-by-n game board.
///
/// The side length is fixed at construction. The authoritative board is owned
/// by the match runner and mutated only through validated moves; players
/// receive snapshots, which they are free to clone and mutate while exploring
/// candidate moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-[`EMPTY`] board of side length `n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "board side length must be at least 1");
        Board {
            n,
            cells: vec![EMPTY; n * n],
        }
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.n && col < self.n, "cell out of bounds");
        self.cells[row * self.n + col]
    }

    /// Write `value` at the cell named by `mov`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, mov: Move, value: Cell) {
        assert!(mov.row < self.n && mov.col < self.n, "cell out of bounds");
        self.cells[mov.row * self.n + mov.col] = value;
    }

    /// Reset every cell to [`EMPTY`].
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.n)
    }
}

//! The rules of the game, as pure functions over a board snapshot.
//!
//! Nothing in this module holds state or logs; every function is total over
//! valid boards, which lets both the match runner and move-searching players
//! share it freely.

use crate::board::{Board, Cell, Move, CROSS, EMPTY, NOUGHT};

/// The side of the opponent.
pub fn opponent(side: Cell) -> Cell {
    -side
}

/// Every coordinate currently holding [`EMPTY`], in row-major order.
pub fn empty_cells(board: &Board) -> Vec<Move> {
    let n = board.size();
    let mut cells = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if board.get(row, col) == EMPTY {
                cells.push(Move::new(row, col));
            }
        }
    }
    cells
}

/// Whether `mov` names an empty cell on `board`.
///
/// Out-of-range coordinates are absent from [`empty_cells`] and therefore
/// invalid; no separate bounds check is needed.
pub fn valid_move(board: &Board, mov: Move) -> bool {
    empty_cells(board).contains(&mov)
}

/// Whether `mov` completed a winning line. `board` is the state *after* the
/// move has been applied.
///
/// A line of n cells is complete when its signed sum has absolute value n,
/// which the ±1 side encoding only permits when all n cells hold the same
/// side. Only the four lines through `mov` can have changed: its row, its
/// column, and the diagonals when `mov` lies on them.
pub fn winning_move(board: &Board, mov: Move) -> bool {
    let n = board.size();
    let target = n as i32;

    let row_sum: i32 = (0..n).map(|col| i32::from(board.get(mov.row, col))).sum();
    if row_sum.abs() == target {
        return true;
    }

    let col_sum: i32 = (0..n).map(|row| i32::from(board.get(row, mov.col))).sum();
    if col_sum.abs() == target {
        return true;
    }

    if mov.row == mov.col {
        let diag_sum: i32 = (0..n).map(|i| i32::from(board.get(i, i))).sum();
        if diag_sum.abs() == target {
            return true;
        }
    }

    if mov.row == (n - 1) - mov.col {
        let anti_sum: i32 = (0..n).map(|i| i32::from(board.get(i, (n - 1) - i))).sum();
        if anti_sum.abs() == target {
            return true;
        }
    }

    false
}

/// Whether no empty cell remains.
pub fn board_full(board: &Board) -> bool {
    empty_cells(board).is_empty()
}

/// The single-character display token for a cell value.
///
/// Unrecognized values render as `'?'` rather than erroring; display is
/// diagnostic, not authoritative.
pub fn token(value: Cell) -> char {
    match value {
        EMPTY => ' ',
        NOUGHT => 'o',
        CROSS => 'x',
        _ => '?',
    }
}

/// The display name for a side (or cell) value.
pub fn side_name(value: Cell) -> &'static str {
    match value {
        EMPTY => " ",
        NOUGHT => "Noughts",
        CROSS => "Crosses",
        _ => "?",
    }
}

/// Render a board for human-readable output: cells in a row joined by `|`,
/// rows joined by newlines.
pub fn board_str(board: &Board) -> String {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| token(cell).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

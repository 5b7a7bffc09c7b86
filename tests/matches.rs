use noughts::prelude::*;
use noughts::rules;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    fmt,
    layer::{Context, Filter, SubscriberExt},
    Layer, Registry,
};

struct CustomLevelFilter;
impl<S> Filter<S> for CustomLevelFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        meta.level() <= &Level::INFO
    }
}

fn init_logger() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_target(false);

    let reg = Registry::default().with(
        fmt::layer()
            .event_format(format)
            .with_filter(CustomLevelFilter),
    );

    let _ = tracing::subscriber::set_global_default(reg);
}

/// Scripted test player that records its lifecycle into a shared journal.
struct JournalingPlayer {
    name: &'static str,
    side: Cell,
    script: VecDeque<Move>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl JournalingPlayer {
    fn new(
        name: &'static str,
        moves: &[(usize, usize)],
        journal: Rc<RefCell<Vec<String>>>,
    ) -> Box<Self> {
        Box::new(JournalingPlayer {
            name,
            side: EMPTY,
            script: moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
            journal,
        })
    }
}

impl Player for JournalingPlayer {
    fn assign_side(&mut self, side: Cell) {
        self.side = side;
    }

    fn side(&self) -> Cell {
        self.side
    }

    fn start(&mut self) {
        self.journal.borrow_mut().push(format!("{}:start", self.name));
    }

    fn choose_move(&mut self, _board: &Board) -> Move {
        self.journal.borrow_mut().push(format!("{}:move", self.name));
        self.script.pop_front().expect("script exhausted")
    }

    fn finish(&mut self, outcome: Outcome) {
        self.journal
            .borrow_mut()
            .push(format!("{}:finish:{}", self.name, outcome));
    }
}

/// Test player that always takes the first empty cell, reusable across runs.
struct FirstEmptyPlayer {
    name: &'static str,
    side: Cell,
    journal: Rc<RefCell<Vec<String>>>,
}

impl Player for FirstEmptyPlayer {
    fn assign_side(&mut self, side: Cell) {
        self.side = side;
    }

    fn side(&self) -> Cell {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        self.journal.borrow_mut().push(self.name.to_string());
        rules::empty_cells(board)[0]
    }
}

#[test]
fn diagonal_win_end_to_end() {
    init_logger();

    let journal = Rc::new(RefCell::new(vec![]));
    let a = JournalingPlayer::new("A", &[(0, 0), (1, 1), (2, 2)], journal.clone());
    let b = JournalingPlayer::new("B", &[(0, 1), (1, 0)], journal.clone());

    let mut runner = MatchRunner::new(vec![a, b], MatchConfig::new()).unwrap();
    let outcome = runner.run().unwrap();

    assert_eq!(outcome, Outcome::Win(NOUGHT));
    assert_eq!(outcome.winner(), Some(1));

    // Start notifications in supplied order, strict alternation, then both
    // players told the winner.
    let journal = journal.borrow();
    assert_eq!(
        *journal,
        vec![
            "A:start",
            "B:start",
            "A:move",
            "B:move",
            "A:move",
            "B:move",
            "A:move",
            "A:finish:Noughts win",
            "B:finish:Noughts win",
        ]
    );
}

#[test]
fn known_draw_sequence_ends_in_draw() {
    init_logger();

    let journal = Rc::new(RefCell::new(vec![]));
    let a = JournalingPlayer::new(
        "A",
        &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
        journal.clone(),
    );
    let b = JournalingPlayer::new("B", &[(0, 1), (1, 1), (1, 2), (2, 0)], journal.clone());

    let mut runner = MatchRunner::new(vec![a, b], MatchConfig::new()).unwrap();
    let outcome = runner.run().unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(outcome.winner(), None);
    assert!(rules::board_full(runner.board()));
    assert!(journal.borrow().contains(&"A:finish:Draw".to_string()));
    assert!(journal.borrow().contains(&"B:finish:Draw".to_string()));
}

#[test]
fn illegal_move_aborts_without_finish() {
    init_logger();

    let journal = Rc::new(RefCell::new(vec![]));
    let a = JournalingPlayer::new("A", &[(0, 0)], journal.clone());
    let b = JournalingPlayer::new("B", &[(0, 0)], journal.clone());

    let mut runner = MatchRunner::new(vec![a, b], MatchConfig::new()).unwrap();
    let err = runner.run().unwrap_err();

    assert_eq!(err, MatchError::IllegalMove(Move::new(0, 0)));
    // Exactly one move landed on the board.
    assert_eq!(rules::empty_cells(runner.board()).len(), 8);
    // Both players were started, neither was told the match finished.
    let journal = journal.borrow();
    assert_eq!(
        *journal,
        vec!["A:start", "B:start", "A:move", "B:move"]
    );
}

#[test]
fn turn_order_is_stable_across_runs_without_shuffle() {
    init_logger();

    let journal = Rc::new(RefCell::new(vec![]));
    let a = Box::new(FirstEmptyPlayer {
        name: "A",
        side: EMPTY,
        journal: journal.clone(),
    });
    let b = Box::new(FirstEmptyPlayer {
        name: "B",
        side: EMPTY,
        journal: journal.clone(),
    });

    let mut runner = MatchRunner::new(vec![a, b], MatchConfig::new()).unwrap();

    let first = runner.run().unwrap();
    let first_order = journal.borrow().clone();
    journal.borrow_mut().clear();

    let second = runner.run().unwrap();
    let second_order = journal.borrow().clone();

    assert_eq!(first, second);
    assert_eq!(first_order, second_order);
    assert_eq!(first_order[0], "A");
    for pair in first_order.windows(2) {
        assert_ne!(pair[0], pair[1], "players must alternate");
    }
}

#[test]
fn shuffled_matches_still_respect_side_bindings() {
    init_logger();

    // Whoever moves first, sides were bound at set_players time, so the
    // winner of a first-empty-cell game on 3x3 is always the first mover's
    // side as reported by the outcome, and both sides appear on the board.
    let journal = Rc::new(RefCell::new(vec![]));
    let a = Box::new(FirstEmptyPlayer {
        name: "A",
        side: EMPTY,
        journal: journal.clone(),
    });
    let b = Box::new(FirstEmptyPlayer {
        name: "B",
        side: EMPTY,
        journal: journal.clone(),
    });

    let config = MatchConfig::new().with_shuffle(true);
    let mut runner = MatchRunner::new(vec![a, b], config).unwrap();
    let outcome = runner.run().unwrap();

    let winner = outcome.winner().expect("first-empty play on 3x3 always produces a winner");
    assert!(SIDES.contains(&winner));

    let mut seen = vec![];
    for row in 0..3 {
        for col in 0..3 {
            let cell = runner.board().get(row, col);
            if cell != EMPTY && !seen.contains(&cell) {
                seen.push(cell);
            }
        }
    }
    assert_eq!(seen.len(), 2, "both sides must have played");
}

#[test]
fn random_players_always_reach_a_terminal_state() {
    init_logger();

    for seed in 0..10 {
        let a = Box::new(RandomPlayer::from_seed(seed));
        let b = Box::new(RandomPlayer::from_seed(seed + 1000));
        let mut runner = MatchRunner::new(vec![a, b], MatchConfig::new()).unwrap();

        // Legal by construction, so the match must end in a win or a draw.
        let outcome = runner.run().unwrap();
        match outcome {
            Outcome::Win(side) => assert!(SIDES.contains(&side)),
            Outcome::Draw => assert!(rules::board_full(runner.board())),
        }
    }
}

#[test]
fn four_by_four_column_win() {
    init_logger();

    let journal = Rc::new(RefCell::new(vec![]));
    let a = JournalingPlayer::new(
        "A",
        &[(0, 0), (1, 0), (2, 0), (3, 0)],
        journal.clone(),
    );
    let b = JournalingPlayer::new("B", &[(0, 1), (0, 2), (0, 3)], journal.clone());

    let config = MatchConfig::new().with_board_size(4);
    let mut runner = MatchRunner::new(vec![a, b], config).unwrap();

    assert_eq!(runner.run().unwrap(), Outcome::Win(NOUGHT));
}

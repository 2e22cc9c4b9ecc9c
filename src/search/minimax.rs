//! Exhaustive minimax search.
//!
//! X maximizes utility, O minimizes it. Every line of play is searched to
//! a terminal board: no pruning, no depth limit, no caching. Depth is
//! bounded by the nine cells, so plain recursion is safe.

use std::time::Instant;

use tracing::debug;

use crate::core::{Action, Board, Player};
use crate::rules::{actions, player, terminal, utility};

use super::stats::SearchStats;

/// Reusable minimax searcher.
///
/// Holds no game state between calls, only the statistics of the most
/// recent search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Optimal action for the player to move, or `None` on a terminal board.
    ///
    /// Ties go to the first action in row-major order.
    pub fn search(&mut self, board: &Board) -> Option<Action> {
        let start = self.begin();

        let best = if self.enter(board, 0) {
            None
        } else {
            let values = self.child_values(board);
            select(player(board), &values)
        };

        self.finish(start);
        best
    }

    /// Backed-up value of `board`: +1 X wins, 0 draw, -1 O wins under
    /// perfect play.
    pub fn evaluate(&mut self, board: &Board) -> i8 {
        let start = self.begin();
        let value = self.value(board, 0);
        self.finish(start);
        value
    }

    /// Backed-up value of every legal action, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn action_values(&mut self, board: &Board) -> Vec<(Action, i8)> {
        let start = self.begin();
        let values = if self.enter(board, 0) {
            Vec::new()
        } else {
            self.child_values(board)
        };
        self.finish(start);
        values
    }

    fn begin(&mut self) -> Instant {
        self.stats.reset();
        Instant::now()
    }

    fn finish(&mut self, start: Instant) {
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            nodes = self.stats.nodes,
            terminal_nodes = self.stats.terminal_nodes,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "minimax search complete"
        );
    }

    /// Count a visited board. Returns whether it is terminal.
    fn enter(&mut self, board: &Board, depth: u16) -> bool {
        let is_terminal = terminal(board);
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if is_terminal {
            self.stats.terminal_nodes += 1;
        }
        is_terminal
    }

    fn child_values(&mut self, board: &Board) -> Vec<(Action, i8)> {
        let mover = player(board);
        actions(board)
            .into_iter()
            .map(|action| (action, self.value(&successor(board, mover, action), 1)))
            .collect()
    }

    fn value(&mut self, board: &Board, depth: u16) -> i8 {
        if self.enter(board, depth) {
            return utility(board);
        }

        let mover = player(board);
        let values = actions(board)
            .into_iter()
            .map(|action| self.value(&successor(board, mover, action), depth + 1));

        let best = match mover {
            Player::X => values.max(),
            Player::O => values.min(),
        };
        // A live board always has at least one action.
        best.unwrap_or(0)
    }
}

/// Transition for an action taken from `actions(board)`, which only yields
/// Empty in-bounds cells.
fn successor(board: &Board, mover: Player, action: Action) -> Board {
    board.with_cell(action, mover.to_cell())
}

/// First action with the strictly best value for `mover`.
fn select(mover: Player, values: &[(Action, i8)]) -> Option<Action> {
    let mut best: Option<(Action, i8)> = None;
    for &(action, value) in values {
        let better = match best {
            None => true,
            Some((_, current)) => match mover {
                Player::X => value > current,
                Player::O => value < current,
            },
        };
        if better {
            best = Some((action, value));
        }
    }
    best.map(|(action, _)| action)
}

/// Optimal action for the player to move, or `None` if the game is over.
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::new().search(board)
}

/// Backed-up minimax value of a board.
#[must_use]
pub fn minimax_value(board: &Board) -> i8 {
    Minimax::new().evaluate(board)
}

/// Backed-up value of every legal action, in row-major order.
#[must_use]
pub fn action_values(board: &Board) -> Vec<(Action, i8)> {
    Minimax::new().action_values(board)
}

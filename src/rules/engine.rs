//! Rule evaluator and transition function.
//!
//! All functions are pure and take the board by reference:
//! - Whose turn it is, derived from mark counts
//! - Legal actions, in row-major order
//! - Winner, terminal status and utility
//! - The successor board for an action

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, Board, Cell, GameError, Player, Result};

/// Legal actions for a board. Never more than nine.
pub type ActionList = SmallVec<[Action; 9]>;

/// The eight winning lines: rows top to bottom, columns left to right,
/// then the main and anti diagonals.
const LINES: [[Action; 3]; 8] = [
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Three in a row for this player.
    Winner(Player),
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Score from X's point of view: +1, 0 or -1.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self {
            GameResult::Winner(Player::X) => 1,
            GameResult::Winner(Player::O) => -1,
            GameResult::Draw => 0,
        }
    }
}

/// The player to move: X unless X has placed more marks than O.
///
/// Defined on every board, including terminal ones.
#[must_use]
pub fn player(board: &Board) -> Player {
    if board.count(Cell::X) <= board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Every Empty cell, in row-major order.
#[must_use]
pub fn actions(board: &Board) -> ActionList {
    Action::all().filter(|&a| board.get(a).is_empty()).collect()
}

/// The board after the player to move places a mark at `action`.
///
/// The input board is not modified.
///
/// # Errors
///
/// `GameError::OutOfBounds` if a coordinate is 3 or more,
/// `GameError::InvalidMove` if the target cell is occupied.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    if !action.in_bounds() {
        return Err(GameError::OutOfBounds {
            row: action.row,
            col: action.col,
        });
    }
    if !board.get(action).is_empty() {
        return Err(GameError::InvalidMove {
            row: action.row,
            col: action.col,
        });
    }

    Ok(board.with_cell(action, player(board).to_cell()))
}

/// The mark holding a complete line, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let first = board.get(a);
        if first == board.get(b) && first == board.get(c) {
            first.player()
        } else {
            None
        }
    })
}

/// Check if the game is over: somebody won or the board is full.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// +1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful when `terminal(board)` holds; a live board scores 0.
#[must_use]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Typed outcome. Returns `None` while the game continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(p) => Some(GameResult::Winner(p)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}

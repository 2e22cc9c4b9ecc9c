//! Record of a completed game.
//!
//! A record keeps the move history, the final board and the result. It
//! can be replayed through the rules to check consistency, and encoded
//! with `bincode` for compact storage.

use serde::{Deserialize, Serialize};

use crate::core::{initial_state, ActionRecord, Board, Player, Result};
use crate::rules::{result, GameResult};

/// A complete game from the initial board to a terminal board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in order of play.
    pub moves: Vec<ActionRecord>,

    /// The terminal board.
    pub board: Board,

    /// How the game ended.
    pub result: GameResult,
}

impl GameRecord {
    /// Create a new record.
    pub fn new(moves: Vec<ActionRecord>, board: Board, result: GameResult) -> Self {
        Self {
            moves,
            board,
            result,
        }
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Winner(p) => Some(p),
            GameResult::Draw => None,
        }
    }

    /// Re-apply the moves from the initial board.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidMove` / `OutOfBounds` if the history is not a
    /// legal game.
    pub fn replay(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(initial_state(), |board, record| result(&board, record.action))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

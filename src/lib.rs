//! # tictactoe-engine
//!
//! Optimal play for tic-tac-toe by exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: `Board` is a `Copy` grid. Every move
//!    produces a new board; nothing is mutated behind the caller's back.
//!
//! 2. **Derived turn order**: the player to move is computed from mark
//!    counts, so a board alone is a complete game position.
//!
//! 3. **Deterministic search**: actions are enumerated row-major and ties
//!    keep the first best action, so results are reproducible.
//!
//! ## Caller Loop
//!
//! ```
//! use tictactoe_engine::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board).unwrap();
//!     board = result(&board, action).unwrap();
//! }
//! assert_eq!(utility(&board), 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cells, players, board, actions, RNG, errors
//! - `rules`: Turn order, legal actions, transition, win/draw detection
//! - `search`: Minimax search and statistics
//! - `play`: Agents, game driver and match runner

pub mod core;
pub mod rules;
pub mod search;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    initial_state, Action, ActionRecord, Board, Cell, GameError, GameRng, Player, Result,
};

pub use crate::rules::{
    actions, outcome, player, result, terminal, utility, winner, ActionList, GameResult,
};

pub use crate::search::{action_values, minimax, minimax_value, Minimax, SearchStats};

pub use crate::play::{
    play_game, run_match, Agent, GameRecord, MatchConfig, MatchStats, MinimaxAgent, RandomAgent,
};

//! Core types: cells, players, the board, actions, RNG, errors.
//!
//! Everything here is a plain value. Rules live in `rules`, search in
//! `search`.

pub mod action;
pub mod board;
pub mod cell;
pub mod error;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use board::{initial_state, Board, CELL_COUNT, SIDE};
pub use cell::{Cell, Player};
pub use error::{GameError, Result};
pub use rng::GameRng;

//! Game rules.
//!
//! Pure functions over a `Board`:
//! - `player`: whose turn it is
//! - `actions`: legal moves
//! - `result`: the successor board for a move
//! - `winner`, `terminal`, `utility`, `outcome`: end-of-game predicates

pub mod engine;

pub use engine::{
    actions, outcome, player, result, terminal, utility, winner, ActionList, GameResult,
};

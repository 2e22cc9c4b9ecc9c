//! Minimax search.
//!
//! ## Overview
//!
//! Exact adversarial search over the full game tree:
//!
//! - **Exhaustive**: every line is played out to a terminal board
//! - **Deterministic**: actions are tried in row-major order and ties keep
//!   the first best action
//! - **Instrumented**: `Minimax` records `SearchStats` and emits a
//!   `tracing` debug event per search
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_engine::core::{initial_state, Action};
//! use tictactoe_engine::search::{minimax, minimax_value, Minimax};
//!
//! let board = initial_state();
//! assert_eq!(minimax(&board), Some(Action::new(0, 0)));
//! assert_eq!(minimax_value(&board), 0);
//!
//! let mut search = Minimax::new();
//! search.search(&board);
//! assert_eq!(search.stats().terminal_nodes, 255_168);
//! ```

pub mod minimax;
pub mod stats;

pub use minimax::{action_values, minimax, minimax_value, Minimax};
pub use stats::SearchStats;

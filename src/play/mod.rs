//! Driving the engine: agents, games and matches.
//!
//! - **Agent**: chooses a move for a board (`MinimaxAgent`, `RandomAgent`)
//! - **play_game**: runs one game to a terminal board
//! - **run_match**: repeats games between two agents and tallies results
//! - **GameRecord**: move history with replay and bincode encoding
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tictactoe_engine::play::{run_match, MatchConfig, MinimaxAgent, RandomAgent};
//!
//! let mut perfect = MinimaxAgent::new();
//! let mut random = RandomAgent::new(42);
//!
//! let stats = run_match(&mut perfect, &mut random, &MatchConfig::default()).unwrap();
//! assert_eq!(stats.b_wins, 0);
//! ```

pub mod agent;
pub mod config;
pub mod record;
pub mod runner;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use config::MatchConfig;
pub use record::GameRecord;
pub use runner::{play_game, run_match, MatchStats};

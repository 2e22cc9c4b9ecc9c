//! Match configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a series of games between two agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: u32,

    /// Alternate which agent plays X. When false the first agent is
    /// always X.
    pub swap_sides: bool,

    /// Keep every `GameRecord` in the match statistics.
    pub keep_records: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            swap_sides: true,
            keep_records: false,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set whether agents alternate sides.
    pub fn with_swap_sides(mut self, swap: bool) -> Self {
        self.swap_sides = swap;
        self
    }

    /// Set whether game records are kept.
    pub fn with_records(mut self, keep: bool) -> Self {
        self.keep_records = keep;
        self
    }
}

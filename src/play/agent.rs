//! Agents that choose moves.
//!
//! An agent sees a board and returns an action for the player to move.
//! Agents may keep state between calls (an RNG, search statistics); the
//! board itself is never retained.

use crate::core::{Action, Board, GameRng};
use crate::rules::actions;
use crate::search::{Minimax, SearchStats};

/// A move-choosing strategy.
pub trait Agent {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Choose an action for the player to move.
    ///
    /// Returns `None` if the agent has nothing to play.
    fn select_action(&mut self, board: &Board) -> Option<Action>;
}

/// Plays the minimax-optimal action.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    search: Minimax,
}

impl MinimaxAgent {
    /// Create a new minimax agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the agent's most recent search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_action(&mut self, board: &Board) -> Option<Action> {
        self.search.search(board)
    }
}

/// Plays a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent. Same seed, same choices.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_action(&mut self, board: &Board) -> Option<Action> {
        self.rng.choose(&actions(board)).copied()
    }
}

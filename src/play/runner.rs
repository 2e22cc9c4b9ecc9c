//! Game and match driver.
//!
//! `play_game` is the caller loop: check for a terminal board, ask the
//! agent to move, apply the transition, repeat. `run_match` repeats it
//! and tallies the results.

use rustc_hash::FxHashMap;
use tracing::{info, instrument, trace};

use crate::core::{initial_state, Action, ActionRecord, GameError, Player, Result};
use crate::rules::{outcome, player, result, GameResult};

use super::agent::Agent;
use super::config::MatchConfig;
use super::record::GameRecord;

/// Play one game from the initial board.
///
/// # Errors
///
/// `NoActionAvailable` if an agent returns `None` on a live board;
/// `InvalidMove` / `OutOfBounds` if an agent plays an illegal action.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord> {
    let mut board = initial_state();
    let mut moves = Vec::new();

    let game_result = loop {
        if let Some(game_result) = outcome(&board) {
            break game_result;
        }

        let mover = player(&board);
        let agent: &mut dyn Agent = match mover {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let action = agent
            .select_action(&board)
            .ok_or_else(|| GameError::NoActionAvailable {
                agent: agent.name().to_string(),
            })?;
        board = result(&board, action)?;

        trace!(player = %mover, action = %action, "move");
        moves.push(ActionRecord::new(mover, action, moves.len() as u32));
    };

    Ok(GameRecord::new(moves, board, game_result))
}

/// Totals from a match between agent A and agent B.
#[derive(Clone, Debug, Default)]
pub struct MatchStats {
    /// Games played.
    pub games: u32,

    /// Games won by agent A.
    pub a_wins: u32,

    /// Games won by agent B.
    pub b_wins: u32,

    /// Drawn games.
    pub draws: u32,

    /// How often each opening move was played.
    pub openings: FxHashMap<Action, u32>,

    /// Game records, when `MatchConfig::keep_records` is set.
    pub records: Vec<GameRecord>,
}

impl MatchStats {
    /// Fraction of games won by agent A.
    #[must_use]
    pub fn a_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.a_wins as f64 / self.games as f64
        }
    }

    /// Fraction of games drawn.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.draws as f64 / self.games as f64
        }
    }
}

/// Play `config.games` games between `a` and `b`.
///
/// With `swap_sides`, A plays X in even-numbered games and O in odd ones.
///
/// # Errors
///
/// Stops at the first game that fails; see `play_game`.
#[instrument(skip_all, fields(a = a.name(), b = b.name(), games = config.games))]
pub fn run_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    config: &MatchConfig,
) -> Result<MatchStats> {
    let mut stats = MatchStats::default();

    for game in 0..config.games {
        let a_is_x = !config.swap_sides || game % 2 == 0;
        let (record, a_side) = if a_is_x {
            (play_game(a, b)?, Player::X)
        } else {
            (play_game(b, a)?, Player::O)
        };

        stats.games += 1;
        match record.result {
            GameResult::Winner(p) if p == a_side => stats.a_wins += 1,
            GameResult::Winner(_) => stats.b_wins += 1,
            GameResult::Draw => stats.draws += 1,
        }
        if let Some(first) = record.moves.first() {
            *stats.openings.entry(first.action).or_insert(0) += 1;
        }
        if config.keep_records {
            stats.records.push(record);
        }
    }

    info!(
        games = stats.games,
        a_wins = stats.a_wins,
        b_wins = stats.b_wins,
        draws = stats.draws,
        "match complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    /// Always plays the first cell, occupied or not.
    struct Stubborn;

    impl Agent for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn select_action(&mut self, _board: &Board) -> Option<Action> {
            Some(Action::new(0, 0))
        }
    }

    /// Never moves.
    struct Silent;

    impl Agent for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn select_action(&mut self, _board: &Board) -> Option<Action> {
            None
        }
    }

    /// Plays the first empty cell in row-major order.
    struct FirstEmpty;

    impl Agent for FirstEmpty {
        fn name(&self) -> &str {
            "first-empty"
        }

        fn select_action(&mut self, board: &Board) -> Option<Action> {
            crate::rules::actions(board).first().copied()
        }
    }

    #[test]
    fn test_illegal_action_fails_fast() {
        let err = play_game(&mut Stubborn, &mut Stubborn).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { row: 0, col: 0 }));
    }

    #[test]
    fn test_silent_agent_fails() {
        let err = play_game(&mut FirstEmpty, &mut Silent).unwrap_err();
        match err {
            GameError::NoActionAvailable { agent } => assert_eq!(agent, "silent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_empty_game() {
        // X fills (0,0) (0,2) (1,1) (2,0): the anti-diagonal on move 7.
        let record = play_game(&mut FirstEmpty, &mut FirstEmpty).unwrap();
        assert_eq!(record.result, GameResult::Winner(Player::X));
        assert_eq!(record.len(), 7);
        assert_eq!(record.moves[0].player, Player::X);
        assert_eq!(record.moves[1].player, Player::O);
        assert_eq!(record.moves[6].ply, 6);
        assert_eq!(record.replay().unwrap(), record.board);
    }

    #[test]
    fn test_match_tallies_sides() {
        let config = MatchConfig::new().with_games(4).with_records(true);
        let stats = run_match(&mut FirstEmpty, &mut FirstEmpty, &config).unwrap();

        // X always wins, so A wins exactly the games it plays as X.
        assert_eq!(stats.games, 4);
        assert_eq!(stats.a_wins, 2);
        assert_eq!(stats.b_wins, 2);
        assert_eq!(stats.draws, 0);
        assert_eq!(stats.records.len(), 4);
        assert_eq!(stats.openings.get(&Action::new(0, 0)), Some(&4));
        assert_eq!(stats.a_win_rate(), 0.5);
    }

    #[test]
    fn test_match_without_swap() {
        let config = MatchConfig::new().with_games(3).with_swap_sides(false);
        let stats = run_match(&mut FirstEmpty, &mut FirstEmpty, &config).unwrap();

        assert_eq!(stats.a_wins, 3);
        assert!(stats.records.is_empty());
        assert_eq!(stats.draw_rate(), 0.0);
    }
}

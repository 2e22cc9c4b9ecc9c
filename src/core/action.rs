//! Action representation: a (row, column) coordinate on the grid.
//!
//! Actions are computed fresh from a board by `rules::actions` and never
//! stored on it. `ActionRecord` attaches the mover and ply number for
//! game histories.

use serde::{Deserialize, Serialize};

use super::cell::Player;
use super::board::SIDE;

/// A move: place the current player's mark at `(row, col)`.
///
/// Coordinates are zero-based. Out-of-range values can be constructed;
/// `rules::result` rejects them with `GameError::OutOfBounds`.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::core::Action;
///
/// let centre = Action::new(1, 1);
/// assert_eq!(centre.index(), 4);
/// assert_eq!(centre.to_string(), "(1, 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index `row * 3 + col`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Check that both coordinates lie on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIDE && self.col < SIDE
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIDE).flat_map(|row| (0..SIDE).map(move |col| Action::new(row, col)))
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A recorded move with metadata for game histories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Zero-based ply number within the game.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}

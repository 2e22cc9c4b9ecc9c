//! The 3x3 board.
//!
//! `Board` is a small `Copy` value. Every transition produces a new board,
//! so boards can be shared freely between branches of a search.
//!
//! ## Text form
//!
//! `Display` renders three lines of `X`, `O` and `.`; `FromStr` accepts the
//! same cells with `/`, `|` or newlines between rows:
//!
//! ```
//! use tictactoe_engine::core::{Board, Cell};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(board.count(Cell::X), 2);
//! assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::cell::Cell;
use super::error::GameError;

/// Side length of the grid.
pub const SIDE: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// A 3x3 grid of cells, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

/// The all-Empty starting board.
#[must_use]
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// No turn-order validation is performed.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    /// The rows of the grid.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }

    /// Cell at `action`.
    ///
    /// # Panics
    ///
    /// Panics if `action` is out of bounds.
    #[must_use]
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&c| c == cell).count()
    }

    /// Number of non-Empty cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        CELL_COUNT - self.count(Cell::Empty)
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.iter().all(|c| !c.is_empty())
    }

    /// Copy of this board with `action`'s cell set to `cell`.
    ///
    /// Callers check bounds and occupancy first.
    #[must_use]
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; SIDE]; SIDE];
        let mut count = 0;

        for (position, c) in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')).enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| GameError::InvalidCellCharacter {
                character: c,
                position,
                context: s.to_string(),
            })?;
            if position < CELL_COUNT {
                cells[position / SIDE][position % SIDE] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::InvalidBoardLength {
                expected: CELL_COUNT,
                got: count,
                context: s.to_string(),
            });
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert_eq!(board.count(Cell::Empty), CELL_COUNT);
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_with_cell_leaves_original() {
        let board = Board::new();
        let next = board.with_cell(Action::new(1, 2), Cell::X);

        assert_eq!(board.get(Action::new(1, 2)), Cell::Empty);
        assert_eq!(next.get(Action::new(1, 2)), Cell::X);
        assert_eq!(next.filled(), 1);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Action::new(0, 0)), Cell::X);
        assert_eq!(board.get(Action::new(0, 1)), Cell::O);
        assert_eq!(board.get(Action::new(1, 1)), Cell::X);
        assert_eq!(board.get(Action::new(2, 2)), Cell::O);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_parse_multiline() {
        let board: Board = "X.O\n...\nO.X".parse().unwrap();
        assert_eq!(board.count(Cell::X), 2);
        assert_eq!(board.count(Cell::O), 2);
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "XO./...".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidBoardLength { expected: 9, got: 6, .. }
        ));

        let err = "XXXXXXXXXX".parse::<Board>().unwrap_err();
        assert!(matches!(err, GameError::InvalidBoardLength { got: 10, .. }));
    }

    #[test]
    fn test_parse_bad_character() {
        let err = "XO?/.../...".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidCellCharacter { character: '?', position: 2, .. }
        ));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.filled(), 9);
    }

    #[test]
    fn test_serialization() {
        let board: Board = "X../.O./...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}

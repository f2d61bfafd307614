//! Errors reported by the rules engine.
//!
//! None of these are fatal: a rejected call leaves the board, the turn and
//! the selection exactly as they were.

use std::fmt;

use crate::square::Square;

pub type Result<T> = std::result::Result<T, RulesError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// A coordinate outside the 9x10 grid.
    OutOfBounds { col: i32, row: i32 },
    /// Selecting, or moving from, a square with no piece on it.
    EmptyCellSelected(Square),
    /// Selecting a piece that belongs to the side not on move.
    NotSideToMove(Square),
    /// A destination outside the selected piece's legal set.
    IllegalDestination { from: Square, to: Square },
    /// Moving onto a square held by a piece of the same side.
    AlliedDestination { from: Square, to: Square },
    /// Choosing a destination while nothing is selected.
    NothingSelected,
    /// A signed cell code whose magnitude names no piece.
    InvalidPieceCode(i8),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::OutOfBounds { col, row } => {
                write!(f, "coordinate (col={col}, row={row}) is outside the board")
            }
            RulesError::EmptyCellSelected(sq) => write!(f, "no piece on {sq}"),
            RulesError::NotSideToMove(sq) => {
                write!(f, "the piece on {sq} belongs to the side not on move")
            }
            RulesError::IllegalDestination { from, to } => {
                write!(f, "{to} is not a legal destination for the piece on {from}")
            }
            RulesError::AlliedDestination { from, to } => {
                write!(f, "cannot move from {from} onto the allied piece on {to}")
            }
            RulesError::NothingSelected => write!(f, "no piece is selected"),
            RulesError::InvalidPieceCode(code) => write!(f, "invalid piece code {code}"),
        }
    }
}

impl std::error::Error for RulesError {}

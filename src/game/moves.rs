//! First-class move type for the SOS game.
//!
//! A move is the player's intent, never persisted on its own: it is handed
//! to [`GameState::apply`](super::state::GameState::apply) and either
//! committed or rejected without side effects.

use super::types::Letter;
use serde::{Deserialize, Serialize};

/// A move: placing a letter at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row, zero-based.
    pub row: usize,
    /// Target column, zero-based.
    pub col: usize,
    /// The letter to place.
    pub letter: Letter,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, letter: Letter) -> Self {
        Self { row, col, letter }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.letter, self.row, self.col)
    }
}

/// Reasons a move is rejected. A rejected move changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the board.
    #[display("({row}, {col}) is outside the board")]
    OutOfRange {
        /// Rejected row.
        row: usize,
        /// Rejected column.
        col: usize,
    },

    /// The target cell already holds a letter.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Rejected row.
        row: usize,
        /// Rejected column.
        col: usize,
    },

    /// The match has already ended.
    #[display("the match is over")]
    MatchOver,
}

impl std::error::Error for MoveError {}

//! Flat-file move log.
//!
//! One line per committed move, `row,col,color,letter,mover-kind`. Saving
//! overwrites the target file; a saved log can be loaded and re-issued
//! through [`MatchController::replay_moves`](crate::MatchController::replay_moves).

use crate::game::{Letter, Move, PlayerColor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Who produced a logged move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum MoverKind {
    /// A computer strategy chose the move.
    #[strum(serialize = "AI")]
    Ai,
    /// A human submitted the move.
    Player,
}

/// A single logged move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
    /// The color that moved.
    pub color: PlayerColor,
    /// The letter placed.
    pub letter: Letter,
    /// Whether the mover was a strategy or a human.
    pub mover: MoverKind,
}

impl MoveRecord {
    /// Creates a record for a committed move.
    pub fn new(mv: Move, color: PlayerColor, mover: MoverKind) -> Self {
        Self {
            row: mv.row,
            col: mv.col,
            color,
            letter: mv.letter,
            mover,
        }
    }

    /// The move this record re-issues on replay.
    pub fn to_move(self) -> Move {
        Move::new(self.row, self.col, self.letter)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.row, self.col, self.color, self.letter, self.mover
        )
    }
}

impl FromStr for MoveRecord {
    type Err = RecorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RecorderError::Parse {
            line: s.to_string(),
        };
        let mut fields = s.trim().split(',');
        let mut next = || fields.next().ok_or_else(malformed);

        let row = next()?.parse().map_err(|_| malformed())?;
        let col = next()?.parse().map_err(|_| malformed())?;
        let color = next()?.parse().map_err(|_| malformed())?;
        let letter = next()?.parse().map_err(|_| malformed())?;
        let mover = next()?.parse().map_err(|_| malformed())?;
        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            row,
            col,
            color,
            letter,
            mover,
        })
    }
}

/// Errors while saving or loading the move log.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum RecorderError {
    /// Underlying file I/O failed.
    #[display("move log I/O failed: {_0}")]
    Io(std::io::Error),

    /// A line did not match the `row,col,color,letter,mover-kind` format.
    #[display("malformed move record: {line:?}")]
    #[from(ignore)]
    Parse {
        /// The offending line.
        line: String,
    },
}

impl std::error::Error for RecorderError {}

/// Append-only buffer of committed moves.
#[derive(Debug, Clone, Default)]
pub struct MoveRecorder {
    moves: Vec<MoveRecord>,
}

impl MoveRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn record(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// The recorded moves, oldest first.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Writes the buffer to `path`, one record per line. Overwrites any
    /// existing file.
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> Result<(), RecorderError> {
        let mut contents = String::new();
        for record in &self.moves {
            contents.push_str(&record.to_string());
            contents.push('\n');
        }
        fs::write(path, contents)?;
        debug!(count = self.moves.len(), "move log saved");
        Ok(())
    }

    /// Reads a saved log. Blank lines are skipped.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Vec<MoveRecord>, RecorderError> {
        let contents = fs::read_to_string(path)?;
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(MoveRecord::from_str)
            .collect()
    }
}

//! Turn and scoring state machine for an SOS match.

use super::moves::{Move, MoveError};
use super::rules::sequence;
use super::types::{Board, Cell, Letter, Outcome, PlayerColor, Sequence, Variant};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rejected board size at match creation. No state is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("board size {} is outside the supported range {}..={}", size, MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
pub struct InvalidBoardSize {
    /// The rejected size.
    pub size: usize,
}

impl std::error::Error for InvalidBoardSize {}

/// Rejected variant change: the match has already ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("the variant cannot change after the match has ended")]
pub struct IllegalModeChange;

impl std::error::Error for IllegalModeChange {}

/// Complete state of one match.
///
/// The state owns its board exclusively; callers read it through
/// [`board`](GameState::board) and mutate only through
/// [`apply`](GameState::apply). The terminal flag is a one-way latch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: PlayerColor,
    blue_score: u32,
    red_score: u32,
    terminal: bool,
    variant: Variant,
    /// Triples completed by the most recent move.
    last_sequences: Vec<Sequence>,
}

impl GameState {
    /// Creates a fresh match: empty board, Blue to move, scores 0-0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize`] when `size` is outside 3..=12.
    #[instrument]
    pub fn new(size: usize, variant: Variant) -> Result<Self, InvalidBoardSize> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(InvalidBoardSize { size });
        }
        Ok(Self {
            board: Board::new(size),
            turn: PlayerColor::Blue,
            blue_score: 0,
            red_score: 0,
            terminal: false,
            variant,
            last_sequences: Vec::new(),
        })
    }

    /// Applies a move for the color to move.
    ///
    /// On success returns the completed triples (possibly none). The mover's
    /// score rises by the number of distinct triples. A scoring move keeps
    /// the turn with the mover; a non-scoring move passes it. In the Simple
    /// variant the first scoring move ends the match; in either variant a
    /// full board ends it.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range coordinates, occupied cells, and moves after the
    /// match has ended. A rejected move leaves the state untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply(&mut self, mv: Move) -> Result<Vec<Sequence>, MoveError> {
        if self.terminal {
            return Err(MoveError::MatchOver);
        }
        if !self.board.in_bounds(mv.row, mv.col) {
            return Err(MoveError::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.board.is_cell_empty(mv.row, mv.col) {
            return Err(MoveError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        self.board.set(mv.row, mv.col, Cell::Filled(mv.letter));
        let sequences = sequence::detect(&self.board, mv.row, mv.col, mv.letter);
        self.last_sequences = sequences.clone();

        if sequences.is_empty() {
            self.turn = self.turn.opponent();
        } else {
            let scored = sequences.len() as u32;
            match self.turn {
                PlayerColor::Blue => self.blue_score += scored,
                PlayerColor::Red => self.red_score += scored,
            }
            debug!(mover = %self.turn, scored, "sequences completed");
            if self.variant == Variant::Simple {
                self.terminal = true;
            }
            // General: the scoring mover keeps the turn.
        }

        if self.board.is_full() {
            self.terminal = true;
        }

        Ok(sequences)
    }

    /// Whether placing `letter` at (row, col) would complete a sequence.
    ///
    /// Strictly side-effect-free: the board is never written, even
    /// transiently.
    pub fn would_form_sequence(&self, row: usize, col: usize, letter: Letter) -> bool {
        !sequence::detect(&self.board, row, col, letter).is_empty()
    }

    /// Changes the match variant.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalModeChange`] once the match has ended.
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), IllegalModeChange> {
        if self.terminal {
            return Err(IllegalModeChange);
        }
        self.variant = variant;
        Ok(())
    }

    /// Clears board, scores, terminal flag, and last sequences. Blue moves
    /// first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.turn = PlayerColor::Blue;
        self.blue_score = 0;
        self.red_score = 0;
        self.terminal = false;
        self.last_sequences.clear();
    }

    /// Flips the color to move. Lookahead only; never part of a committed
    /// transition.
    pub(crate) fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The color to move.
    pub fn turn(&self) -> PlayerColor {
        self.turn
    }

    /// The match variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Blue's score.
    pub fn blue_score(&self) -> u32 {
        self.blue_score
    }

    /// Red's score.
    pub fn red_score(&self) -> u32 {
        self.red_score
    }

    /// Score of the given color.
    pub fn score(&self, color: PlayerColor) -> u32 {
        match color {
            PlayerColor::Blue => self.blue_score,
            PlayerColor::Red => self.red_score,
        }
    }

    /// Whether the match has ended.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Triples completed by the most recent move.
    pub fn last_sequences(&self) -> &[Sequence] {
        &self.last_sequences
    }

    /// Result of the match, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.terminal {
            return None;
        }
        Some(if self.blue_score > self.red_score {
            Outcome::Win(PlayerColor::Blue)
        } else if self.red_score > self.blue_score {
            Outcome::Win(PlayerColor::Red)
        } else {
            Outcome::Draw
        })
    }
}

//! Match orchestration: one state, one strategy per color.
//!
//! The controller is the only writer of the live [`GameState`]. Strategies
//! see read-only snapshots; their proposals come back here to be committed.

use crate::game::{
    GameState, IllegalModeChange, InvalidBoardSize, Move, MoveError, PlayerColor, Sequence,
    Variant,
};
use crate::recorder::{MoveRecord, MoveRecorder, MoverKind, RecorderError};
use crate::strategy::{Strategy, StrategyKind};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Error while replaying a saved move log.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ReplayError {
    /// The log could not be read or parsed.
    #[display("{_0}")]
    Recorder(RecorderError),

    /// A logged move was rejected on re-application.
    #[display("logged move {index} ({mv}) was rejected: {reason}")]
    #[from(ignore)]
    Rejected {
        /// Zero-based index of the record in the log.
        index: usize,
        /// The rejected move.
        mv: Move,
        /// Why the state refused it.
        reason: MoveError,
    },
}

impl std::error::Error for ReplayError {}

/// Drives one match: turn alternation, strategy invocation, move log.
#[derive(Debug)]
pub struct MatchController {
    state: GameState,
    blue: Strategy,
    red: Strategy,
    recorder: MoveRecorder,
}

impl MatchController {
    /// Starts a fresh match. Both colors default to Human.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSize`] when `size` is outside 3..=12.
    #[instrument]
    pub fn start_match(size: usize, variant: Variant) -> Result<Self, InvalidBoardSize> {
        let state = GameState::new(size, variant)?;
        info!(size, %variant, "match started");
        Ok(Self {
            state,
            blue: Strategy::new(StrategyKind::Human),
            red: Strategy::new(StrategyKind::Human),
            recorder: MoveRecorder::new(),
        })
    }

    /// Binds a strategy kind to a color. The board is untouched.
    #[instrument(skip(self))]
    pub fn set_strategy(&mut self, color: PlayerColor, kind: StrategyKind) {
        debug!(%color, %kind, "strategy bound");
        match color {
            PlayerColor::Blue => self.blue = Strategy::new(kind),
            PlayerColor::Red => self.red = Strategy::new(kind),
        }
    }

    /// The strategy kind bound to a color.
    pub fn strategy_kind(&self, color: PlayerColor) -> StrategyKind {
        match color {
            PlayerColor::Blue => self.blue.kind(),
            PlayerColor::Red => self.red.kind(),
        }
    }

    /// Whether the color to move is computer-driven.
    pub fn is_current_mover_computer(&self) -> bool {
        self.strategy_kind(self.state.turn()).is_computer()
    }

    /// Read-only view of the match state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Commits an externally submitted move for the color to move.
    ///
    /// # Errors
    ///
    /// Rejections mirror [`GameState::apply`]; nothing changes on `Err`.
    pub fn submit(&mut self, mv: Move) -> Result<Vec<Sequence>, MoveError> {
        self.commit(mv)
    }

    /// Advances one turn when the color to move is computer-driven.
    ///
    /// Returns the committed move and its completed sequences, or `None`
    /// when the controller idles: the match is over, the mover is Human, or
    /// the strategy has no move.
    ///
    /// # Errors
    ///
    /// Propagates a rejected commit; strategies only propose empty in-range
    /// cells, so this indicates a caller driving a stale controller.
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Result<Option<(Move, Vec<Sequence>)>, MoveError> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        let snapshot = self.state.clone();
        let strategy = match snapshot.turn() {
            PlayerColor::Blue => &mut self.blue,
            PlayerColor::Red => &mut self.red,
        };
        if !strategy.kind().is_computer() {
            return Ok(None);
        }
        match strategy.request_move(&snapshot) {
            Some(mv) => {
                let sequences = self.commit(mv)?;
                Ok(Some((mv, sequences)))
            }
            None => Ok(None),
        }
    }

    fn commit(&mut self, mv: Move) -> Result<Vec<Sequence>, MoveError> {
        let color = self.state.turn();
        let mover = if self.strategy_kind(color).is_computer() {
            MoverKind::Ai
        } else {
            MoverKind::Player
        };
        let sequences = self.state.apply(mv).inspect_err(|reason| {
            warn!(%mv, %reason, "move rejected");
        })?;
        self.recorder.record(MoveRecord::new(mv, color, mover));
        info!(%color, %mv, scored = sequences.len(), "move committed");
        Ok(sequences)
    }

    /// Changes the match variant.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalModeChange`] once the match has ended.
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), IllegalModeChange> {
        self.state.set_variant(variant)
    }

    /// Full reset: board, scores, terminal flag, and the move log. Bound
    /// strategies stay.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.recorder.clear();
    }

    /// The move log recorded so far.
    pub fn moves(&self) -> &[MoveRecord] {
        self.recorder.moves()
    }

    /// Writes the move log to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError`] when the file cannot be written.
    pub fn save_moves(&self, path: &Path) -> Result<(), RecorderError> {
        self.recorder.save_to(path)
    }

    /// Resets the match and re-issues the moves logged at `path`, in order.
    /// Returns the number of moves replayed.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] when the log cannot be read or a logged move
    /// is rejected; a rejected move leaves the partially replayed state in
    /// place for inspection.
    #[instrument(skip(self))]
    pub fn replay_moves(&mut self, path: &Path) -> Result<usize, ReplayError> {
        let records = MoveRecorder::load_from(path)?;
        self.reset();
        for (index, record) in records.iter().enumerate() {
            let mv = record.to_move();
            self.state
                .apply(mv)
                .map_err(|reason| ReplayError::Rejected { index, mv, reason })?;
            self.recorder.record(*record);
        }
        info!(count = records.len(), "replay complete");
        Ok(records.len())
    }
}

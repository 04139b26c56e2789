//! Computer-player decision strategies.
//!
//! A strategy is a decision policy over a read-only snapshot of the match:
//! it proposes a move or signals that it has none (the Human kind never
//! proposes one). Strategies never mutate live state; any lookahead runs on
//! a private deep copy, and only the controller commits moves.
//!
//! Every scan walks candidate cells in row-major order and tries 'S' before
//! 'O' at a cell, so behavior is deterministic wherever randomness is not
//! explicitly involved.

mod easy;
mod hard;
mod medium;

use crate::game::{GameState, Letter, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The closed set of decision policies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum StrategyKind {
    /// No autonomous moves; the controller waits for external input.
    Human,
    /// Completes a sequence when one is available, otherwise plays randomly.
    Easy,
    /// As Easy, but blocks the opponent's completing move first.
    Medium,
    /// As Medium, with a positional evaluation instead of the random
    /// fallback.
    Hard,
}

impl StrategyKind {
    /// Whether this kind produces moves on its own.
    pub fn is_computer(self) -> bool {
        self != StrategyKind::Human
    }
}

/// A decision policy bound to one color.
#[derive(Debug)]
pub struct Strategy {
    kind: StrategyKind,
    rng: StdRng,
}

impl Strategy {
    /// Creates a strategy of the given kind with OS-seeded randomness.
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy with a fixed seed, for reproducible play.
    pub fn seeded(kind: StrategyKind, seed: u64) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The kind of this strategy.
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Proposes a move for the color to move in `state`.
    ///
    /// Returns `None` for the Human kind, and for every kind once the board
    /// has no empty cell.
    #[instrument(skip(self, state), fields(kind = %self.kind))]
    pub fn request_move(&mut self, state: &GameState) -> Option<Move> {
        let mv = match self.kind {
            StrategyKind::Human => None,
            StrategyKind::Easy => easy::choose(state, &mut self.rng),
            StrategyKind::Medium => medium::choose(state, &mut self.rng),
            StrategyKind::Hard => hard::choose(state),
        };
        if let Some(mv) = mv {
            debug!(%mv, "strategy proposed move");
        }
        mv
    }
}

/// First (cell, letter) pair that completes a sequence, scanning row-major
/// with 'S' before 'O'.
fn find_completing(state: &GameState) -> Option<Move> {
    for coord in state.board().empty_cells() {
        for letter in [Letter::S, Letter::O] {
            if state.would_form_sequence(coord.row, coord.col, letter) {
                return Some(Move::new(coord.row, coord.col, letter));
            }
        }
    }
    None
}

/// Uniformly random empty cell with a 50/50 letter.
fn random_move(state: &GameState, rng: &mut StdRng) -> Option<Move> {
    let empty: Vec<_> = state.board().empty_cells().collect();
    if empty.is_empty() {
        return None;
    }
    let coord = empty[rng.random_range(0..empty.len())];
    let letter = if rng.random_bool(0.5) {
        Letter::S
    } else {
        Letter::O
    };
    Some(Move::new(coord.row, coord.col, letter))
}

//! SOS game engine with computer opponents.
//!
//! Two players alternately place 'S' or 'O' on an n×n board (3-12);
//! completing S-O-S in any of the eight compass directions scores a point
//! for the mover. The Simple variant ends at the first sequence; the
//! General variant runs to a full board and the higher score wins.
//!
//! # Architecture
//!
//! - **Game**: board, move model, sequence detection, and the turn/scoring
//!   state machine ([`GameState`])
//! - **Strategy**: the four decision policies (Human/Easy/Medium/Hard) over
//!   read-only snapshots
//! - **Controller**: turn alternation, strategy invocation, and the
//!   flat-file move log ([`MatchController`])
//!
//! # Example
//!
//! ```
//! use sos_game::{MatchController, PlayerColor, StrategyKind, Variant};
//!
//! # fn main() -> Result<(), sos_game::InvalidBoardSize> {
//! let mut controller = MatchController::start_match(5, Variant::General)?;
//! controller.set_strategy(PlayerColor::Blue, StrategyKind::Easy);
//! controller.set_strategy(PlayerColor::Red, StrategyKind::Hard);
//!
//! while !controller.state().is_terminal() {
//!     controller.step().expect("strategies propose legal moves");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
pub mod config;
mod controller;
mod game;
mod recorder;
mod strategy;

// Crate-level exports - Match control
pub use controller::{MatchController, ReplayError};

// Crate-level exports - Game types
pub use game::{
    Board, Cell, Coord, GameState, IllegalModeChange, InvalidBoardSize, Letter, Move, MoveError,
    Outcome, PlayerColor, Sequence, Variant,
};

// Crate-level exports - Move log
pub use recorder::{MoveRecord, MoveRecorder, MoverKind, RecorderError};

// Crate-level exports - Strategies
pub use strategy::{Strategy, StrategyKind};

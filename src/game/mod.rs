mod moves;
mod rules;
mod state;
mod types;

pub use moves::{Move, MoveError};
pub use state::{GameState, IllegalModeChange, InvalidBoardSize};
pub use types::{Board, Cell, Coord, Letter, Outcome, PlayerColor, Sequence, Variant};

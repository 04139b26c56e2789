//! Pure rule functions for the SOS game.
//!
//! Rules are separated from board storage: detection reads a board and a
//! placement and reports completed lines, mutating nothing.

pub(crate) mod sequence;

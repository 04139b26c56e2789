//! Fixed game configuration.

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 12;

/// Board side length used when none is requested.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Pacing delay before a computer move, in milliseconds. Presentation only;
/// carries no effect on the rule engine.
pub const DEFAULT_MOVE_DELAY_MS: u64 = 500;

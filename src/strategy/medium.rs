//! Medium tier: complete, block, then play randomly.

use super::{find_completing, random_move};
use crate::game::{GameState, Move};
use rand::rngs::StdRng;

pub(super) fn choose(state: &GameState, rng: &mut StdRng) -> Option<Move> {
    if let Some(mv) = find_completing(state) {
        return Some(mv);
    }
    if let Some(mv) = find_blocking(state) {
        return Some(mv);
    }
    random_move(state, rng)
}

/// Move the opponent would use to complete a sequence next turn, occupied
/// here instead. The scan runs unconditionally on a private copy with the
/// turn flipped; the live state is untouched.
pub(super) fn find_blocking(state: &GameState) -> Option<Move> {
    let mut probe = state.clone();
    probe.toggle_turn();
    find_completing(&probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Letter, Variant};
    use rand::SeedableRng;

    #[test]
    fn test_medium_takes_open_completion() {
        let mut state = GameState::new(4, Variant::General).unwrap();
        state.apply(Move::new(3, 0, Letter::S)).unwrap();
        state.apply(Move::new(3, 1, Letter::O)).unwrap();

        // (3, 2) with 'S' finishes the bottom row for whoever plays it.
        let mut rng = StdRng::seed_from_u64(7);
        let mv = choose(&state, &mut rng).unwrap();
        assert_eq!(mv, Move::new(3, 2, Letter::S));
    }

    #[test]
    fn test_blocking_scan_occupies_opponent_completion() {
        let mut state = GameState::new(4, Variant::General).unwrap();
        state.apply(Move::new(3, 0, Letter::S)).unwrap();
        state.apply(Move::new(3, 1, Letter::O)).unwrap();

        // The opponent would complete at (3, 2) with 'S'; the blocking scan
        // claims that exact cell and letter.
        let mv = find_blocking(&state).unwrap();
        assert_eq!(mv, Move::new(3, 2, Letter::S));
    }

    #[test]
    fn test_medium_lookahead_leaves_state_untouched() {
        let mut state = GameState::new(4, Variant::General).unwrap();
        state.apply(Move::new(3, 0, Letter::S)).unwrap();
        state.apply(Move::new(3, 1, Letter::O)).unwrap();

        let before = state.clone();
        let _ = find_blocking(&state);
        assert_eq!(state, before);
    }
}

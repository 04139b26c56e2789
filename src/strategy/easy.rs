//! Easy tier: complete a sequence if possible, otherwise play randomly.

use super::{find_completing, random_move};
use crate::game::{GameState, Move};
use rand::rngs::StdRng;

pub(super) fn choose(state: &GameState, rng: &mut StdRng) -> Option<Move> {
    find_completing(state).or_else(|| random_move(state, rng))
}

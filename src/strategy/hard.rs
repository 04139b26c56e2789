//! Hard tier: complete, block, then pick the best positional move.

use super::{find_completing, medium};
use crate::game::{Board, GameState, Letter, Move};

pub(super) fn choose(state: &GameState) -> Option<Move> {
    if let Some(mv) = find_completing(state) {
        return Some(mv);
    }
    if let Some(mv) = medium::find_blocking(state) {
        return Some(mv);
    }
    best_strategic(state)
}

/// Maximum-scoring (cell, letter) candidate. The scan keeps the first
/// maximum, so ties resolve to row-major order and 'S' before 'O'.
fn best_strategic(state: &GameState) -> Option<Move> {
    let mut best: Option<(i32, Move)> = None;
    for coord in state.board().empty_cells() {
        for letter in [Letter::S, Letter::O] {
            let mv = Move::new(coord.row, coord.col, letter);
            let score = evaluate(state, mv);
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, mv));
            }
        }
    }
    best.map(|(_, mv)| mv)
}

/// Simulates the placement on a private copy: 10 when it completes a
/// sequence, plus one per surrounding pair that could still host one.
fn evaluate(state: &GameState, mv: Move) -> i32 {
    let mut sim = state.clone();
    let completed = match sim.apply(mv) {
        Ok(sequences) => !sequences.is_empty(),
        Err(_) => return i32::MIN,
    };
    let mut score = if completed { 10 } else { 0 };
    score += opportunity_pairs(sim.board(), mv.row, mv.col);
    score
}

/// Counts the cell's eight neighbor pairs (opposite positions across it)
/// where both sides are on the board and at least one is still empty.
fn opportunity_pairs(board: &Board, row: usize, col: usize) -> i32 {
    const DIRECTIONS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    let side = |dr: isize, dc: isize| {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || c < 0 {
            None
        } else {
            board.get(r as usize, c as usize)
        }
    };

    let mut pairs = 0;
    for (dr, dc) in DIRECTIONS {
        if let (Some(ahead), Some(behind)) = (side(dr, dc), side(-dr, -dc)) {
            if ahead.letter().is_none() || behind.letter().is_none() {
                pairs += 1;
            }
        }
    }
    pairs
}

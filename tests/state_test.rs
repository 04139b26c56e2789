//! Tests for the SOS turn and scoring state machine.

use sos_game::{Cell, Coord, GameState, Letter, Move, MoveError, Outcome, PlayerColor, Variant};

fn apply_all(state: &mut GameState, moves: &[(usize, usize, Letter)]) {
    for &(row, col, letter) in moves {
        state
            .apply(Move::new(row, col, letter))
            .expect("scripted move should be accepted");
    }
}

#[test]
fn test_fresh_match_every_size_and_variant() {
    for size in 3..=12 {
        for variant in [Variant::Simple, Variant::General] {
            let state = GameState::new(size, variant).unwrap();
            assert_eq!(state.size(), size);
            assert_eq!(state.blue_score(), 0);
            assert_eq!(state.red_score(), 0);
            assert_eq!(state.turn(), PlayerColor::Blue);
            assert!(!state.is_terminal());
            assert!(state.last_sequences().is_empty());
            assert_eq!(state.board().empty_cells().count(), size * size);
        }
    }
}

#[test]
fn test_rejects_out_of_range_sizes() {
    for size in [0, 1, 2, 13, 100] {
        assert!(GameState::new(size, Variant::Simple).is_err());
    }
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    state.apply(Move::new(1, 1, Letter::S)).unwrap();

    let before = state.clone();
    let result = state.apply(Move::new(1, 1, Letter::O));
    assert_eq!(result, Err(MoveError::CellOccupied { row: 1, col: 1 }));
    assert_eq!(state, before);
}

#[test]
fn test_out_of_range_move_rejected() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    let result = state.apply(Move::new(3, 0, Letter::S));
    assert_eq!(result, Err(MoveError::OutOfRange { row: 3, col: 0 }));
    assert_eq!(state.turn(), PlayerColor::Blue);
}

#[test]
fn test_scenario_a_simple_vertical_sequence() {
    let mut state = GameState::new(3, Variant::Simple).unwrap();
    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (1, 0, Letter::O)],
    );
    let sequences = state.apply(Move::new(2, 0, Letter::S)).unwrap();

    assert_eq!(
        sequences,
        vec![[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]]
    );
    assert_eq!(state.blue_score(), 1);
    assert_eq!(state.red_score(), 0);
    assert!(state.is_terminal(), "Simple ends at the first sequence");
    assert!(!state.board().is_full());
    assert_eq!(state.last_sequences(), &sequences[..]);
}

#[test]
fn test_scenario_b_general_keeps_turn_after_scoring() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    apply_all(
        &mut state,
        &[
            (0, 0, Letter::S),
            (0, 1, Letter::S),
            (1, 0, Letter::O),
            (1, 1, Letter::O),
        ],
    );
    let turn_before = state.turn();
    assert_eq!(turn_before, PlayerColor::Blue);

    let sequences = state.apply(Move::new(2, 0, Letter::S)).unwrap();
    assert_eq!(
        sequences,
        vec![[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]]
    );
    assert_eq!(state.blue_score(), 1);
    assert!(!state.is_terminal(), "board is not full");
    assert_eq!(state.turn(), turn_before, "scoring mover keeps the turn");
}

#[test]
fn test_turn_switches_after_non_scoring_move() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    state.apply(Move::new(0, 0, Letter::S)).unwrap();
    assert_eq!(state.turn(), PlayerColor::Red);
    state.apply(Move::new(2, 2, Letter::S)).unwrap();
    assert_eq!(state.turn(), PlayerColor::Blue);
}

#[test]
fn test_double_sequence_scores_two() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    // Blue builds the four arms of a cross, Red plays elsewhere.
    apply_all(
        &mut state,
        &[
            (0, 1, Letter::S), // Blue
            (2, 2, Letter::O), // Red
            (2, 1, Letter::S), // Blue
            (2, 0, Letter::O), // Red
            (1, 0, Letter::S), // Blue
            (0, 2, Letter::O), // Red
            (1, 2, Letter::S), // Blue
            (0, 0, Letter::O), // Red
        ],
    );
    assert_eq!(state.turn(), PlayerColor::Blue);

    // The center O completes both the vertical and the horizontal line.
    let sequences = state.apply(Move::new(1, 1, Letter::O)).unwrap();
    assert_eq!(sequences.len(), 2);
    assert_eq!(state.blue_score(), 2);
}

#[test]
fn test_general_terminal_exactly_on_full_board() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    let cells: Vec<Coord> = state.board().empty_cells().collect();
    for (index, coord) in cells.iter().enumerate() {
        assert!(!state.is_terminal());
        state
            .apply(Move::new(coord.row, coord.col, Letter::O))
            .unwrap();
        let filled = index + 1 == cells.len();
        assert_eq!(state.is_terminal(), filled);
    }
}

#[test]
fn test_moves_rejected_after_terminal() {
    let mut state = GameState::new(3, Variant::Simple).unwrap();
    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (1, 0, Letter::O), (2, 0, Letter::S)],
    );
    assert!(state.is_terminal());
    let result = state.apply(Move::new(1, 1, Letter::S));
    assert_eq!(result, Err(MoveError::MatchOver));
}

#[test]
fn test_last_sequences_replaced_every_move() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (1, 0, Letter::O), (2, 0, Letter::S)],
    );
    assert_eq!(state.last_sequences().len(), 1);

    // Next move completes nothing; the list clears.
    state.apply(Move::new(2, 2, Letter::O)).unwrap();
    assert!(state.last_sequences().is_empty());
}

#[test]
fn test_would_form_sequence_is_pure() {
    let mut state = GameState::new(3, Variant::General).unwrap();
    apply_all(&mut state, &[(0, 0, Letter::S), (1, 0, Letter::O)]);

    let before = state.clone();
    for _ in 0..10 {
        assert!(state.would_form_sequence(2, 0, Letter::S));
        assert!(!state.would_form_sequence(2, 2, Letter::S));
        assert!(!state.would_form_sequence(9, 9, Letter::O));
    }
    assert_eq!(state, before);
    assert_eq!(state.board().get(2, 0), Some(Cell::Empty));
}

#[test]
fn test_outcome_reports_winner_or_draw() {
    let mut state = GameState::new(3, Variant::Simple).unwrap();
    assert_eq!(state.outcome(), None);

    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (1, 0, Letter::O), (2, 0, Letter::S)],
    );
    assert_eq!(state.outcome(), Some(Outcome::Win(PlayerColor::Blue)));

    // A General match with no sequences at all ends level.
    let mut drawn = GameState::new(3, Variant::General).unwrap();
    let cells: Vec<Coord> = drawn.board().empty_cells().collect();
    for coord in cells {
        drawn
            .apply(Move::new(coord.row, coord.col, Letter::O))
            .unwrap();
    }
    assert_eq!(drawn.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_variant_change_rejected_after_terminal() {
    let mut state = GameState::new(3, Variant::Simple).unwrap();
    assert!(state.set_variant(Variant::General).is_ok());
    assert!(state.set_variant(Variant::Simple).is_ok());

    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (1, 0, Letter::O), (2, 0, Letter::S)],
    );
    assert!(state.is_terminal());
    assert!(state.set_variant(Variant::General).is_err());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut state = GameState::new(4, Variant::General).unwrap();
    apply_all(
        &mut state,
        &[(0, 0, Letter::S), (0, 1, Letter::O), (0, 2, Letter::S)],
    );
    assert_eq!(state.blue_score(), 1);

    state.reset();
    assert_eq!(state, GameState::new(4, Variant::General).unwrap());
}

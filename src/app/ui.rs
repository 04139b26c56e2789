//! Plain-text rendering of match state.

use super::orchestrator::GameEvent;
use sos_game::{GameState, Sequence};
use tokio::sync::mpsc;

/// Formats the board with scores and the color to move.
pub fn render(state: &GameState) -> String {
    let mut out = state.board().display();
    out.push('\n');
    out.push_str(&format!(
        "Blue {}  Red {}",
        state.blue_score(),
        state.red_score()
    ));
    if !state.is_terminal() {
        out.push_str(&format!(", {} to move", state.turn()));
    }
    out
}

fn format_sequences(sequences: &[Sequence]) -> String {
    sequences
        .iter()
        .map(|seq| {
            seq.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Consumes game events and prints them until the channel closes.
pub async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::AwaitingInput { color } => {
                println!("{color} to move (row col letter):");
            }
            GameEvent::MoveMade {
                color,
                mv,
                sequences,
                state,
            } => {
                println!("{color} played {mv}");
                if !sequences.is_empty() {
                    println!(
                        "{color} scored {}: {}",
                        sequences.len(),
                        format_sequences(&sequences)
                    );
                }
                println!("{}", render(&state));
            }
            GameEvent::Rejected { mv, reason } => {
                println!("Rejected {mv}: {reason}");
            }
            GameEvent::GameOver { outcome, state } => {
                println!("Match over: {outcome}");
                println!("Final score: Blue {}  Red {}", state.blue_score(), state.red_score());
            }
        }
    }
}

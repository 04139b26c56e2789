//! Terminal application: orchestration, input, rendering.

mod input;
mod orchestrator;
mod ui;

pub use orchestrator::{run_match, MatchOptions};

use anyhow::Result;
use sos_game::{MatchController, Variant};
use std::path::Path;

/// Replays a saved move log and prints the final position.
pub fn run_replay(file: &Path, size: usize, variant: Variant) -> Result<()> {
    let mut controller = MatchController::start_match(size, variant)?;
    let count = controller.replay_moves(file)?;

    println!("Replayed {count} moves from {}", file.display());
    println!("{}", ui::render(controller.state()));
    match controller.state().outcome() {
        Some(outcome) => println!("{outcome}"),
        None => println!("Match still in progress"),
    }
    Ok(())
}

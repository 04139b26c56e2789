//! Game loop driving the match controller.

use super::input::HumanInput;
use super::ui;
use anyhow::Result;
use sos_game::{
    GameState, MatchController, Move, Outcome, PlayerColor, Sequence, StrategyKind, Variant,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Options collected from the command line.
#[derive(Debug)]
pub struct MatchOptions {
    /// Board side length.
    pub size: usize,
    /// Match variant.
    pub variant: Variant,
    /// Blue's strategy.
    pub blue: StrategyKind,
    /// Red's strategy.
    pub red: StrategyKind,
    /// Where to save the move log, if anywhere.
    pub log: Option<PathBuf>,
    /// Pacing delay before each computer move.
    pub delay_ms: u64,
}

/// Messages sent from the game loop to the renderer.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was committed.
    MoveMade {
        /// The color that moved.
        color: PlayerColor,
        /// The committed move.
        mv: Move,
        /// Sequences the move completed.
        sequences: Vec<Sequence>,
        /// Snapshot after the move.
        state: GameState,
    },
    /// A submitted move was rejected.
    Rejected {
        /// The rejected move.
        mv: Move,
        /// Why it was rejected.
        reason: String,
    },
    /// Waiting for a human move.
    AwaitingInput {
        /// The color to move.
        color: PlayerColor,
    },
    /// The match ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
        /// Final snapshot.
        state: GameState,
    },
}

/// Runs a full match to its terminal state.
pub async fn run_match(options: MatchOptions) -> Result<()> {
    let mut controller = MatchController::start_match(options.size, options.variant)?;
    controller.set_strategy(PlayerColor::Blue, options.blue);
    controller.set_strategy(PlayerColor::Red, options.red);
    info!(?options, "match configured");

    println!("{}", ui::render(controller.state()));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(ui::render_events(event_rx));

    let result = run_loop(&mut controller, &options, &event_tx).await;

    drop(event_tx);
    renderer.await?;

    if let Some(path) = &options.log {
        controller.save_moves(path)?;
        println!("Move log saved to {}", path.display());
    }
    result
}

async fn run_loop(
    controller: &mut MatchController,
    options: &MatchOptions,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
) -> Result<()> {
    let mut input = HumanInput::new();

    loop {
        if controller.state().is_terminal() {
            if let Some(outcome) = controller.state().outcome() {
                event_tx.send(GameEvent::GameOver {
                    outcome,
                    state: controller.state().clone(),
                })?;
            }
            return Ok(());
        }

        let color = controller.state().turn();
        if controller.is_current_mover_computer() {
            tokio::time::sleep(Duration::from_millis(options.delay_ms)).await;
            if let Some((mv, sequences)) = controller.step()? {
                event_tx.send(GameEvent::MoveMade {
                    color,
                    mv,
                    sequences,
                    state: controller.state().clone(),
                })?;
            }
        } else {
            event_tx.send(GameEvent::AwaitingInput { color })?;
            let mv = input.read_move().await?;
            debug!(%color, %mv, "human move submitted");
            match controller.submit(mv) {
                Ok(sequences) => event_tx.send(GameEvent::MoveMade {
                    color,
                    mv,
                    sequences,
                    state: controller.state().clone(),
                })?,
                Err(reason) => event_tx.send(GameEvent::Rejected {
                    mv,
                    reason: reason.to_string(),
                })?,
            }
        }
    }
}

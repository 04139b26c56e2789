//! Command-line interface for sos_game.

use clap::{Parser, Subcommand};
use sos_game::config::{DEFAULT_BOARD_SIZE, DEFAULT_MOVE_DELAY_MS};
use sos_game::{StrategyKind, Variant};
use std::path::PathBuf;

/// SOS - place S-O-S lines to score
#[derive(Parser, Debug)]
#[command(name = "sos_game")]
#[command(about = "SOS board game with computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Board side length (3-12)
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Match variant: simple or general
        #[arg(short, long, default_value = "simple")]
        variant: Variant,

        /// Blue's strategy: human, easy, medium, or hard
        #[arg(long, default_value = "human")]
        blue: StrategyKind,

        /// Red's strategy: human, easy, medium, or hard
        #[arg(long, default_value = "human")]
        red: StrategyKind,

        /// Write the move log here when the match ends
        #[arg(long)]
        log: Option<PathBuf>,

        /// Delay before each computer move, in milliseconds
        #[arg(long, default_value_t = DEFAULT_MOVE_DELAY_MS)]
        delay_ms: u64,
    },

    /// Replay a saved move log and print the final position
    Replay {
        /// Path to the move log
        file: PathBuf,

        /// Board side length the log was recorded on (3-12)
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Match variant the log was recorded under
        #[arg(short, long, default_value = "simple")]
        variant: Variant,
    },
}

//! Keyboard input for human moves.

use anyhow::{anyhow, bail, Result};
use sos_game::{Letter, Move};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads human moves from standard input.
pub struct HumanInput {
    lines: Lines<BufReader<Stdin>>,
}

impl HumanInput {
    /// Creates a reader over this process's stdin.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Reads the next move, reprompting until a line parses.
    pub async fn read_move(&mut self) -> Result<Move> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                bail!("input closed");
            };
            match parse_move(&line) {
                Ok(mv) => return Ok(mv),
                Err(reason) => println!("{reason}; enter: row col letter (e.g. 0 2 S)"),
            }
        }
    }
}

fn parse_move(line: &str) -> Result<Move> {
    let mut fields = line.split_whitespace();
    let row = fields
        .next()
        .ok_or_else(|| anyhow!("missing row"))?
        .parse()?;
    let col = fields
        .next()
        .ok_or_else(|| anyhow!("missing column"))?
        .parse()?;
    let letter = Letter::from_str(fields.next().ok_or_else(|| anyhow!("missing letter"))?)?;
    if fields.next().is_some() {
        bail!("too many fields");
    }
    Ok(Move::new(row, col, letter))
}

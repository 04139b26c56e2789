//! Core domain types for the SOS game.

use serde::{Deserialize, Serialize};

/// Letter a player may place in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    /// The letter 'S'.
    S,
    /// The letter 'O'.
    O,
}

/// One of the two players, identified by color. Blue moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayerColor {
    /// The blue player (goes first).
    Blue,
    /// The red player (goes second).
    Red,
}

impl PlayerColor {
    /// Returns the other color.
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Blue => PlayerColor::Red,
            PlayerColor::Red => PlayerColor::Blue,
        }
    }
}

/// Match variant: how the game ends.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    /// The match ends the instant any sequence is formed.
    Simple,
    /// Play continues until the board is full; higher score wins.
    General,
}

/// A cell coordinate: row and column, both zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A completed S-O-S line, ordered along its axis.
pub type Sequence = [Coord; 3];

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a placed letter.
    Filled(Letter),
}

impl Cell {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled(letter) => Some(letter),
        }
    }
}

/// n×n grid of cells.
///
/// The board is a plain container: bounds-checked reads, writes reserved to
/// the rule engine. A non-empty cell never changes value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (row, col) lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Whether the cell at (row, col) is on the board and empty.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Writes a cell. Out-of-range writes are ignored; callers validate first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col] = cell;
        }
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            (*cell == Cell::Empty).then(|| Coord::new(index / self.size, index % self.size))
        })
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Filled(Letter::S) => 'S',
                    Cell::Filled(Letter::O) => 'O',
                };
                result.push(symbol);
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

/// Result of a finished match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// The named color holds the higher score.
    #[display("{_0} wins")]
    Win(PlayerColor),
    /// Scores are level.
    #[display("Draw")]
    Draw,
}

//! S-O-S sequence detection.

use super::super::types::{Board, Coord, Letter, Sequence};
use tracing::instrument;

/// The four undirected axes: horizontal, vertical, diagonal, anti-diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns every S-O-S line completed by placing `letter` at (row, col).
///
/// The placement is virtual: the cell's stored value is ignored and `letter`
/// is read in its place, so the same function serves both committed moves
/// and side-effect-free probes. Each axis is tested once; an 'S' placement
/// is additionally tested in both orientations (the new cell may be either
/// endpoint), so a single move can complete up to eight distinct lines.
/// Triples are reported ordered along the positive axis direction.
#[instrument(skip(board), level = "debug")]
pub fn detect(board: &Board, row: usize, col: usize, letter: Letter) -> Vec<Sequence> {
    if !board.in_bounds(row, col) {
        return Vec::new();
    }

    let at = |r: isize, c: isize| -> Option<Letter> {
        if r < 0 || c < 0 {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        if (r, c) == (row, col) {
            return Some(letter);
        }
        board.get(r, c)?.letter()
    };
    let coord = |r: isize, c: isize| Coord::new(r as usize, c as usize);

    let (r, c) = (row as isize, col as isize);
    let mut found = Vec::new();

    for (dr, dc) in AXES {
        match letter {
            // The new 'O' is the center: both axis neighbors must be 'S'.
            Letter::O => {
                if at(r - dr, c - dc) == Some(Letter::S) && at(r + dr, c + dc) == Some(Letter::S) {
                    found.push([coord(r - dr, c - dc), Coord::new(row, col), coord(r + dr, c + dc)]);
                }
            }
            // The new 'S' may be either endpoint; both orientations can fire
            // independently on the same axis.
            Letter::S => {
                if at(r + dr, c + dc) == Some(Letter::O)
                    && at(r + 2 * dr, c + 2 * dc) == Some(Letter::S)
                {
                    found.push([
                        Coord::new(row, col),
                        coord(r + dr, c + dc),
                        coord(r + 2 * dr, c + 2 * dc),
                    ]);
                }
                if at(r - dr, c - dc) == Some(Letter::O)
                    && at(r - 2 * dr, c - 2 * dc) == Some(Letter::S)
                {
                    found.push([
                        coord(r - 2 * dr, c - 2 * dc),
                        coord(r - dr, c - dc),
                        Coord::new(row, col),
                    ]);
                }
            }
        }
    }

    found
}

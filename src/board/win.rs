//! Win detection over rows, columns, diagonals and 2x2 blocks.
//!
//! A candidate line wins iff it is fully occupied and its four pieces
//! share at least one attribute index. Lines are scanned in a fixed
//! order - rows, columns, diagonals, blocks - and the first winner is
//! returned; the order is not rule-significant but keeps results
//! deterministic for tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MatchMask, Piece, PiecePool};

use super::grid::Board;
use super::square::Coords;

/// Which family of candidate lines a win came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
    Block,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineKind::Row => "row",
            LineKind::Column => "column",
            LineKind::Diagonal => "diagonal",
            LineKind::Block => "block",
        };
        write!(f, "{name}")
    }
}

/// A winning line: its kind, its squares in scan order, and the mask of
/// attribute indices all four pieces share.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub kind: LineKind,
    pub squares: SmallVec<[Coords; 4]>,
    pub matching: MatchMask,
}

/// All candidate lines for a `width` x `height` grid, in scan order:
/// every row, every column, the two main diagonals (square grids only),
/// then every overlapping 2x2 block by top-left corner, row-major.
pub(super) fn candidate_lines(width: i32, height: i32) -> Vec<(LineKind, SmallVec<[Coords; 4]>)> {
    let mut lines = Vec::new();

    for row in 0..height {
        let squares = (0..width).map(|col| Coords::new(row, col)).collect();
        lines.push((LineKind::Row, squares));
    }

    for col in 0..width {
        let squares = (0..height).map(|row| Coords::new(row, col)).collect();
        lines.push((LineKind::Column, squares));
    }

    if width == height {
        let down = (0..width).map(|i| Coords::new(i, i)).collect();
        lines.push((LineKind::Diagonal, down));
        let up = (0..width).map(|i| Coords::new(i, width - i - 1)).collect();
        lines.push((LineKind::Diagonal, up));
    }

    for row in 0..height - 1 {
        for col in 0..width - 1 {
            let corner = Coords::new(row, col);
            let squares = SmallVec::from_slice(&[
                corner,
                corner.offset(0, 1),
                corner.offset(1, 0),
                corner.offset(1, 1),
            ]);
            lines.push((LineKind::Block, squares));
        }
    }

    lines
}

/// Scan every candidate line and return the first winner, if any.
///
/// Does not distinguish "full board, no win" from "board not full, no
/// win"; that is the caller's query via `Board::is_full`.
pub(super) fn scan(board: &Board, pieces: &PiecePool) -> Option<WinLine> {
    for (kind, squares) in candidate_lines(board.width(), board.height()) {
        if let Some(matching) = line_match(board, pieces, &squares) {
            tracing::debug!(%kind, ?squares, "winning line found");
            return Some(WinLine {
                kind,
                squares,
                matching,
            });
        }
    }
    None
}

/// The surviving match mask for one candidate line, or `None` if the
/// line has an empty square or no attribute index survives.
fn line_match(board: &Board, pieces: &PiecePool, squares: &[Coords]) -> Option<MatchMask> {
    let mut line_pieces = SmallVec::<[&Piece; 4]>::new();
    for &coords in squares {
        // A line with any empty square never wins.
        let id = board.piece_at(coords)?;
        line_pieces.push(pieces.get(id)?);
    }

    let first = line_pieces.first()?;
    let mut matching = MatchMask::all_matching(first.attributes().len());
    for piece in &line_pieces[1..] {
        matching.narrow(first.attributes(), piece.attributes());
    }

    matching.any().then_some(matching)
}

//! The board: a fixed grid of squares with occupancy, a single-selection
//! highlight, spatial queries and the win scan entry point.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Piece, PieceId, PiecePool, RuleError};

use super::square::{Coords, Position, Square};
use super::win::{self, WinLine};

/// Vertical offset of square centers above the origin plane.
const BOARD_THICKNESS: f32 = 0.21;

/// The game board.
///
/// Owns every square (created once, never destroyed) and the single
/// "currently selected square" back-reference. Invariants: at most one
/// square is selected; a square is either free or holds exactly one
/// piece.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    squares: FxHashMap<Coords, Square>,
    selected: Option<Coords>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 2 && height >= 2, "Board must be at least 2x2");

        let mut squares = FxHashMap::default();
        for row in 0..height {
            for col in 0..width {
                let coords = Coords::new(row, col);
                squares.insert(coords, Square::new(coords));
            }
        }

        Self {
            width,
            height,
            squares,
            selected: None,
        }
    }

    /// Grid width in squares.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in squares.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether coordinates are on the grid.
    #[must_use]
    pub fn contains(&self, coords: Coords) -> bool {
        self.squares.contains_key(&coords)
    }

    /// Get a square by coordinates.
    #[must_use]
    pub fn square(&self, coords: Coords) -> Option<&Square> {
        self.squares.get(&coords)
    }

    /// The piece placed at `coords`, if any.
    #[must_use]
    pub fn piece_at(&self, coords: Coords) -> Option<PieceId> {
        self.squares.get(&coords).and_then(Square::piece)
    }

    /// Every coordinate in row-major order. The map itself iterates in
    /// arbitrary order; queries that must be deterministic go through
    /// this.
    pub fn coords_row_major(&self) -> impl Iterator<Item = Coords> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coords::new(row, col)))
    }

    /// True iff every square holds a piece.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.values().all(|s| !s.is_free())
    }

    /// True iff no square holds a piece.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.values().all(Square::is_free)
    }

    /// The free squares, in row-major order.
    pub fn free_squares(&self) -> impl Iterator<Item = Coords> + '_ {
        self.coords_row_major()
            .filter(|coords| self.squares[coords].is_free())
    }

    /// Spatial position of a square's center, on a grid centered at the
    /// origin with unit square pitch.
    #[must_use]
    pub fn square_position(&self, coords: Coords) -> Position {
        Position::new(
            0.5 + coords.row as f32 - self.width as f32 / 2.0,
            BOARD_THICKNESS,
            0.5 + coords.col as f32 - self.height as f32 / 2.0,
        )
    }

    /// The square nearest to a reference point, optionally restricted to
    /// free squares. `None` when no candidate exists (e.g. a full board
    /// with `free_only`). Ties resolve to the first square in row-major
    /// order.
    #[must_use]
    pub fn nearest_square(&self, point: Position, free_only: bool) -> Option<Coords> {
        let mut nearest: Option<(Coords, f32)> = None;

        for coords in self.coords_row_major() {
            if free_only && !self.squares[&coords].is_free() {
                continue;
            }
            let distance = self.square_position(coords).distance_sq(point);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((coords, distance));
            }
        }

        nearest.map(|(coords, _)| coords)
    }

    /// The currently selected square, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Coords> {
        self.selected
    }

    /// Select a square, implicitly deselecting the previous one.
    pub fn select(&mut self, coords: Coords) -> Result<(), RuleError> {
        if !self.contains(coords) {
            return Err(RuleError::OutOfBounds { coords });
        }

        if let Some(previous) = self.selected.take() {
            if let Some(square) = self.squares.get_mut(&previous) {
                square.selected = false;
            }
        }

        if let Some(square) = self.squares.get_mut(&coords) {
            square.selected = true;
        }
        self.selected = Some(coords);
        Ok(())
    }

    /// Drop the current selection, if any.
    pub fn deselect(&mut self) {
        if let Some(coords) = self.selected.take() {
            if let Some(square) = self.squares.get_mut(&coords) {
                square.selected = false;
            }
        }
    }

    /// Clear the selection flag on every square and the back-reference.
    pub fn deselect_all(&mut self) {
        for square in self.squares.values_mut() {
            square.selected = false;
        }
        self.selected = None;
    }

    /// Place a picked piece on a square.
    ///
    /// Fails with `OutOfBounds` off the grid, and with
    /// `IllegalPlacement` when the square is occupied or the piece is
    /// not in the picked state; failures mutate nothing. On success the
    /// square records the piece, the piece transitions to placed, and
    /// all selection is cleared. The win scan is the caller's next call.
    pub fn place_piece(&mut self, piece: &mut Piece, coords: Coords) -> Result<(), RuleError> {
        let Some(square) = self.squares.get_mut(&coords) else {
            return Err(RuleError::OutOfBounds { coords });
        };
        if !square.is_free() || !piece.is_picked() {
            return Err(RuleError::IllegalPlacement { coords });
        }

        square.piece = Some(piece.id());
        piece.put();
        debug!(piece = %piece.id(), %coords, "piece placed");

        self.deselect_all();
        Ok(())
    }

    /// Scan all candidate lines for a win. See the `win` module for the
    /// exact policy.
    #[must_use]
    pub fn check_win(&self, pieces: &PiecePool) -> Option<WinLine> {
        win::scan(self, pieces)
    }

    /// Clear all occupancy, piece references and selection. Squares
    /// survive.
    pub fn reset(&mut self) {
        for square in self.squares.values_mut() {
            square.piece = None;
            square.selected = false;
        }
        self.selected = None;
    }
}

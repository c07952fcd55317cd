//! The selection cursor.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coords, Position};
use crate::core::{Direction, PieceId, PiecePool};

/// Which quarter-turn the camera has orbited around the board.
///
/// Supplied by the camera collaborator so that a step intent's "up"
/// means up on screen rather than up in grid space. `Q0` is the home
/// orientation; each successive quadrant is a further quarter turn
/// counterclockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YawQuadrant {
    #[default]
    Q0,
    Q1,
    Q2,
    Q3,
}

impl YawQuadrant {
    /// Quantize a yaw angle in degrees to the nearest quadrant.
    #[must_use]
    pub fn from_yaw_degrees(yaw: f32) -> Self {
        let quadrant = (yaw / 90.0).round().rem_euclid(4.0) as u8;
        match quadrant {
            1 => YawQuadrant::Q1,
            2 => YawQuadrant::Q2,
            3 => YawQuadrant::Q3,
            _ => YawQuadrant::Q0,
        }
    }

    /// Rotate a grid offset `(d_row, d_col)` into this quadrant's frame.
    #[must_use]
    pub const fn rotate(self, offset: (i32, i32)) -> (i32, i32) {
        let (d_row, d_col) = offset;
        match self {
            YawQuadrant::Q0 => (d_row, d_col),
            YawQuadrant::Q1 => (-d_col, d_row),
            YawQuadrant::Q2 => (-d_row, -d_col),
            YawQuadrant::Q3 => (d_col, -d_row),
        }
    }
}

/// Discrete navigation state: the external geometry inputs needed to
/// resolve a step intent into a selection target.
///
/// The cursor is read-only over the board and the pool; the turn
/// controller applies the selection it resolves (and emits the events).
#[derive(Clone, Debug, Default)]
pub struct SelectionCursor {
    quadrant: YawQuadrant,
    camera_focus: Position,
}

impl SelectionCursor {
    /// Cursor at the home camera orientation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current camera yaw quadrant.
    #[must_use]
    pub fn quadrant(&self) -> YawQuadrant {
        self.quadrant
    }

    /// Update the camera yaw quadrant (camera collaborator input).
    pub fn set_camera_quadrant(&mut self, quadrant: YawQuadrant) {
        self.quadrant = quadrant;
    }

    /// Current camera focus point.
    #[must_use]
    pub fn camera_focus(&self) -> Position {
        self.camera_focus
    }

    /// Update the camera focus point (camera collaborator input).
    pub fn set_camera_focus(&mut self, focus: Position) {
        self.camera_focus = focus;
    }

    /// Resolve a placing-phase step to the square that should become
    /// selected.
    ///
    /// With a selected square, the target is the adjacent square in the
    /// screen-corrected direction; stepping off the grid resolves to
    /// nothing (the selection stays put). With no selection, the step
    /// lands on the free square nearest the camera focus.
    #[must_use]
    pub fn step_square(&self, board: &Board, direction: Direction) -> Option<Coords> {
        match board.selected() {
            Some(current) => {
                let (d_row, d_col) = self.quadrant.rotate(direction.offset());
                let target = current.offset(d_row, d_col);
                board.contains(target).then_some(target)
            }
            None => board.nearest_square(self.camera_focus, true),
        }
    }

    /// Resolve a picking-phase step to the piece that should become
    /// selected.
    ///
    /// `Right`/`Down` advance to the next free piece in pool creation
    /// order, `Left`/`Up` go back, wrapping around. With no selection,
    /// the step lands on the first free piece.
    #[must_use]
    pub fn step_piece(&self, pieces: &PiecePool, direction: Direction) -> Option<PieceId> {
        let forward = matches!(direction, Direction::Right | Direction::Down);
        match pieces.selected() {
            Some(current) if forward => pieces.next_free(current),
            Some(current) => pieces.prev_free(current),
            None => pieces.first_free(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_quadrant_rotation() {
        let up = Direction::Up.offset();

        assert_eq!(YawQuadrant::Q0.rotate(up), (-1, 0));
        assert_eq!(YawQuadrant::Q1.rotate(up), (0, -1));
        assert_eq!(YawQuadrant::Q2.rotate(up), (1, 0));
        assert_eq!(YawQuadrant::Q3.rotate(up), (0, 1));
    }

    #[test]
    fn test_quadrant_rotation_composes() {
        // Four quarter turns bring any offset home.
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let offset = direction.offset();
            let once = YawQuadrant::Q1.rotate(offset);
            let twice = YawQuadrant::Q1.rotate(once);
            assert_eq!(twice, YawQuadrant::Q2.rotate(offset));
            let thrice = YawQuadrant::Q1.rotate(twice);
            assert_eq!(thrice, YawQuadrant::Q3.rotate(offset));
            assert_eq!(YawQuadrant::Q1.rotate(thrice), offset);
        }
    }

    #[test]
    fn test_from_yaw_degrees() {
        assert_eq!(YawQuadrant::from_yaw_degrees(0.0), YawQuadrant::Q0);
        assert_eq!(YawQuadrant::from_yaw_degrees(30.0), YawQuadrant::Q0);
        assert_eq!(YawQuadrant::from_yaw_degrees(60.0), YawQuadrant::Q1);
        assert_eq!(YawQuadrant::from_yaw_degrees(90.0), YawQuadrant::Q1);
        assert_eq!(YawQuadrant::from_yaw_degrees(180.0), YawQuadrant::Q2);
        assert_eq!(YawQuadrant::from_yaw_degrees(270.0), YawQuadrant::Q3);
        assert_eq!(YawQuadrant::from_yaw_degrees(350.0), YawQuadrant::Q0);
        assert_eq!(YawQuadrant::from_yaw_degrees(-90.0), YawQuadrant::Q3);
        assert_eq!(YawQuadrant::from_yaw_degrees(450.0), YawQuadrant::Q1);
    }

    #[test]
    fn test_step_square_adjacent() {
        let mut board = Board::new(4, 4);
        board.select(Coords::new(1, 1)).unwrap();
        let cursor = SelectionCursor::new();

        assert_eq!(
            cursor.step_square(&board, Direction::Right),
            Some(Coords::new(1, 2))
        );
        assert_eq!(
            cursor.step_square(&board, Direction::Up),
            Some(Coords::new(0, 1))
        );
    }

    #[test]
    fn test_step_square_respects_quadrant() {
        let mut board = Board::new(4, 4);
        board.select(Coords::new(1, 1)).unwrap();
        let mut cursor = SelectionCursor::new();
        cursor.set_camera_quadrant(YawQuadrant::Q2);

        // With the camera opposite, screen-up is grid-down.
        assert_eq!(
            cursor.step_square(&board, Direction::Up),
            Some(Coords::new(2, 1))
        );
    }

    #[test]
    fn test_step_square_off_grid_is_noop() {
        let mut board = Board::new(4, 4);
        board.select(Coords::new(0, 0)).unwrap();
        let cursor = SelectionCursor::new();

        assert_eq!(cursor.step_square(&board, Direction::Up), None);
        assert_eq!(cursor.step_square(&board, Direction::Left), None);
    }

    #[test]
    fn test_step_square_fallback_to_nearest_free() {
        let board = Board::new(4, 4);
        let mut cursor = SelectionCursor::new();
        cursor.set_camera_focus(Position::new(10.0, 0.0, 10.0));

        // Nothing selected: land on the free square nearest the camera.
        assert_eq!(
            cursor.step_square(&board, Direction::Down),
            Some(Coords::new(3, 3))
        );
    }

    #[test]
    fn test_step_piece_navigation() {
        let mut pool = PiecePool::new(4);
        let cursor = SelectionCursor::new();

        // Nothing selected: start at the first free piece.
        assert_eq!(
            cursor.step_piece(&pool, Direction::Right),
            Some(PieceId::new(0))
        );

        pool.select(PieceId::new(0));
        assert_eq!(
            cursor.step_piece(&pool, Direction::Right),
            Some(PieceId::new(1))
        );
        assert_eq!(
            cursor.step_piece(&pool, Direction::Down),
            Some(PieceId::new(1))
        );
        // Backwards wraps around the pool.
        assert_eq!(
            cursor.step_piece(&pool, Direction::Left),
            Some(PieceId::new(15))
        );
        assert_eq!(
            cursor.step_piece(&pool, Direction::Up),
            Some(PieceId::new(15))
        );
    }

    #[test]
    fn test_step_piece_skips_unfree() {
        let mut pool = PiecePool::new(4);
        for id in [1u8, 2] {
            let piece = pool.get_mut(PieceId::new(id)).unwrap();
            piece.select();
            piece.pick(Player::One);
            piece.put();
        }
        pool.select(PieceId::new(0));
        let cursor = SelectionCursor::new();

        assert_eq!(
            cursor.step_piece(&pool, Direction::Right),
            Some(PieceId::new(3))
        );
    }
}

//! Outbound observation events.

use serde::{Deserialize, Serialize};

use crate::board::{Coords, WinLine};
use crate::core::{Attributes, Holder, Piece, PieceId, PieceState};
use crate::turn::GameStatus;

/// Something the core did that collaborators may want to react to.
///
/// All payloads are plain snapshots - attribute values, coordinates,
/// states - never references into engine state, so renderers and audio
/// can hold them across frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece changed lifecycle state or custody.
    PieceStateChanged {
        piece: PieceId,
        state: PieceState,
        holder: Holder,
        attributes: Attributes,
    },
    /// A square gained the navigation highlight.
    SquareSelected { coords: Coords },
    /// A square lost the navigation highlight.
    SquareDeselected { coords: Coords },
    /// A piece was placed on the board.
    PiecePlaced {
        piece: PieceId,
        coords: Coords,
        attributes: Attributes,
    },
    /// The scanner found a winning line. Fired just before the matching
    /// `StatusChanged`, so effects can highlight the squares.
    WinDetected { line: WinLine },
    /// The overall game status changed (including reset back to
    /// in-progress).
    StatusChanged { status: GameStatus },
    /// The engine entered or left the idle state.
    IdleChanged { idle: bool },
}

impl GameEvent {
    /// Snapshot a piece's current state into an event.
    pub(crate) fn piece_changed(piece: &Piece) -> Self {
        GameEvent::PieceStateChanged {
            piece: piece.id(),
            state: piece.state(),
            holder: piece.holder(),
            attributes: piece.attributes().clone(),
        }
    }

    /// Snapshot a placement into an event.
    pub(crate) fn piece_placed(piece: &Piece, coords: Coords) -> Self {
        GameEvent::PiecePlaced {
            piece: piece.id(),
            coords,
            attributes: piece.attributes().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_changed_snapshot() {
        let piece = Piece::new(PieceId::new(4), Attributes::new(&[true, false, true, false]));
        let event = GameEvent::piece_changed(&piece);

        assert_eq!(
            event,
            GameEvent::PieceStateChanged {
                piece: PieceId::new(4),
                state: PieceState::Free,
                holder: Holder::None,
                attributes: Attributes::new(&[true, false, true, false]),
            }
        );
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::SquareSelected {
            coords: Coords::new(2, 1),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}

//! Error kinds reported to the intent dispatcher.
//!
//! Every condition here is local and recoverable: the core refuses the
//! mutation and reports why; how that surfaces to the player (usually by
//! ignoring the input) is the adapter's business. "No winning line" and
//! "board not full" are ordinary results, never errors.

use thiserror::Error;

use crate::board::Coords;

use super::piece::{PieceId, PieceState};

/// A refused intent or mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The square is occupied, or the piece is not in the picked state.
    #[error("illegal placement at {coords}")]
    IllegalPlacement {
        /// Target square of the refused placement.
        coords: Coords,
    },

    /// An intent demanded an edge the piece state machine forbids, e.g.
    /// selecting a placed piece or selecting while placing.
    #[error("{piece} cannot leave the {from} state this way")]
    InvalidPieceTransition {
        /// The piece the intent named.
        piece: PieceId,
        /// Its state at the time of the refusal.
        from: PieceState,
    },

    /// Coordinates outside the grid.
    #[error("coordinates {coords} are outside the grid")]
    OutOfBounds {
        /// The offending coordinates.
        coords: Coords,
    },

    /// Confirm with nothing selected or picked.
    #[error("nothing is selected")]
    NoSelection,

    /// A piece id that resolves to nothing in the pool.
    #[error("unknown piece {piece}")]
    UnknownPiece {
        /// The unresolvable id.
        piece: PieceId,
    },

    /// The game has ended; only reset is accepted.
    #[error("the game is over")]
    GameOver,
}

//! # quatter-core
//!
//! Rule and state engine for a Quarto-style four-in-a-row board game:
//! every piece carries four boolean attributes, players alternately pick
//! a piece and place it on a 4x4 grid, and the game ends when four
//! placed pieces sharing at least one attribute line up along a row,
//! column, diagonal or 2x2 block.
//!
//! ## Design Principles
//!
//! 1. **Core only**: rendering, cameras, raycasting, audio and input
//!    devices are external collaborators. Adapters feed [`Intent`]s in
//!    and drain [`GameEvent`]s out; the core never sees a key code or a
//!    scene node.
//!
//! 2. **Explicit dependencies**: the [`TurnController`] owns the board
//!    and the piece pool; adapters own the controller. No ambient
//!    globals.
//!
//! 3. **Configuration over convention**: grid size, attribute count and
//!    input pacing are construction-time values ([`GameConfig`]), not
//!    constants, to support rule variants.
//!
//! ## Architecture
//!
//! Single-threaded and tick-driven: the game loop calls
//! `TurnController::tick` once per frame to advance timers, delivers
//! intents as they arrive, and hands the drained events to whoever
//! renders, plays sounds or tweens effects. Every operation completes
//! within the call that invoked it; there is no asynchronous work to
//! cancel, so "cancel" is just an explicit reset intent.
//!
//! ## Modules
//!
//! - `core`: attributes, players, pieces, configuration, intents, errors
//! - `board`: the square grid, occupancy, spatial queries, win scanner
//! - `turn`: the turn/phase state machine and intent dispatch
//! - `cursor`: discrete selection navigation
//! - `events`: outbound observations
//!
//! ## Example
//!
//! ```
//! use quatter_core::{Coords, GameConfig, Intent, PieceId, TurnController};
//!
//! let mut game = TurnController::new(GameConfig::new());
//!
//! // Player 1 picks a piece and places it.
//! game.handle_intent(Intent::SelectPiece(PieceId::new(3)))?;
//! game.handle_intent(Intent::Confirm)?;
//! game.handle_intent(Intent::SelectSquare(Coords::new(0, 0)))?;
//! game.handle_intent(Intent::Confirm)?;
//!
//! for event in game.drain_events() {
//!     // Hand to rendering / audio collaborators.
//!     let _ = event;
//! }
//! # Ok::<(), quatter_core::RuleError>(())
//! ```

pub mod board;
pub mod core;
pub mod cursor;
pub mod events;
pub mod turn;

// Re-export the public surface.
pub use crate::core::{
    Attributes, Direction, GameConfig, Holder, Intent, MatchMask, Piece, PieceId, PiecePool,
    PieceState, Player, RuleError, StepLimiter,
};

pub use crate::board::{Board, Coords, LineKind, Position, Square, WinLine};

pub use crate::cursor::{SelectionCursor, YawQuadrant};

pub use crate::events::GameEvent;

pub use crate::turn::{GameStatus, Phase, TurnController};

//! Core rule types: attributes, players, pieces, configuration, intents,
//! errors.
//!
//! These are the leaf building blocks; the board and the turn controller
//! are built on top of them. Rule constants come in via [`GameConfig`]
//! rather than being hardcoded.

pub mod attributes;
pub mod config;
pub mod error;
pub mod intent;
pub mod piece;
pub mod player;

pub use attributes::{Attributes, MatchMask};
pub use config::GameConfig;
pub use error::RuleError;
pub use intent::{Direction, Intent, StepLimiter};
pub use piece::{Holder, Piece, PieceId, PiecePool, PieceState};
pub use player::Player;

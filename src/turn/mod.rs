//! The turn/phase state machine.
//!
//! `TurnController` is the single entry point for gameplay: adapters
//! deliver [`Intent`](crate::core::Intent)s, the controller validates
//! them against the current `(player, phase)` state, mutates the board
//! and pieces, runs the win scan after every placement, and queues
//! [`GameEvent`](crate::events::GameEvent)s for collaborators.

pub mod controller;

pub use controller::{GameStatus, Phase, TurnController};

//! Outbound observations for rendering, audio and effect collaborators.
//!
//! The core mutates state synchronously and queues a [`GameEvent`] for
//! every observable change; collaborators drain the queue between ticks
//! via `TurnController::drain_events`. There is no subscription
//! machinery - the game loop hands events to whoever needs them.

pub mod event;

pub use event::GameEvent;

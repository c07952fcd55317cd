//! Inbound intents and step pacing.
//!
//! Input adapters translate raw device events (keys, buttons, pointer
//! rays) into this small closed vocabulary; the core never sees a key
//! code or a screen ray. Pointer-driven selection (`SelectPiece`,
//! `SelectSquare`) bypasses pacing; discrete steps go through the
//! [`StepLimiter`].

use serde::{Deserialize, Serialize};

use crate::board::Coords;

use super::piece::PieceId;

/// A discrete step direction, in screen terms.
///
/// The grid offset below is the uncorrected mapping; the selection
/// cursor rotates it by the camera's yaw quadrant so "up" means up on
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid-space offset `(d_row, d_col)` before camera correction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// An abstract player intent, produced by input adapters and consumed by
/// the turn controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Pointer-resolved piece selection. Bypasses step pacing.
    SelectPiece(PieceId),
    /// Pointer-resolved square selection. Bypasses step pacing.
    SelectSquare(Coords),
    /// Discrete selection step. Rate-limited.
    Step(Direction),
    /// Advance the turn: pick the selected piece, or place the picked
    /// piece on the selected square.
    Confirm,
    /// Drop the current selection without changing phase.
    CancelSelection,
    /// Full game reset, accepted in any state.
    Reset,
}

/// Repeat-rate limiter for discrete step intents.
///
/// The pacing contract lives here with the intents, not inside the
/// cursor: a step is accepted only when at least `interval` seconds have
/// passed since the last accepted one. A fresh limiter accepts the first
/// step immediately.
#[derive(Clone, Debug)]
pub struct StepLimiter {
    interval: f32,
    since_last: f32,
}

impl StepLimiter {
    /// Create a limiter with the given minimum interval in seconds.
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            since_last: interval,
        }
    }

    /// Advance the limiter clock by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        // Saturate well past the interval; no need to grow unbounded.
        self.since_last = (self.since_last + dt).min(self.interval * 2.0 + 1.0);
    }

    /// Whether a step would currently be accepted.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.since_last >= self.interval
    }

    /// Consume the window: returns true and restarts the interval if
    /// enough time has passed, otherwise false and no state change.
    pub fn try_accept(&mut self) -> bool {
        if self.ready() {
            self.since_last = 0.0;
            true
        } else {
            false
        }
    }
}

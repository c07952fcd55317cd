//! Discrete selection navigation.
//!
//! Translates step intents (up/down/left/right) into board or piece
//! selection targets, independent of continuous pointer selection. The
//! camera's yaw quadrant and focus point are pushed in by the camera
//! collaborator; the cursor never computes geometry itself. Step pacing
//! lives with the intents (`core::intent::StepLimiter`), not here.

pub mod navigation;

pub use navigation::{SelectionCursor, YawQuadrant};

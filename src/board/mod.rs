//! The square grid and the win scanner.
//!
//! The board owns occupancy and the single-square selection highlight;
//! it never owns piece lifetimes (the pool does) and never does
//! rendering-side geometry beyond nearest-square distance queries.
//!
//! ## Key Types
//!
//! - `Coords`: grid coordinates
//! - `Square`: occupancy + transient selection flag
//! - `Board`: the grid, placement, selection, spatial queries
//! - `WinLine` / `LineKind`: a detected win and where it came from

pub mod grid;
pub mod square;
pub mod win;

pub use grid::Board;
pub use square::{Coords, Position, Square};
pub use win::{LineKind, WinLine};

//! Grid coordinate mapping.
//!
//! Maps a rectangular pixel region onto a logical grid of equally sized
//! cells and answers pixel-position queries in grid terms.

mod calculator;

pub use calculator::GridCalculator;

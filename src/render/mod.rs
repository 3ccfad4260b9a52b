//! Drawing layer with pluggable surfaces.
//!
//! This module provides:
//! - The backend-agnostic [`DrawSurface`] trait and its geometry types
//! - The Canvas 2D surface (primary, wasm)
//! - The [`ShapeFactory`] adapter from grid coordinates to pixel primitives
//! - Color utilities

pub mod backend;
pub mod canvas;
pub mod colors;
pub mod shapes;

pub use backend::{DrawSurface, Fill, PixelPoint, PixelRect};
pub use canvas::CanvasSurface;
pub use colors::Rgb;
pub use shapes::{ShapeFactory, ShapeSpec};

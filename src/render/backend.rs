//! Drawing-surface trait for pluggable rendering targets.
//!
//! [`DrawSurface`] abstracts the 2D surface that shapes are drawn onto, so
//! the same grid-relative drawing code runs against Canvas 2D in the
//! browser or a recording surface in tests.

use serde::{Deserialize, Serialize};

use crate::render::colors::Rgb;

/// An absolute pixel position on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle, position plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Whether a closed shape is filled solid or drawn as an outline of the
/// given stroke width in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    #[default]
    Solid,
    Outline(u32),
}

/// A 2D surface that can render pixel-coordinate primitives.
///
/// Implementations perform no coordinate validation; everything arriving
/// here has already been resolved to absolute pixels. Drawing outside the
/// surface bounds is allowed and simply clipped by the target.
pub trait DrawSurface {
    /// Current surface size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgb);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Outline a rectangle with the given stroke width.
    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb, width: u32);

    /// Draw a straight line segment.
    fn line(&mut self, start: PixelPoint, end: PixelPoint, color: Rgb, width: u32);

    /// Draw connected line segments; `closed` joins the last point back to
    /// the first.
    fn lines(&mut self, points: &[PixelPoint], closed: bool, color: Rgb, width: u32);

    /// Draw a polygon through the given vertices.
    fn polygon(&mut self, points: &[PixelPoint], color: Rgb, fill: Fill);

    /// Draw a circle around a center point with a radius in pixels.
    fn circle(&mut self, center: PixelPoint, radius: u32, color: Rgb, fill: Fill);
}

//! Common test utilities: a drawing surface that records every call.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridcanvas::{DrawSurface, Fill, PixelPoint, PixelRect, Rgb};

/// One recorded drawing call, with the exact pixel arguments received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear {
        color: Rgb,
    },
    FillRect {
        rect: PixelRect,
        color: Rgb,
    },
    StrokeRect {
        rect: PixelRect,
        color: Rgb,
        width: u32,
    },
    Line {
        start: PixelPoint,
        end: PixelPoint,
        color: Rgb,
        width: u32,
    },
    Lines {
        points: Vec<PixelPoint>,
        closed: bool,
        color: Rgb,
        width: u32,
    },
    Polygon {
        points: Vec<PixelPoint>,
        color: Rgb,
        fill: Fill,
    },
    Circle {
        center: PixelPoint,
        radius: u32,
        color: Rgb,
        fill: Fill,
    },
}

/// A `DrawSurface` that records calls instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb, width: u32) {
        self.ops.push(DrawOp::StrokeRect { rect, color, width });
    }

    fn line(&mut self, start: PixelPoint, end: PixelPoint, color: Rgb, width: u32) {
        self.ops.push(DrawOp::Line {
            start,
            end,
            color,
            width,
        });
    }

    fn lines(&mut self, points: &[PixelPoint], closed: bool, color: Rgb, width: u32) {
        self.ops.push(DrawOp::Lines {
            points: points.to_vec(),
            closed,
            color,
            width,
        });
    }

    fn polygon(&mut self, points: &[PixelPoint], color: Rgb, fill: Fill) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
            fill,
        });
    }

    fn circle(&mut self, center: PixelPoint, radius: u32, color: Rgb, fill: Fill) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            fill,
        });
    }
}

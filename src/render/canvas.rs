//! Canvas 2D drawing surface via web-sys.
//!
//! Implements [`DrawSurface`] over the HTML Canvas 2D API. The type
//! compiles on native targets but only functions under wasm; native code
//! paths use their own `DrawSurface` implementations.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::backend::{DrawSurface, Fill, PixelPoint, PixelRect};
use crate::render::colors::Rgb;

/// A drawing surface backed by an HTML canvas element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    /// Wrap a canvas element, acquiring its 2D context.
    ///
    /// # Errors
    /// Fails when the element has no 2D context (e.g. one of another kind
    /// was already acquired).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("no 2d context available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to CanvasRenderingContext2d"))?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    /// Resize the backing canvas element. Resizing clears the canvas per
    /// the HTML spec; callers redraw afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width;
        self.height = height;
    }

    /// Crisp pixel position for strokes: center the line on the half-pixel
    /// so 1px lines don't blur across two device pixels.
    fn crisp(v: u32) -> f64 {
        f64::from(v) + 0.5
    }

    fn set_stroke(&self, color: Rgb, width: u32) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(f64::from(width.max(1)));
    }

    /// Trace a path through `points` without stroking or filling it.
    fn trace(&self, points: &[PixelPoint], closed: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(Self::crisp(first.x), Self::crisp(first.y));
        for point in rest {
            self.ctx.line_to(Self::crisp(point.x), Self::crisp(point.y));
        }
        if closed {
            self.ctx.close_path();
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb, width: u32) {
        self.set_stroke(color, width);
        self.ctx.stroke_rect(
            Self::crisp(rect.x),
            Self::crisp(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
    }

    fn line(&mut self, start: PixelPoint, end: PixelPoint, color: Rgb, width: u32) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(Self::crisp(start.x), Self::crisp(start.y));
        self.ctx.line_to(Self::crisp(end.x), Self::crisp(end.y));
        self.ctx.stroke();
    }

    fn lines(&mut self, points: &[PixelPoint], closed: bool, color: Rgb, width: u32) {
        if points.is_empty() {
            return;
        }
        self.set_stroke(color, width);
        self.trace(points, closed);
        self.ctx.stroke();
    }

    fn polygon(&mut self, points: &[PixelPoint], color: Rgb, fill: Fill) {
        if points.is_empty() {
            return;
        }
        self.trace(points, true);
        match fill {
            Fill::Solid => {
                self.ctx.set_fill_style_str(&color.to_hex());
                self.ctx.fill();
            }
            Fill::Outline(width) => {
                self.set_stroke(color, width);
                self.ctx.stroke();
            }
        }
    }

    fn circle(&mut self, center: PixelPoint, radius: u32, color: Rgb, fill: Fill) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        );
        match fill {
            Fill::Solid => {
                self.ctx.set_fill_style_str(&color.to_hex());
                self.ctx.fill();
            }
            Fill::Outline(width) => {
                self.set_stroke(color, width);
                self.ctx.stroke();
            }
        }
    }
}

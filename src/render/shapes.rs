//! Grid-relative shape drawing.
//!
//! [`ShapeFactory`] adapts grid coordinates into pixel primitives: every
//! grid tuple is translated through the calculator, then forwarded with
//! the drawing parameters to a [`DrawSurface`]. It validates nothing
//! itself; calculator errors propagate unchanged.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::GridCalculator;
use crate::render::backend::{DrawSurface, Fill, PixelPoint, PixelRect};
use crate::render::colors::Rgb;

/// A grid coordinate pair, `(left_point, top_point)`.
pub type GridPoint = (u32, u32);

/// Converts grid coordinates into drawable pixel primitives.
///
/// Borrows the calculator; one calculator can back any number of
/// factories.
pub struct ShapeFactory<'a> {
    grid: &'a GridCalculator,
}

impl<'a> ShapeFactory<'a> {
    pub fn new(grid: &'a GridCalculator) -> Self {
        Self { grid }
    }

    fn convert_point(&self, (left, top): GridPoint) -> Result<PixelPoint> {
        Ok(PixelPoint::new(
            self.grid.left_point(left)?,
            self.grid.top_point(top)?,
        ))
    }

    fn convert_points(&self, grid_points: &[GridPoint]) -> Result<Vec<PixelPoint>> {
        grid_points.iter().map(|&p| self.convert_point(p)).collect()
    }

    /// Rectangle anchored at a grid point with a pixel extent.
    ///
    /// # Errors
    /// Range error when the anchor lies outside the grid.
    pub fn rect(&self, grid_left: u32, grid_top: u32, width: u32, height: u32) -> Result<PixelRect> {
        let origin = self.convert_point((grid_left, grid_top))?;
        Ok(PixelRect::new(origin.x, origin.y, width, height))
    }

    /// Rectangle spanning two grid points, top-left to bottom-right.
    ///
    /// # Errors
    /// Range error when a point lies outside the grid; order error when a
    /// start point exceeds its end point.
    pub fn cell_rect(
        &self,
        left_start: u32,
        top_start: u32,
        left_end: u32,
        top_end: u32,
    ) -> Result<PixelRect> {
        let (width, height) = self.grid.square(left_start, top_start, left_end, top_end)?;
        let origin = self.convert_point((left_start, top_start))?;
        Ok(PixelRect::new(origin.x, origin.y, width, height))
    }

    /// Draw a rectangle spanning two grid points, top-left to
    /// bottom-right.
    pub fn draw_rect(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgb,
        left_start: u32,
        top_start: u32,
        left_end: u32,
        top_end: u32,
        fill: Fill,
    ) -> Result<()> {
        let rect = self.cell_rect(left_start, top_start, left_end, top_end)?;
        match fill {
            Fill::Solid => surface.fill_rect(rect, color),
            Fill::Outline(width) => surface.stroke_rect(rect, color, width),
        }
        Ok(())
    }

    /// Draw a line between two grid points.
    pub fn draw_line(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgb,
        grid_start: GridPoint,
        grid_end: GridPoint,
        width: u32,
    ) -> Result<()> {
        let start = self.convert_point(grid_start)?;
        let end = self.convert_point(grid_end)?;
        surface.line(start, end, color, width);
        Ok(())
    }

    /// Draw connected line segments through grid points; `closed` joins
    /// the last point back to the first.
    pub fn draw_lines(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgb,
        closed: bool,
        grid_points: &[GridPoint],
        width: u32,
    ) -> Result<()> {
        let points = self.convert_points(grid_points)?;
        surface.lines(&points, closed, color, width);
        Ok(())
    }

    /// Draw a polygon whose vertices sit on grid points.
    pub fn draw_polygon(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgb,
        grid_points: &[GridPoint],
        fill: Fill,
    ) -> Result<()> {
        let points = self.convert_points(grid_points)?;
        surface.polygon(&points, color, fill);
        Ok(())
    }

    /// Draw a circle centered on a grid point with a pixel radius.
    pub fn draw_circle(
        &self,
        surface: &mut dyn DrawSurface,
        color: Rgb,
        grid_center: GridPoint,
        radius: u32,
        fill: Fill,
    ) -> Result<()> {
        let center = self.convert_point(grid_center)?;
        surface.circle(center, radius, color, fill);
        Ok(())
    }

    /// Draw every grid line onto the surface.
    pub fn draw_grid(&self, surface: &mut dyn DrawSurface, color: Rgb) -> Result<()> {
        let (grid_width, grid_height) = self.grid.size();
        let top = self.grid.points_from_top(0)?;
        let bottom = self.grid.points_from_bottom(0)?;
        let left = self.grid.points_from_left(0)?;
        let right = self.grid.points_from_right(0)?;

        for l in 0..=grid_width {
            let x = self.grid.left_point(l)?;
            surface.line(
                PixelPoint::new(x, top),
                PixelPoint::new(x, bottom),
                color,
                1,
            );
        }
        for t in 0..=grid_height {
            let y = self.grid.top_point(t)?;
            surface.line(
                PixelPoint::new(left, y),
                PixelPoint::new(right, y),
                color,
                1,
            );
        }
        Ok(())
    }

    /// Resolve and draw one serde-described shape.
    ///
    /// # Errors
    /// Same range/order errors as the individual draw operations.
    pub fn draw_spec(&self, surface: &mut dyn DrawSurface, spec: &ShapeSpec) -> Result<()> {
        match *spec {
            ShapeSpec::Rect {
                left,
                top,
                right,
                bottom,
                color,
                fill,
            } => self.draw_rect(surface, color, left, top, right, bottom, fill)?,
            ShapeSpec::Line {
                start,
                end,
                color,
                width,
            } => self.draw_line(surface, color, start, end, width)?,
            ShapeSpec::Lines {
                ref points,
                closed,
                color,
                width,
            } => self.draw_lines(surface, color, closed, points, width)?,
            ShapeSpec::Polygon {
                ref points,
                color,
                fill,
            } => self.draw_polygon(surface, color, points, fill)?,
            ShapeSpec::Circle {
                center,
                radius,
                color,
                fill,
            } => self.draw_circle(surface, color, center, radius, fill)?,
        }
        Ok(())
    }
}

fn default_stroke_width() -> u32 {
    1
}

/// One shape in grid coordinates, as described by an external caller
/// (typically deserialized from a JS value or JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Rectangle spanning two grid points.
    Rect {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        color: Rgb,
        #[serde(default)]
        fill: Fill,
    },
    /// Line between two grid points.
    Line {
        start: GridPoint,
        end: GridPoint,
        color: Rgb,
        #[serde(default = "default_stroke_width")]
        width: u32,
    },
    /// Connected segments through grid points.
    Lines {
        points: Vec<GridPoint>,
        #[serde(default)]
        closed: bool,
        color: Rgb,
        #[serde(default = "default_stroke_width")]
        width: u32,
    },
    /// Polygon with vertices on grid points.
    Polygon {
        points: Vec<GridPoint>,
        color: Rgb,
        #[serde(default)]
        fill: Fill,
    },
    /// Circle centered on a grid point with a pixel radius.
    Circle {
        center: GridPoint,
        radius: u32,
        color: Rgb,
        #[serde(default)]
        fill: Fill,
    },
}

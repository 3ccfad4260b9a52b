//! Pre-computed mapping from grid indices to pixel coordinates.
//!
//! Point tables are rebuilt once per construction or update, giving O(1)
//! lookups for every query. Each table entry is derived independently from
//! its index with a single final truncation, so rounding error never
//! compounds across the axis.

use std::fmt;

use crate::error::{Axis, GridError, Result};

/// Maps the pixels of a rectangular region against a grid of caller-chosen
/// size, so shapes can be positioned grid-relative instead of
/// pixel-absolute.
///
/// Grid indices are integers running from `0` to the axis division count
/// inclusive; index `0` is the left/top edge and the division count is the
/// right/bottom edge. Two calculators never share state; nesting one grid
/// inside another is done by constructing a second calculator from the
/// first one's pixel points.
#[derive(Debug, Clone)]
pub struct GridCalculator {
    pixel_start_left: u32,
    pixel_end_left: u32,
    pixel_start_top: u32,
    pixel_end_top: u32,
    grid_width: u32,
    grid_height: u32,
    /// `width_points[i]` = absolute x pixel of vertical grid line `i`.
    width_points: Vec<u32>,
    /// `height_points[j]` = absolute y pixel of horizontal grid line `j`.
    height_points: Vec<u32>,
}

impl GridCalculator {
    /// Create a calculator over the pixel region `(0, 0)..(pixel_end_left,
    /// pixel_end_top)` divided into `grid_width` x `grid_height` cells.
    ///
    /// # Errors
    /// Returns a configuration error when any dimension is zero or the grid
    /// has more divisions than available pixels on an axis.
    pub fn new(
        pixel_end_left: u32,
        pixel_end_top: u32,
        grid_width: u32,
        grid_height: u32,
    ) -> Result<Self> {
        Self::with_origin(pixel_end_left, pixel_end_top, grid_width, grid_height, 0, 0)
    }

    /// Create a calculator whose pixel region starts at `(pixel_start_left,
    /// pixel_start_top)` instead of the surface origin.
    ///
    /// # Errors
    /// Same as [`GridCalculator::new`], plus a configuration error when a
    /// start offset lies beyond its end.
    pub fn with_origin(
        pixel_end_left: u32,
        pixel_end_top: u32,
        grid_width: u32,
        grid_height: u32,
        pixel_start_left: u32,
        pixel_start_top: u32,
    ) -> Result<Self> {
        validate(
            pixel_end_left,
            pixel_end_top,
            grid_width,
            grid_height,
            pixel_start_left,
            pixel_start_top,
        )?;
        let mut calc = Self {
            pixel_start_left,
            pixel_end_left,
            pixel_start_top,
            pixel_end_top,
            grid_width,
            grid_height,
            width_points: Vec::new(),
            height_points: Vec::new(),
        };
        calc.recompute();
        Ok(calc)
    }

    /// Rebuild both point tables from the current fields.
    ///
    /// Only called after validation has passed, so both division counts are
    /// non-zero and each end is at or beyond its start.
    fn recompute(&mut self) {
        self.width_points =
            axis_points(self.pixel_start_left, self.pixel_end_left, self.grid_width);
        self.height_points =
            axis_points(self.pixel_start_top, self.pixel_end_top, self.grid_height);
    }

    /// The grid size in divisions per axis, `(grid_width, grid_height)`.
    ///
    /// Valid indices per axis run from `0` to the division count inclusive,
    /// i.e. there is one more grid line than divisions.
    pub fn size(&self) -> (u32, u32) {
        (self.grid_width, self.grid_height)
    }

    /// The covered region size in pixels, `(width, height)`.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.pixel_end_left - self.pixel_start_left,
            self.pixel_end_top - self.pixel_start_top,
        )
    }

    /// Pixel x coordinate of vertical grid line `point`.
    ///
    /// # Errors
    /// Range error when `point > grid_width`.
    pub fn left_point(&self, point: u32) -> Result<u32> {
        self.width_points
            .get(point as usize)
            .copied()
            .ok_or(GridError::OutOfRange {
                axis: Axis::Horizontal,
                point,
                max: self.grid_width,
            })
    }

    /// Pixel y coordinate of horizontal grid line `point`.
    ///
    /// # Errors
    /// Range error when `point > grid_height`.
    pub fn top_point(&self, point: u32) -> Result<u32> {
        self.height_points
            .get(point as usize)
            .copied()
            .ok_or(GridError::OutOfRange {
                axis: Axis::Vertical,
                point,
                max: self.grid_height,
            })
    }

    /// Pixel position `(x, y)` of the grid point `(left_point, top_point)`.
    ///
    /// # Errors
    /// Range error when either index is outside its axis.
    pub fn position(&self, left_point: u32, top_point: u32) -> Result<(u32, u32)> {
        Ok((self.left_point(left_point)?, self.top_point(top_point)?))
    }

    /// Pixel distance between two vertical grid lines, `left_point1 <=
    /// left_point2`.
    ///
    /// # Errors
    /// Range error when either index is outside the axis; order error when
    /// `left_point1 > left_point2`.
    pub fn width_gap(&self, left_point1: u32, left_point2: u32) -> Result<u32> {
        let start = self.left_point(left_point1)?;
        let end = self.left_point(left_point2)?;
        if left_point1 > left_point2 {
            return Err(GridError::OutOfOrder {
                axis: Axis::Horizontal,
                start: left_point1,
                end: left_point2,
            });
        }
        Ok(end - start)
    }

    /// Pixel distance between two horizontal grid lines, `top_point1 <=
    /// top_point2`.
    ///
    /// # Errors
    /// Range error when either index is outside the axis; order error when
    /// `top_point1 > top_point2`.
    pub fn height_gap(&self, top_point1: u32, top_point2: u32) -> Result<u32> {
        let start = self.top_point(top_point1)?;
        let end = self.top_point(top_point2)?;
        if top_point1 > top_point2 {
            return Err(GridError::OutOfOrder {
                axis: Axis::Vertical,
                start: top_point1,
                end: top_point2,
            });
        }
        Ok(end - start)
    }

    /// Pixel extent `(width, height)` of the rectangle spanned by the grid
    /// points `(left_start, top_start)` and `(left_end, top_end)`.
    ///
    /// # Errors
    /// Arguments are checked left-start, top-start, left-end, top-end for
    /// range, then left pair and top pair for order.
    pub fn square(
        &self,
        left_start: u32,
        top_start: u32,
        left_end: u32,
        top_end: u32,
    ) -> Result<(u32, u32)> {
        self.check_left(left_start)?;
        self.check_top(top_start)?;
        self.check_left(left_end)?;
        self.check_top(top_end)?;
        Ok((
            self.width_gap(left_start, left_end)?,
            self.height_gap(top_start, top_end)?,
        ))
    }

    /// Pixel x coordinate `points` grid points in from the left border.
    ///
    /// # Errors
    /// Range error when `points > grid_width`.
    pub fn points_from_left(&self, points: u32) -> Result<u32> {
        self.left_point(points)
    }

    /// Pixel y coordinate `points` grid points down from the top border.
    ///
    /// # Errors
    /// Range error when `points > grid_height`.
    pub fn points_from_top(&self, points: u32) -> Result<u32> {
        self.top_point(points)
    }

    /// Pixel x coordinate `points` grid points in from the right border.
    ///
    /// `points_from_right(0)` is the right edge; `points_from_right
    /// (grid_width)` reaches the left edge.
    ///
    /// # Errors
    /// Range error when `points > grid_width`.
    pub fn points_from_right(&self, points: u32) -> Result<u32> {
        let point = self
            .grid_width
            .checked_sub(points)
            .ok_or(GridError::OutOfRange {
                axis: Axis::Horizontal,
                point: points,
                max: self.grid_width,
            })?;
        self.left_point(point)
    }

    /// Pixel y coordinate `points` grid points up from the bottom border.
    ///
    /// # Errors
    /// Range error when `points > grid_height`.
    pub fn points_from_bottom(&self, points: u32) -> Result<u32> {
        let point = self
            .grid_height
            .checked_sub(points)
            .ok_or(GridError::OutOfRange {
                axis: Axis::Vertical,
                point: points,
                max: self.grid_height,
            })?;
        self.top_point(point)
    }

    /// Change the grid size, keeping the current pixel range, and rebuild
    /// both point tables.
    ///
    /// # Errors
    /// Configuration error when the new grid does not fit the existing
    /// pixel range; the calculator is left unchanged on failure.
    pub fn update_grid(&mut self, grid_width: u32, grid_height: u32) -> Result<()> {
        validate(
            self.pixel_end_left,
            self.pixel_end_top,
            grid_width,
            grid_height,
            self.pixel_start_left,
            self.pixel_start_top,
        )?;
        self.grid_width = grid_width;
        self.grid_height = grid_height;
        self.recompute();
        Ok(())
    }

    /// Change the pixel range, keeping the current grid size, and rebuild
    /// both point tables.
    ///
    /// # Errors
    /// Configuration error when the current grid does not fit the new pixel
    /// range; the calculator is left unchanged on failure.
    pub fn update_pixel_range(
        &mut self,
        pixel_end_left: u32,
        pixel_end_top: u32,
        pixel_start_left: u32,
        pixel_start_top: u32,
    ) -> Result<()> {
        validate(
            pixel_end_left,
            pixel_end_top,
            self.grid_width,
            self.grid_height,
            pixel_start_left,
            pixel_start_top,
        )?;
        self.pixel_end_left = pixel_end_left;
        self.pixel_end_top = pixel_end_top;
        self.pixel_start_left = pixel_start_left;
        self.pixel_start_top = pixel_start_top;
        self.recompute();
        Ok(())
    }

    fn check_left(&self, point: u32) -> Result<()> {
        if point > self.grid_width {
            return Err(GridError::OutOfRange {
                axis: Axis::Horizontal,
                point,
                max: self.grid_width,
            });
        }
        Ok(())
    }

    fn check_top(&self, point: u32) -> Result<()> {
        if point > self.grid_height {
            return Err(GridError::OutOfRange {
                axis: Axis::Vertical,
                point,
                max: self.grid_height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GridCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridCalculator(pixel range: left={}-{}, top={}-{}; grid: width={}, height={})",
            self.pixel_start_left,
            self.pixel_end_left,
            self.pixel_start_top,
            self.pixel_end_top,
            self.grid_width,
            self.grid_height,
        )
    }
}

/// Validate one full set of construction parameters before any field is
/// committed. Checked in order: end left, end top, grid width, grid height,
/// start left, start top, width fit, height fit.
fn validate(
    pixel_end_left: u32,
    pixel_end_top: u32,
    grid_width: u32,
    grid_height: u32,
    pixel_start_left: u32,
    pixel_start_top: u32,
) -> Result<()> {
    if pixel_end_left < 1 {
        return Err(GridError::PixelEndTooSmall {
            axis: Axis::Horizontal,
            value: pixel_end_left,
        });
    }
    if pixel_end_top < 1 {
        return Err(GridError::PixelEndTooSmall {
            axis: Axis::Vertical,
            value: pixel_end_top,
        });
    }
    if grid_width < 1 {
        return Err(GridError::GridAxisTooSmall {
            axis: Axis::Horizontal,
            value: grid_width,
        });
    }
    if grid_height < 1 {
        return Err(GridError::GridAxisTooSmall {
            axis: Axis::Vertical,
            value: grid_height,
        });
    }
    if pixel_start_left > pixel_end_left {
        return Err(GridError::StartBeyondEnd {
            axis: Axis::Horizontal,
            start: pixel_start_left,
            end: pixel_end_left,
        });
    }
    if pixel_start_top > pixel_end_top {
        return Err(GridError::StartBeyondEnd {
            axis: Axis::Vertical,
            start: pixel_start_top,
            end: pixel_end_top,
        });
    }
    if (pixel_end_left - pixel_start_left) < grid_width {
        return Err(GridError::GridExceedsPixels {
            axis: Axis::Horizontal,
            grid: grid_width,
            pixels: pixel_end_left - pixel_start_left,
        });
    }
    if (pixel_end_top - pixel_start_top) < grid_height {
        return Err(GridError::GridExceedsPixels {
            axis: Axis::Vertical,
            grid: grid_height,
            pixels: pixel_end_top - pixel_start_top,
        });
    }
    Ok(())
}

/// Pixel coordinates of all grid lines on one axis.
///
/// Entry `i` is `start + trunc(span * i / divisions)`, computed in 64-bit
/// so the intermediate product never overflows. Truncation happens once on
/// the final value, never per-step.
fn axis_points(start: u32, end: u32, divisions: u32) -> Vec<u32> {
    let span = u64::from(end - start);
    (0..=divisions)
        .map(|i| {
            let offset = span * u64::from(i) / u64::from(divisions);
            // offset <= span <= u32::MAX, so the conversion never saturates
            start.saturating_add(u32::try_from(offset).unwrap_or(u32::MAX))
        })
        .collect()
}

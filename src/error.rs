//! Structured error types for gridcanvas.
//!
//! Every failure carries the offending values and the valid range so callers
//! can react programmatically instead of parsing message text.

/// The grid axis an error refers to.
///
/// Horizontal values are named after the left edge ("left point", "width"),
/// vertical values after the top edge ("top point", "height").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Edge name used in messages.
    pub(crate) fn edge(self) -> &'static str {
        match self {
            Axis::Horizontal => "left",
            Axis::Vertical => "top",
        }
    }

    /// Span name used in messages.
    pub(crate) fn span(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}

/// All errors produced by grid construction, updates, and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The pixel range end on one axis is zero.
    #[error("pixel end {} ({value}) must be at least 1", .axis.edge())]
    PixelEndTooSmall { axis: Axis, value: u32 },

    /// The grid has zero divisions on one axis.
    #[error("grid {} ({value}) must be at least 1", .axis.span())]
    GridAxisTooSmall { axis: Axis, value: u32 },

    /// The pixel range start lies beyond its end.
    #[error(
        "pixel start {} ({start}) cannot be greater than pixel end {} ({end})",
        .axis.edge(), .axis.edge()
    )]
    StartBeyondEnd { axis: Axis, start: u32, end: u32 },

    /// More grid divisions than available pixels on one axis.
    #[error(
        "grid {} ({grid}) cannot be greater than the available pixel {} ({pixels})",
        .axis.span(), .axis.span()
    )]
    GridExceedsPixels { axis: Axis, grid: u32, pixels: u32 },

    /// A query argument fell outside `0..=max` for its axis.
    #[error("the {} point provided ({point}) isn't in the grid (0 - {max})", .axis.edge())]
    OutOfRange { axis: Axis, point: u32, max: u32 },

    /// A start point exceeded its paired end point on the same axis.
    #[error("{} start point ({start}) is greater than end point ({end})", .axis.edge())]
    OutOfOrder { axis: Axis, start: u32, end: u32 },
}

/// Coarse failure classification.
///
/// Construction and update failures are `Configuration`; query failures are
/// `Range` or `Order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Range,
    Order,
}

impl GridError {
    /// Classify this error into one of the three failure families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::PixelEndTooSmall { .. }
            | GridError::GridAxisTooSmall { .. }
            | GridError::StartBeyondEnd { .. }
            | GridError::GridExceedsPixels { .. } => ErrorKind::Configuration,
            GridError::OutOfRange { .. } => ErrorKind::Range,
            GridError::OutOfOrder { .. } => ErrorKind::Order,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

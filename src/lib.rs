//! gridcanvas - grid-relative positioning and drawing for Canvas 2D
//!
//! Maps the pixels of a drawing surface against a logical grid so shapes
//! can be placed by grid point instead of absolute pixel, with a thin
//! shape adapter that renders grid-coordinate primitives onto an abstract
//! 2D surface (HTML Canvas 2D in the browser).
//!
//! # Usage (Rust)
//!
//! ```
//! use gridcanvas::GridCalculator;
//!
//! // A 100x100 pixel region divided into a 5x5 grid.
//! let mut grid = GridCalculator::new(100, 100, 5, 5)?;
//! assert_eq!(grid.position(1, 1)?, (20, 20));
//! assert_eq!(grid.square(0, 0, 2, 2)?, (40, 40));
//!
//! // The surface grew; remap the same grid onto the new pixels.
//! grid.update_pixel_range(200, 100, 0, 0)?;
//! assert_eq!(grid.left_point(1)?, 40);
//! # Ok::<(), gridcanvas::GridError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridcanvas';
//! await init();
//! const view = new GridView(canvas, 8, 6);
//! view.draw_grid('#000000');
//! view.draw_shapes([
//!   { shape: 'rect', left: 1, top: 1, right: 3, bottom: 2, color: '#FF0000' },
//! ]);
//! ```

pub mod error;
pub mod grid;
pub mod render;
pub mod viewer;

pub use error::{Axis, ErrorKind, GridError, Result};
pub use grid::GridCalculator;
pub use render::{
    CanvasSurface, DrawSurface, Fill, PixelPoint, PixelRect, Rgb, ShapeFactory, ShapeSpec,
};
pub use viewer::GridView;

//! WASM-exported viewer binding a grid to a canvas element.
//!
//! [`GridView`] is the JavaScript entry point: it owns a
//! [`GridCalculator`] sized to a canvas element plus the canvas drawing
//! surface, and exposes the query, resize, and drawing operations to JS.
//! Errors cross the boundary as their message strings.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::grid::GridCalculator;
use crate::render::{CanvasSurface, DrawSurface, PixelPoint, Rgb, ShapeFactory, ShapeSpec};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_color(color: &str) -> Result<Rgb, JsValue> {
    Rgb::from_hex(color).ok_or_else(|| js_err(format!("invalid hex color: {color:?}")))
}

/// A grid calculator bound to a canvas element.
#[wasm_bindgen]
pub struct GridView {
    calc: GridCalculator,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl GridView {
    /// Create a view over a canvas, dividing its current pixel size into
    /// `grid_width` x `grid_height` cells.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        grid_width: u32,
        grid_height: u32,
    ) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let surface = CanvasSurface::new(canvas)?;
        let (width, height) = surface.size();
        let calc =
            GridCalculator::new(width.max(1), height.max(1), grid_width, grid_height)
                .map_err(js_err)?;

        Ok(GridView { calc, surface })
    }

    /// Change the grid size, keeping the canvas pixel range.
    pub fn set_grid(&mut self, grid_width: u32, grid_height: u32) -> Result<(), JsValue> {
        self.calc.update_grid(grid_width, grid_height).map_err(js_err)
    }

    /// Resize the canvas and remap the grid onto the new pixel range.
    ///
    /// The grid is revalidated first; if it no longer fits, the canvas is
    /// left untouched and the previous mapping stays in effect.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.calc
            .update_pixel_range(width, height, 0, 0)
            .map_err(js_err)?;
        self.surface.resize(width, height);
        Ok(())
    }

    /// Pixel x coordinate of vertical grid line `point`.
    pub fn left_point(&self, point: u32) -> Result<u32, JsValue> {
        self.calc.left_point(point).map_err(js_err)
    }

    /// Pixel y coordinate of horizontal grid line `point`.
    pub fn top_point(&self, point: u32) -> Result<u32, JsValue> {
        self.calc.top_point(point).map_err(js_err)
    }

    /// Pixel position of a grid point, as `{x, y}`.
    pub fn position(&self, left_point: u32, top_point: u32) -> Result<JsValue, JsValue> {
        let (x, y) = self.calc.position(left_point, top_point).map_err(js_err)?;
        serde_wasm_bindgen::to_value(&PixelPoint::new(x, y)).map_err(js_err)
    }

    /// Pixel rectangle spanning two grid points, as
    /// `{x, y, width, height}`.
    pub fn cell_rect(
        &self,
        left_start: u32,
        top_start: u32,
        left_end: u32,
        top_end: u32,
    ) -> Result<JsValue, JsValue> {
        let factory = ShapeFactory::new(&self.calc);
        let rect = factory
            .cell_rect(left_start, top_start, left_end, top_end)
            .map_err(js_err)?;
        serde_wasm_bindgen::to_value(&rect).map_err(js_err)
    }

    /// Fill the whole canvas with a hex color.
    pub fn clear(&mut self, color: &str) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        self.surface.clear(color);
        Ok(())
    }

    /// Draw every grid line in a hex color.
    pub fn draw_grid(&mut self, color: &str) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        let factory = ShapeFactory::new(&self.calc);
        factory.draw_grid(&mut self.surface, color).map_err(js_err)
    }

    /// Draw a batch of shapes described as an array of shape objects, e.g.
    /// `[{shape: "circle", center: [2, 2], radius: 10, color: "#FF0000"}]`.
    pub fn draw_shapes(&mut self, shapes: JsValue) -> Result<(), JsValue> {
        let specs: Vec<ShapeSpec> = serde_wasm_bindgen::from_value(shapes).map_err(js_err)?;
        let factory = ShapeFactory::new(&self.calc);
        for spec in &specs {
            factory.draw_spec(&mut self.surface, spec).map_err(js_err)?;
        }
        Ok(())
    }
}

use complex::complex::Complex;
use serde::{Deserialize, Serialize};

use crate::models::point::Point;

/// One rectangular view of the complex plane and the pixel grid it renders
/// to. `top_left.y` is expected to be the larger imaginary part, so row 0 is
/// the top of the image. Degenerate corners are not rejected anywhere; they
/// flow through and produce degenerate rasters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Viewport {
    pub fn new(width_px: u32, height_px: u32, top_left: Point, bottom_right: Point) -> Self {
        Self {
            width_px,
            height_px,
            top_left,
            bottom_right,
        }
    }

    /// Area of the plane rectangle, in plane units.
    pub fn surface_area(&self) -> f64 {
        let dx = (self.bottom_right.x - self.top_left.x).abs();
        let dy = (self.top_left.y - self.bottom_right.y).abs();
        dx * dy
    }

    /// Linear interpolation across the plane rectangle. `fx` and `fy` are
    /// fractions of the pixel grid, `(0.0, 0.0)` being the top-left corner.
    pub fn plane_at(&self, fx: f64, fy: f64) -> Point {
        Point::new(
            fx * (self.bottom_right.x - self.top_left.x) + self.top_left.x,
            self.top_left.y - fy * (self.top_left.y - self.bottom_right.y),
        )
    }

    /// Plane coordinate of a pixel, as the input to the escape iteration.
    pub fn pixel_to_plane(&self, px: u32, py: u32) -> Complex {
        let point = self.plane_at(
            px as f64 / self.width_px as f64,
            py as f64 / self.height_px as f64,
        );
        Complex::new(point.x, point.y)
    }
}

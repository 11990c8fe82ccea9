use crate::graphics::color;
use crate::models::fractal::mandelbrot;
use crate::models::viewport::Viewport;

/// One rendered pixel row, tagged with its index so the gathering side can
/// tell rows apart regardless of arrival interleaving. `width_px * 3` RGB
/// bytes, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanline {
    pub row: u32,
    pub rgb: Vec<u8>,
}

impl Scanline {
    /// Renders row `row` of the viewport: per pixel, map to the plane, run
    /// the escape iteration, color the count.
    pub fn render(viewport: &Viewport, row: u32, budget: u32) -> Self {
        let mut rgb = Vec::with_capacity(viewport.width_px as usize * 3);

        for px in 0..viewport.width_px {
            let c = viewport.pixel_to_plane(px, row);
            let iterations = mandelbrot::escape_time(c, budget);
            let color = color::escape_color(iterations, budget);
            rgb.extend_from_slice(&[color.r, color.g, color.b]);
        }

        Self { row, rgb }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;

    fn small_view() -> Viewport {
        Viewport::new(4, 4, Point::new(-2.0, 2.0), Point::new(2.0, -2.0))
    }

    #[test]
    fn a_scanline_is_three_bytes_per_pixel() {
        let line = Scanline::render(&small_view(), 2, 100);
        assert_eq!(line.row, 2);
        assert_eq!(line.rgb.len(), 12);
    }

    #[test]
    fn the_first_pixel_follows_the_pixel_mapping() {
        let viewport = small_view();
        let line = Scanline::render(&viewport, 1, 100);

        let c = viewport.pixel_to_plane(0, 1);
        let expected = color::escape_color(mandelbrot::escape_time(c, 100), 100);
        assert_eq!(&line.rgb[..3], &[expected.r, expected.g, expected.b]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let viewport = small_view();
        assert_eq!(
            Scanline::render(&viewport, 3, 109),
            Scanline::render(&viewport, 3, 109)
        );
    }

    #[test]
    fn a_zero_width_viewport_renders_an_empty_row() {
        let viewport = Viewport::new(0, 4, Point::new(-2.0, 2.0), Point::new(2.0, -2.0));
        assert!(Scanline::render(&viewport, 0, 100).rgb.is_empty());
    }
}

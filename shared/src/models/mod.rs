pub mod fractal;
pub mod point;
pub mod raster;
pub mod render_request;
pub mod scanline;
pub mod viewport;

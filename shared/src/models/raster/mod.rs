use crate::models::scanline::Scanline;

/// A fully assembled frame: `height_px` scanlines of `width_px` RGB pixels,
/// concatenated row-major, top row first. This is exactly the response wire
/// image, there is no header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            data: Vec::with_capacity(Self::byte_len(width_px, height_px)),
        }
    }

    pub fn from_bytes(width_px: u32, height_px: u32, data: Vec<u8>) -> Self {
        Self {
            width_px,
            height_px,
            data,
        }
    }

    /// Response size in bytes for the given dimensions.
    pub fn byte_len(width_px: u32, height_px: u32) -> usize {
        width_px as usize * height_px as usize * 3
    }

    /// Appends a row; rows must arrive in raster order.
    pub fn append_scanline(&mut self, line: &Scanline) {
        self.data.extend_from_slice(&line.rgb);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

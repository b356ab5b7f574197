/// Readback buffer - host copy of a render target's color attachment
///
/// Pixels are RGBA8, row-major, in the graphics API's order: the first row
/// in memory is the BOTTOM row of the image. Image files are stored top row
/// first, so anything written to disk must walk the rows backwards
/// (start at the last row, negative stride). `rows_top_down()` and
/// `to_top_down()` do exactly that; getting the direction wrong silently
/// mirrors every frame vertically.

/// Bytes per RGBA8 texel
pub(crate) const BYTES_PER_TEXEL: usize = 4;

/// Heap-allocated RGBA8 readback buffer, bottom row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readback {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Readback {
    /// Zeroed buffer of exactly `width * height * 4` bytes
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; Self::byte_len(width, height)],
        }
    }

    /// Wrap bytes that are already in bottom-up order
    ///
    /// Returns `None` if `pixels` is not exactly `width * height * 4` bytes.
    pub fn from_bottom_up(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == Self::byte_len(width, height)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Byte length of a readback of the given size
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_TEXEL
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one scanline
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_TEXEL
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw bytes, bottom row first
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw bytes for the backend to fill, bottom row first
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Rows in image order (top row first)
    ///
    /// Starts at the last row in memory and walks backwards one stride at a time.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.row_stride().max(1)).rev()
    }

    /// Flipped copy, top row first, ready for an image encoder
    pub fn to_top_down(&self) -> Vec<u8> {
        let mut flipped = Vec::with_capacity(self.pixels.len());
        for row in self.rows_top_down() {
            flipped.extend_from_slice(row);
        }
        flipped
    }

    /// RGBA texel at image coordinates (`y = 0` is the top row)
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let memory_row = (self.height - 1 - y) as usize;
        let offset = memory_row * self.row_stride() + x as usize * BYTES_PER_TEXEL;
        let texel = &self.pixels[offset..offset + BYTES_PER_TEXEL];
        Some([texel[0], texel[1], texel[2], texel[3]])
    }
}

#[cfg(test)]
#[path = "readback_tests.rs"]
mod tests;

//! Page-packed framebuffer mirror
//!
//! The SSD1306's RAM cannot be read back over SPI, so every drawing
//! operation works on this local mirror and a bulk transfer pushes it to
//! the controller. Pixels are packed the way the controller stores them:
//! each byte covers 8 vertically stacked rows (a "page" slice) of a single
//! column. Pixel (x, y) lives at byte `x + (y / 8) * width`, bit `y % 8`,
//! with bit 0 being the topmost row of the page.
//!
//! ## Coordinate policy
//!
//! All coordinates are `i32`. Shape routines may produce negative or
//! oversized intermediates (a circle center near the edge, a line clipped
//! by the border); those pixels are discarded here, silently, instead of
//! wrapping around. Out-of-range writes are never an error.
//!
//! ## Example
//!
//! ```
//! use ssd1306_micro::{Color, Dimensions, DrawMode, Framebuffer};
//!
//! let dims = match Dimensions::new(48, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = Framebuffer::new([0u8; 384], dims);
//!
//! fb.set_pixel(3, 10, Color::Set, DrawMode::Overwrite);
//! assert_eq!(fb.get_pixel(3, 10), Some(Color::Set));
//!
//! // (3, 10) is page 1, bit 2 of column 3
//! assert_eq!(fb.bytes()[3 + 64], 0b0000_0100);
//! ```

use crate::color::{Color, DrawMode};
use crate::config::Dimensions;

/// Local mirror of the controller's pixel RAM
///
/// Generic over the backing storage so callers can use a stack array,
/// a static buffer, or (with the `alloc` feature) a `Vec<u8>`.
pub struct Framebuffer<B> {
    /// Packed pixel bytes
    buf: B,
    /// Panel dimensions the buffer is packed for
    dimensions: Dimensions,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a framebuffer over the given storage
    ///
    /// # Panics
    ///
    /// Panics if the storage is smaller than `dimensions.buffer_size()`.
    /// Use [`Framebuffer::try_new`] for a fallible constructor.
    pub fn new(buf: B, dimensions: Dimensions) -> Self {
        assert!(
            buf.as_ref().len() >= dimensions.buffer_size(),
            "framebuffer storage too small: required {} bytes, got {}",
            dimensions.buffer_size(),
            buf.as_ref().len()
        );
        Self { buf, dimensions }
    }

    /// Try to create a framebuffer, returning the storage back on failure
    pub fn try_new(buf: B, dimensions: Dimensions) -> Result<Self, B> {
        if buf.as_ref().len() < dimensions.buffer_size() {
            return Err(buf);
        }
        Ok(Self { buf, dimensions })
    }

    /// Panel dimensions this buffer is packed for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Write one pixel
    ///
    /// Coordinates outside the panel are silently discarded. Under
    /// [`DrawMode::Overwrite`] the bit is set or cleared unconditionally;
    /// under [`DrawMode::Xor`] the bit toggles on [`Color::Set`] and the
    /// call is a no-op on [`Color::Clear`].
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, mode: DrawMode) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };
        let byte = &mut self.buf.as_mut()[index];
        match mode {
            DrawMode::Xor => {
                if color == Color::Set {
                    *byte ^= bit;
                }
            }
            DrawMode::Overwrite => {
                if color == Color::Set {
                    *byte |= bit;
                } else {
                    *byte &= !bit;
                }
            }
        }
    }

    /// Read one pixel back, `None` outside the panel
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        if self.buf.as_ref()[index] & bit != 0 {
            Some(Color::Set)
        } else {
            Some(Color::Clear)
        }
    }

    /// Overwrite every byte with the given fill value
    ///
    /// `0x00` clears the panel; `0xFF` lights it; any other value paints
    /// the corresponding row stripes.
    pub fn fill(&mut self, value: u8) {
        let size = self.dimensions.buffer_size();
        for byte in &mut self.buf.as_mut()[..size] {
            *byte = value;
        }
    }

    /// The packed bytes, in controller transfer order
    pub fn bytes(&self) -> &[u8] {
        &self.buf.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Mutable access to the packed bytes
    ///
    /// Lets callers compose pre-rendered bitmaps directly, bypassing the
    /// rasterizer entirely.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.dimensions.buffer_size();
        &mut self.buf.as_mut()[..size]
    }

    /// Map (x, y) to (byte index, bit mask), `None` outside the panel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let cols = i32::from(self.dimensions.cols);
        let rows = i32::from(self.dimensions.rows);
        if x < 0 || y < 0 || x >= cols || y >= rows {
            return None;
        }
        let index = x as usize + (y as usize / 8) * cols as usize;
        let bit = 1u8 << (y as usize % 8);
        Some((index, bit))
    }
}

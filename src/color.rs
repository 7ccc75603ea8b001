//! Pixel color and compositing mode for monochrome OLED panels
//!
//! This module defines the [`Color`] enum for the two states a pixel can
//! take on a 1-bit panel, and the [`DrawMode`] enum selecting how a drawing
//! operation combines with the framebuffer content.
//!
//! ## Pixel Representation
//!
//! The SSD1306 stores pixels bit-packed in vertical bytes: one byte covers
//! an 8-row page slice of a single column. A 1 bit lights the pixel (in
//! non-inverted panel mode), a 0 bit leaves it dark.
//!
//! ## Example
//!
//! ```
//! use ssd1306_micro::{Color, DrawMode};
//!
//! assert_eq!(Color::Set.fill_byte(), 0xFF);
//! assert_eq!(Color::Clear.fill_byte(), 0x00);
//! assert_eq!(Color::Set.inverse(), Color::Clear);
//! assert_eq!(DrawMode::default(), DrawMode::Overwrite);
//! ```

/// State of a single pixel on a monochrome panel
///
/// This is a logical on/off state, not an RGB value. Whether `Set` shows
/// light or dark on the glass depends on the panel's invert setting.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Pixel on (bit 1 in the framebuffer)
    Set,
    /// Pixel off (bit 0 in the framebuffer)
    Clear,
}

impl Color {
    /// Get the opposite pixel state
    ///
    /// Glyph rendering plots the inverse color for 0 bits so text actively
    /// clears its background instead of blending with it.
    pub fn inverse(self) -> Self {
        match self {
            Self::Set => Self::Clear,
            Self::Clear => Self::Set,
        }
    }

    /// Get the byte value that fills a whole framebuffer byte with this state
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1306_micro::Color;
    ///
    /// assert_eq!(Color::Set.fill_byte(), 0xFF);
    /// assert_eq!(Color::Clear.fill_byte(), 0x00);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Set => 0xFF,
            Self::Clear => 0x00,
        }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Set,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Clear,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Set => Self::On,
            Color::Clear => Self::Off,
        }
    }
}

/// Compositing policy applied when a drawing operation touches a pixel
///
/// `Overwrite` writes the requested state unconditionally. `Xor` toggles the
/// pixel when the requested color is [`Color::Set`] and leaves the buffer
/// untouched when it is [`Color::Clear`]; XOR-clearing has no defined
/// meaning and stays a no-op.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum DrawMode {
    /// Absolute set/clear of the target bit
    #[default]
    Overwrite,
    /// Toggle the target bit on [`Color::Set`], no-op on [`Color::Clear`]
    Xor,
}

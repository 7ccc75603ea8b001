//! SSD1306 Monochrome OLED Display Driver
//!
//! A driver for SSD1306-based monochrome OLED modules (such as the 64x48
//! MicroOLED breakout) with a page-packed framebuffer, an integer
//! rasterizer, and bitmap font text rendering.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable panel dimensions and RAM window offset
//! - Local framebuffer mirror (the controller RAM is write-only over SPI)
//! - Pixel, line, rectangle and circle primitives with overwrite/XOR
//!   compositing
//! - Bitmap fonts with single- and multi-page glyphs, text cursor with
//!   line wrap
//! - Hardware invert, contrast, flips and horizontal scrolling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_micro::{Builder, Dimensions, Display, GraphicDisplay, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(48, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).column_offset(32).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config), [0u8; 384]);
//! let _ = display.display_mut().init(&mut delay);
//!
//! display.set_cursor(0, 0);
//! display.put_str("Hello");
//! display.rect(0, 10, 64, 20);
//! let _ = display.update();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel color and compositing mode
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations and the transfer protocol
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font descriptors and built-in fonts
pub mod font;
/// Page-packed framebuffer mirror
pub mod framebuffer;
/// Buffered drawing layer: rasterizer, text, cursor
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;

pub use color::{Color, DrawMode};
pub use config::{Builder, Config, Dimensions, MAX_COM_OUTPUTS, MAX_SEGMENT_OUTPUTS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use font::{Font, FONTS, FONT_HEADER_SIZE};
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};

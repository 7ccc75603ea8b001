//! SSD1306 command definitions
//!
//! This module defines all the command bytes used to control the SSD1306
//! OLED display controller. Commands are sent over SPI with the DC pin
//! low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte plus its operand bytes, if any
//! 4. Deassert CS
//!
//! Operands travel on the command channel (DC low), unlike RAM data which
//! is framed with DC high. Multi-byte sequences such as the addressing
//! window setup must be sent as a single frame.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_micro::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Set contrast to maximum
//! let _ = interface.send_command(&[command::SET_CONTRAST, 0xFF]);
//!
//! // Write pixel data to the current addressing window
//! let _ = interface.send_data(&pixel_data);
//! ```

// Fundamental commands

/// Set contrast command (0x81)
///
/// Selects 1 of 256 contrast steps. Requires 1 operand byte (0x00..=0xFF).
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on, resume to RAM content (0xA4)
///
/// Output follows RAM content. This is the normal operating state.
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;

/// Entire display on, ignore RAM content (0xA5)
///
/// Forces every pixel on regardless of RAM. Mostly useful as a lamp test.
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;

/// Normal display command (0xA6)
///
/// RAM bit 1 lights the pixel, bit 0 leaves it dark.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display command (0xA7)
///
/// RAM bit 0 lights the pixel. Inverts the panel without touching RAM.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off / sleep mode command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Memory addressing mode command (0x20)
///
/// Requires 1 operand byte: [`MEMORY_MODE_HORIZONTAL`], [`MEMORY_MODE_VERTICAL`]
/// or [`MEMORY_MODE_PAGE`]. Bulk transfers select horizontal mode so the
/// address counter walks the window left-to-right, page-by-page, then the
/// power-on page mode is restored.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode operand for [`MEMORY_MODE`]
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Vertical addressing mode operand for [`MEMORY_MODE`]
pub const MEMORY_MODE_VERTICAL: u8 = 0x01;

/// Page addressing mode operand for [`MEMORY_MODE`] (power-on default)
pub const MEMORY_MODE_PAGE: u8 = 0x02;

/// Set column address bounds command (0x21)
///
/// Only valid in horizontal/vertical addressing mode.
/// Requires 2 operand bytes: [start column, end column], each 0..=127.
pub const SET_COLUMN_BOUNDS: u8 = 0x21;

/// Set page address bounds command (0x22)
///
/// Only valid in horizontal/vertical addressing mode.
/// Requires 2 operand bytes: [start page, end page], each 0..=7.
pub const SET_PAGE_BOUNDS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line command (0x40)
///
/// OR the start line (0..=63) into the low 6 bits of the opcode itself.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command (0xA0)
///
/// Bit 0 selects the mapping of column address 0: 0 = SEG0, 1 = SEG127.
/// Mirrors the panel horizontally.
pub const SEG_REMAP: u8 = 0xA0;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 operand byte: number of active rows minus one (15..=63).
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM scan ascending command (0xC0)
///
/// Scans from COM0 to COM\[N-1\]; the vertically flipped orientation.
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM scan descending command (0xC8)
///
/// Scans from COM\[N-1\] to COM0; the native orientation for most modules.
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 operand byte: vertical shift by COM (0..=63).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 operand byte. 0x12 (alternative configuration) for panels
/// taller than 32 rows, 0x02 (sequential) otherwise.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing & driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 operand byte: low nibble divide ratio, high nibble oscillator
/// frequency. 0x80 is the datasheet's suggested value.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 operand byte: low nibble phase 1, high nibble phase 2, in DCLKs.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 operand byte: 0x00, 0x20 or 0x30 (~0.65/0.77/0.83 x VCC);
/// some modules ship with the out-of-spec 0x40.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 operand byte: 0x14 enables the internal charge pump (modules
/// running from a single 3.3V supply), 0x10 disables it for external VCC.
/// Must be configured before [`DISPLAY_ON`].
pub const CHARGE_PUMP: u8 = 0x8D;

// Scrolling commands

/// Continuous right horizontal scroll setup command (0x26)
///
/// Requires 6 operand bytes: dummy 0x00, start page, frame interval,
/// end page, dummy 0x00, dummy 0xFF. Takes effect on [`ACTIVATE_SCROLL`].
pub const SCROLL_RIGHT: u8 = 0x26;

/// Continuous left horizontal scroll setup command (0x27)
///
/// Same operand layout as [`SCROLL_RIGHT`].
pub const SCROLL_LEFT: u8 = 0x27;

/// Deactivate scroll command (0x2E)
///
/// Must be issued before changing scroll parameters; reconfiguring an
/// active scroll corrupts RAM.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll command (0x2F)
///
/// Starts the scroll configured by the last setup command.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

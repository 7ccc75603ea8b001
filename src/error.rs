//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-range drawing coordinates are deliberately NOT an error: the
//! rasterizer clips them silently, matching the hardware's behavior of
//! discarding out-of-window writes.
//!
//! ## Example
//!
//! ```
//! use ssd1306_micro::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions: rows must be a multiple of 8
//! let result = Dimensions::new(47, 64);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum COM outputs (rows) driven by the SSD1306 controller
///
/// The controller RAM holds 64 rows (8 pages); panels may wire fewer.
pub const MAX_COM_OUTPUTS: u16 = 64;

/// Maximum segment outputs (columns) driven by the SSD1306 controller
///
/// The controller RAM holds 128 columns; smaller panels occupy a window of
/// it, positioned by the column offset in [`crate::Config`].
pub const MAX_SEGMENT_OUTPUTS: u16 = 128;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Requested font id is not registered
    ///
    /// The active font is left unchanged when this is returned.
    UnknownFont {
        /// The rejected font id
        id: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::UnknownFont { id } => write!(f, "Unknown font id: {id}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
    /// Panel window does not fit in controller RAM at the given column offset
    InvalidColumnOffset {
        /// Column offset requested
        offset: u8,
        /// Number of columns (width) of the panel
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_COM_OUTPUTS}x{MAX_SEGMENT_OUTPUTS}, rows must be multiple of 8)"
            ),
            Self::InvalidColumnOffset { offset, cols } => write!(
                f,
                "Column offset {offset} with {cols} columns exceeds the {MAX_SEGMENT_OUTPUTS}-column RAM"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

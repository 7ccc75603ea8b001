//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COM_OUTPUTS, MAX_SEGMENT_OUTPUTS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows > MAX_COM_OUTPUTS
    /// - rows % 8 != 0 (pages are 8 rows tall, so the buffer must be page-aligned)
    /// - cols > MAX_SEGMENT_OUTPUTS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_COM_OUTPUTS || !rows.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SEGMENT_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.rows as usize * self.cols as usize) / 8
    }

    /// Number of 8-row pages covered by the panel
    pub fn pages(&self) -> u16 {
        self.rows / 8
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config. The defaults are the power-on values
/// for the common 64x48 MicroOLED module.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// First RAM column occupied by the panel
    ///
    /// The controller RAM is 128 columns wide; narrower panels sit in a
    /// window of it. The 64x48 module is centered, offset 32.
    pub column_offset: u8,
    /// Display clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Vertical shift by COM
    pub display_offset: u8,
    /// RAM row mapped to the top of the panel (0..=63)
    pub start_line: u8,
    /// Charge pump setting byte (0x14 internal, 0x10 external VCC)
    pub charge_pump: u8,
    /// Initial contrast level
    pub contrast: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcom_deselect: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Whether column 0 maps to SEG127 (the native orientation for most modules)
    pub segment_remap: bool,
    /// Whether COM scan runs descending (the native orientation for most modules)
    pub com_scan_descending: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1306_micro::{Builder, Dimensions};
///
/// // The 64x48 MicroOLED module, centered in the 128-column RAM
/// let dims = match Dimensions::new(48, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).column_offset(32).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// First RAM column occupied by the panel
    column_offset: u8,
    /// Display clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Vertical shift by COM
    display_offset: u8,
    /// RAM row mapped to the top of the panel
    start_line: u8,
    /// Charge pump setting byte
    charge_pump: u8,
    /// Initial contrast level
    contrast: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcom_deselect: u8,
    /// COM pins byte; resolved from the row count when not set
    com_pins: Option<u8>,
    /// Segment remap orientation
    segment_remap: bool,
    /// COM scan direction
    com_scan_descending: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Default: panel starts at RAM column 0 (full-width panels)
            column_offset: 0,
            // Datasheet-suggested clock ratio
            clock_divide: 0x80,
            display_offset: 0x00,
            start_line: 0x00,
            // Internal charge pump enabled (single-supply modules)
            charge_pump: 0x14,
            contrast: 0x8F,
            precharge: 0xF1,
            vcom_deselect: 0x40,
            com_pins: None,
            segment_remap: true,
            com_scan_descending: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the first RAM column occupied by the panel
    ///
    /// Panels narrower than 128 columns occupy a window of the controller
    /// RAM; the module datasheet gives the offset (32 for the 64x48 module).
    pub fn column_offset(mut self, offset: u8) -> Self {
        self.column_offset = offset;
        self
    }

    /// Set the display clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the vertical shift by COM
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the RAM row mapped to the top of the panel (0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value & 0x3F;
        self
    }

    /// Set the charge pump byte (0x14 internal pump, 0x10 external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set the initial contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    ///
    /// When not set, the value is resolved from the panel height: 0x12 for
    /// panels taller than 32 rows, 0x02 otherwise.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Set whether column 0 maps to SEG127
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.segment_remap = value;
        self
    }

    /// Set whether COM scan runs descending
    pub fn com_scan_descending(mut self, value: bool) -> Self {
        self.com_scan_descending = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidColumnOffset` if the panel window would run
    /// past the last RAM column.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        if self.column_offset as u16 + dimensions.cols > MAX_SEGMENT_OUTPUTS {
            return Err(BuilderError::InvalidColumnOffset {
                offset: self.column_offset,
                cols: dimensions.cols,
            });
        }
        let com_pins = self
            .com_pins
            .unwrap_or(if dimensions.rows > 32 { 0x12 } else { 0x02 });
        Ok(Config {
            dimensions,
            column_offset: self.column_offset,
            clock_divide: self.clock_divide,
            display_offset: self.display_offset,
            start_line: self.start_line,
            charge_pump: self.charge_pump,
            contrast: self.contrast,
            precharge: self.precharge,
            vcom_deselect: self.vcom_deselect,
            com_pins,
            segment_remap: self.segment_remap,
            com_scan_descending: self.com_scan_descending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_rejects_unaligned_rows() {
        assert!(matches!(
            Dimensions::new(47, 64),
            Err(BuilderError::InvalidDimensions { rows: 47, cols: 64 })
        ));
    }

    #[test]
    fn test_dimensions_rejects_zero_and_oversize() {
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(48, 0).is_err());
        assert!(Dimensions::new(72, 64).is_err());
        assert!(Dimensions::new(48, 200).is_err());
    }

    #[test]
    fn test_buffer_size_64x48() {
        let dims = Dimensions::new(48, 64).unwrap();
        assert_eq!(dims.buffer_size(), 384);
        assert_eq!(dims.pages(), 6);
    }

    #[test]
    fn test_build_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_com_pins_resolved_from_height() {
        let tall = Builder::new()
            .dimensions(Dimensions::new(48, 64).unwrap())
            .build()
            .unwrap();
        assert_eq!(tall.com_pins, 0x12);

        let short = Builder::new()
            .dimensions(Dimensions::new(32, 128).unwrap())
            .build()
            .unwrap();
        assert_eq!(short.com_pins, 0x02);
    }

    #[test]
    fn test_com_pins_override_wins() {
        let config = Builder::new()
            .dimensions(Dimensions::new(48, 64).unwrap())
            .com_pins(0x22)
            .build()
            .unwrap();
        assert_eq!(config.com_pins, 0x22);
    }

    #[test]
    fn test_column_offset_out_of_ram_rejected() {
        let result = Builder::new()
            .dimensions(Dimensions::new(48, 64).unwrap())
            .column_offset(100)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidColumnOffset {
                offset: 100,
                cols: 64
            })
        ));
    }

    #[test]
    fn test_micro_oled_window_fits() {
        let config = Builder::new()
            .dimensions(Dimensions::new(48, 64).unwrap())
            .column_offset(32)
            .build()
            .unwrap();
        assert_eq!(config.column_offset, 32);
        assert_eq!(config.contrast, 0x8F);
        assert!(config.segment_remap);
        assert!(config.com_scan_descending);
    }
}

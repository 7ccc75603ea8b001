//! Core display operations
//!
//! [`Display`] drives the controller directly: the power-on init sequence,
//! panel state commands (contrast, invert, flips, scrolling) and the bulk
//! transfer that pushes a packed buffer into controller RAM. It knows
//! nothing about rasterization; see [`GraphicDisplay`](crate::graphics::GraphicDisplay)
//! for the buffered drawing layer.
//!
//! The controller is write-only over SPI. Every transfer re-establishes an
//! addressing window (horizontal mode, column and page bounds), streams the
//! bytes, and restores the power-on page addressing mode.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, COM_SCAN_DEC, COM_SCAN_INC, DEACTIVATE_SCROLL, DISPLAY_OFF,
    DISPLAY_ON, ENTIRE_DISPLAY_RESUME, INVERT_DISPLAY, MEMORY_MODE, MEMORY_MODE_HORIZONTAL,
    MEMORY_MODE_PAGE, NORMAL_DISPLAY, SCROLL_LEFT, SCROLL_RIGHT, SEG_REMAP, SET_CLOCK_DIVIDE,
    SET_COLUMN_BOUNDS, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX,
    SET_PAGE_BOUNDS, SET_PRECHARGE, SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::Config;
use crate::error::{Error, MAX_COM_OUTPUTS, MAX_SEGMENT_OUTPUTS};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the SSD1306
///
/// This struct provides low-level operations for the SSD1306 controller.
/// For drawing and text, wrap it in a
/// [`GraphicDisplay`](crate::graphics::GraphicDisplay).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Perform hardware reset and run the power-on configuration
    ///
    /// Issues the full init sequence for the configured panel, turns the
    /// display on, and clears the controller RAM (its power-on content is
    /// random noise, and it cannot be read back to find out).
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);

        let rows = self.config.dimensions.rows;
        self.send_command(&[DISPLAY_OFF])?;
        self.send_command(&[SET_CLOCK_DIVIDE, self.config.clock_divide])?;
        self.send_command(&[SET_MULTIPLEX, (rows - 1) as u8])?;
        self.send_command(&[SET_DISPLAY_OFFSET, self.config.display_offset])?;
        self.send_command(&[SET_START_LINE | self.config.start_line])?;
        self.send_command(&[CHARGE_PUMP, self.config.charge_pump])?;
        self.send_command(&[NORMAL_DISPLAY])?;
        self.send_command(&[ENTIRE_DISPLAY_RESUME])?;
        self.send_command(&[SEG_REMAP | u8::from(self.config.segment_remap)])?;
        self.send_command(&[if self.config.com_scan_descending {
            COM_SCAN_DEC
        } else {
            COM_SCAN_INC
        }])?;
        self.send_command(&[SET_COM_PINS, self.config.com_pins])?;
        self.send_command(&[SET_CONTRAST, self.config.contrast])?;
        self.send_command(&[SET_PRECHARGE, self.config.precharge])?;
        self.send_command(&[SET_VCOM_DESELECT, self.config.vcom_deselect])?;
        self.send_command(&[DISPLAY_ON])?;

        self.clear_ram(0x00)?;

        debug!(
            "initialized {}x{} panel at column offset {}",
            self.config.dimensions.cols, rows, self.config.column_offset
        );
        Ok(())
    }

    /// Push a packed framebuffer into the panel's RAM window
    ///
    /// Selects horizontal addressing over the panel window (column offset
    /// applied), streams the buffer, and restores page addressing mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer holds fewer than
    /// `dimensions.buffer_size()` bytes.
    pub fn update(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let expected = dims.buffer_size();
        if buffer.len() < expected {
            return Err(Error::BufferTooSmall {
                required: expected,
                provided: buffer.len(),
            });
        }

        let col_start = self.config.column_offset;
        let col_end = col_start + (dims.cols - 1) as u8;
        let page_end = (dims.pages() - 1) as u8;
        self.send_command(&[
            MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            SET_COLUMN_BOUNDS,
            col_start,
            col_end,
            SET_PAGE_BOUNDS,
            0,
            page_end,
        ])?;
        self.send_data(&buffer[..expected])?;
        self.send_command(&[MEMORY_MODE, MEMORY_MODE_PAGE])?;

        trace!("streamed {} bytes to panel window", expected);
        Ok(())
    }

    /// Fill the entire controller RAM with one byte value
    ///
    /// The window spans the controller's full 128x64 memory, which may be
    /// wider than the panel; this wipes the off-panel columns too. Used
    /// after power-on and for whole-memory clears.
    pub fn clear_ram(&mut self, fill: u8) -> DisplayResult<I> {
        self.send_command(&[
            MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            SET_COLUMN_BOUNDS,
            0,
            (MAX_SEGMENT_OUTPUTS - 1) as u8,
            SET_PAGE_BOUNDS,
            0,
            (MAX_COM_OUTPUTS / 8 - 1) as u8,
        ])?;
        let row = [fill; MAX_SEGMENT_OUTPUTS as usize];
        for _ in 0..MAX_COM_OUTPUTS / 8 {
            self.send_data(&row)?;
        }
        self.send_command(&[MEMORY_MODE, MEMORY_MODE_PAGE])?;

        debug!("filled controller RAM with {:#04x}", fill);
        Ok(())
    }

    /// Turn the panel on or off (sleep mode)
    pub fn display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(&[if on { DISPLAY_ON } else { DISPLAY_OFF }])
    }

    /// Invert the panel (RAM 0 bits light up) or restore normal polarity
    pub fn set_invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_command(&[if invert { INVERT_DISPLAY } else { NORMAL_DISPLAY }])
    }

    /// Set the contrast level (0..=255)
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_command(&[SET_CONTRAST, contrast])
    }

    /// Mirror the panel vertically by reversing the COM scan direction
    ///
    /// Takes effect immediately; RAM content is untouched.
    pub fn flip_vertical(&mut self, flip: bool) -> DisplayResult<I> {
        let scan = if flip == self.config.com_scan_descending {
            COM_SCAN_INC
        } else {
            COM_SCAN_DEC
        };
        self.send_command(&[scan])
    }

    /// Mirror the panel horizontally by toggling the segment remap bit
    ///
    /// Segment remap only affects how subsequent RAM writes map to the
    /// glass, so a refresh is needed before the flip becomes visible.
    pub fn flip_horizontal(&mut self, flip: bool) -> DisplayResult<I> {
        let remap = self.config.segment_remap != flip;
        self.send_command(&[SEG_REMAP | u8::from(remap)])
    }

    /// Start a continuous right scroll over the given page range
    ///
    /// `stop` must not be less than `start`; an inverted range is silently
    /// rejected without issuing any command.
    pub fn scroll_right(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.scroll(SCROLL_RIGHT, start, stop)
    }

    /// Start a continuous left scroll over the given page range
    ///
    /// Same range rule as [`Display::scroll_right`].
    pub fn scroll_left(&mut self, start: u8, stop: u8) -> DisplayResult<I> {
        self.scroll(SCROLL_LEFT, start, stop)
    }

    /// Stop any active scroll
    pub fn scroll_stop(&mut self) -> DisplayResult<I> {
        self.send_command(&[DEACTIVATE_SCROLL])
    }

    fn scroll(&mut self, opcode: u8, start: u8, stop: u8) -> DisplayResult<I> {
        if stop < start {
            return Ok(());
        }
        // Scrolling must be off while parameters change or RAM corrupts.
        self.scroll_stop()?;
        self.send_command(&[opcode, 0x00, start, 0x07, stop, 0x00, 0xFF, ACTIVATE_SCROLL])
    }

    /// Send a command frame to the display controller
    fn send_command(&mut self, cmd: &[u8]) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

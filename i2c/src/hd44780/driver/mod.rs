mod i2c;

use crate::{LcdError, LcdResult};
pub use i2c::*;
use std::fmt::Debug;

/// Command-level interface to an HD44780 controller.
///
/// The default methods assemble the controller's command bytes; a driver
/// implementation only supplies the transfer primitives and the power-on
/// reset sequence. Reading from the controller is not part of the interface:
/// the supported wiring ties RW low, so the busy flag is replaced by fixed
/// settle delays in the implementation.
pub trait HD44780Driver: Debug {
    /// Drives the controller from an unknown power-on state into a known
    /// one: bus width committed, display on, cursor off, screen cleared,
    /// left-to-right entry. Must be called once before any other operation.
    fn init(&mut self, multiline: bool, alt_font: bool) -> LcdResult<()>;

    /// Clears the display and resets the address counter.
    fn clear_display(&mut self) -> LcdResult<()> {
        self.send_command(0b0000_0001)
    }

    /// Returns the cursor to the home position and undoes display shifts.
    fn return_home(&mut self) -> LcdResult<()> {
        self.send_command(0b0000_0010)
    }

    /// Sets the cursor move direction and whether writes shift the display.
    fn set_entry_mode(&mut self, cursor_direction: CursorDirection, shift: bool) -> LcdResult<()> {
        let mut command = 0b0000_0100;
        if cursor_direction == CursorDirection::Right {
            command |= 0b0000_0010;
        }
        if shift {
            command |= 0b0000_0001;
        }
        self.send_command(command)
    }

    /// Switches the display, the cursor, and cursor blinking on or off.
    fn set_display_control(
        &mut self,
        display_on: bool,
        cursor_on: bool,
        blink_on: bool,
    ) -> LcdResult<()> {
        let mut command = 0b0000_1000;
        if display_on {
            command |= 0b0000_0100;
        }
        if cursor_on {
            command |= 0b0000_0010;
        }
        if blink_on {
            command |= 0b0000_0001;
        }
        self.send_command(command)
    }

    /// Moves the cursor, or with `display_shift` the whole visible window,
    /// one cell in the given direction. Shifting the window changes no
    /// DDRAM address or contents.
    fn cursor_shift(&mut self, display_shift: bool, direction: CursorDirection) -> LcdResult<()> {
        let mut command = 0b0001_0000;
        if display_shift {
            command |= 0b0000_1000;
        }
        if direction == CursorDirection::Right {
            command |= 0b0000_0100;
        }
        self.send_command(command)
    }

    /// Sets bus width, line count, and font.
    fn function_set(&mut self, data_8bit: bool, two_lines: bool, alt_font: bool) -> LcdResult<()> {
        let mut command = 0b0010_0000;
        if data_8bit {
            command |= 0b0001_0000;
        }
        if two_lines {
            command |= 0b0000_1000;
        }
        if alt_font {
            command |= 0b0000_0100;
        }
        self.send_command(command)
    }

    /// Points the address counter into CGRAM (custom glyph memory).
    fn set_cgram_address(&mut self, address: u8) -> LcdResult<()> {
        if address > 0b0011_1111 {
            return Err(LcdError::InvalidArgument);
        }
        self.send_command(0b0100_0000 | address)
    }

    /// Points the address counter into DDRAM (visible cell memory).
    fn set_ddram_address(&mut self, address: u8) -> LcdResult<()> {
        if address > 0b0111_1111 {
            return Err(LcdError::InvalidArgument);
        }
        self.send_command(0b1000_0000 | address)
    }

    /// Sets the backlight. Drivers without backlight control ignore this.
    fn set_backlight(&mut self, on: bool) -> LcdResult<()> {
        let _ = on;
        Ok(())
    }

    /// Transfers a command byte (RS low).
    fn send_command(&mut self, command: u8) -> LcdResult<()>;

    /// Transfers a data byte (RS high): a character, or a glyph row when the
    /// address counter points into CGRAM.
    fn send_data(&mut self, data: u8) -> LcdResult<()>;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CursorDirection {
    Left,
    Right,
}

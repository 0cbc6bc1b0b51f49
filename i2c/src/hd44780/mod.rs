//! HD44780 character LCD module, as found on 4x20 LCD2004 panels.

pub mod driver;

#[cfg(test)]
mod tests;

use crate::{LcdError, LcdResult};
use driver::{CursorDirection, HD44780Driver};
use log::warn;

/// Visible character cells per row.
pub const COLUMNS: u8 = 20;
/// Rows on the panel.
pub const ROWS: u8 = 4;

/// DDRAM base address of a 1-based row on a 4x20 panel.
///
/// Rows interleave in controller memory: rows 3 and 4 are the overflow of
/// rows 1 and 2. Rows outside 1..=4 fall back to the first row rather than
/// failing; long-standing callers rely on that.
fn row_offset(row: u8) -> u8 {
    match row {
        2 => 0x40,
        3 => 0x14,
        4 => 0x54,
        _ => 0x00,
    }
}

/// Text-level operations for 4x20 panels, built on the [HD44780Driver]
/// command set. Implemented for every driver.
pub trait TextDisplay {
    /// Moves the cursor to a 1-based row and 0-based column without writing
    /// anything.
    fn set_cursor(&mut self, row: u8, col: u8) -> LcdResult<()>;

    /// Writes a string at the current cursor position. Non-ASCII characters
    /// are replaced by `?`.
    fn print(&mut self, s: &str) -> LcdResult<()>;

    /// Moves the cursor, then writes a string there. A failed write aborts
    /// with the rest of the string unsent.
    fn print_at(&mut self, s: &str, row: u8, col: u8) -> LcdResult<()>;

    /// Clears the screen and returns the cursor home.
    fn clear(&mut self) -> LcdResult<()>;

    /// Shifts the visible window one cell left. DDRAM contents and addresses
    /// stay put, so scrolls in opposite directions cancel exactly.
    fn scroll_left(&mut self) -> LcdResult<()>;

    /// Shifts the visible window one cell right.
    fn scroll_right(&mut self) -> LcdResult<()>;

    /// Loads a 5x8 glyph bitmap (low 5 bits per row) into one of the 8 CGRAM
    /// slots. The slot index wraps modulo 8. The glyph is shown by printing
    /// its slot index as a character, `\u{0}`..`\u{7}`.
    fn load_glyph(&mut self, slot: u8, glyph: &[u8; 8]) -> LcdResult<()>;

    /// Loads glyphs into consecutive CGRAM slots starting at slot 0. More
    /// than 8 bitmaps wrap around and overwrite the earliest slots.
    fn load_glyphs(&mut self, glyphs: &[[u8; 8]]) -> LcdResult<()>;
}

impl<T: ?Sized + HD44780Driver> TextDisplay for T {
    fn set_cursor(&mut self, row: u8, col: u8) -> LcdResult<()> {
        let address = row_offset(row)
            .checked_add(col)
            .ok_or(LcdError::InvalidArgument)?;
        self.set_ddram_address(address)
    }

    fn print(&mut self, s: &str) -> LcdResult<()> {
        for c in s.chars() {
            if c.is_ascii() {
                self.send_data(c as u8)?;
            } else {
                warn!("Non-ASCII character: {}", c);
                self.send_data(b'?')?;
            }
        }
        Ok(())
    }

    fn print_at(&mut self, s: &str, row: u8, col: u8) -> LcdResult<()> {
        self.set_cursor(row, col)?;
        self.print(s)
    }

    fn clear(&mut self) -> LcdResult<()> {
        self.clear_display()?;
        self.return_home()
    }

    fn scroll_left(&mut self) -> LcdResult<()> {
        self.cursor_shift(true, CursorDirection::Left)
    }

    fn scroll_right(&mut self) -> LcdResult<()> {
        self.cursor_shift(true, CursorDirection::Right)
    }

    fn load_glyph(&mut self, slot: u8, glyph: &[u8; 8]) -> LcdResult<()> {
        let slot = slot & 0x7;
        self.set_cgram_address(slot * 8)?;
        for row in glyph {
            self.send_data(*row)?;
        }
        Ok(())
    }

    fn load_glyphs(&mut self, glyphs: &[[u8; 8]]) -> LcdResult<()> {
        self.set_cgram_address(0)?;
        for glyph in glyphs {
            for row in glyph {
                self.send_data(*row)?;
            }
        }
        Ok(())
    }
}

use crate::hd44780::driver::{CursorDirection, HD44780Driver};
use crate::{I2cTransport, LcdError, LcdResult};
use log::trace;
use std::thread::sleep;
use std::time::Duration;

// PCF8574 port assignment on the backpack:
// P0 RS, P1 RW (kept low), P2 E, P3 backlight, P4-P7 DB4-DB7.
const RS: u8 = 0b0000_0001;
const ENABLE: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;

/// HD44780 driver for I2C backpack boards built around a PCF8574 expander.
///
/// The expander pins stand in for the controller's parallel bus: every
/// nibble is presented by writing the expander's output register and latched
/// by pulsing E through that same register. Exactly one driver should exist
/// per physical display — a second handle on the same address interleaves
/// nibble pairs and corrupts the controller's address state.
#[derive(Debug)]
pub struct I2cHD44780Driver<T: I2cTransport> {
    bus: T,
    backlight: bool,
}

impl<T: I2cTransport> I2cHD44780Driver<T> {
    /// Wraps a transport. The display is unusable until
    /// [init](HD44780Driver::init) has run.
    pub fn new(bus: T) -> Self {
        // Backpacks power up with the backlight on; start in agreement.
        Self {
            bus,
            backlight: true,
        }
    }

    /// Gives access to the underlying transport.
    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }

    /// Consumes the driver and releases the transport.
    pub fn into_bus(self) -> T {
        self.bus
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight { BACKLIGHT } else { 0 }
    }

    /// Presents one nibble transaction (data bits in the high nibble, RS in
    /// bit 0) and pulses E so the controller samples it. The falling edge
    /// latches; the holds are generous against the expander's I2C latency.
    fn strobe(&mut self, value: u8) -> LcdResult<()> {
        let backlight = self.backlight_bit();
        self.bus.write_byte(value | ENABLE | backlight)?;
        sleep(Duration::from_millis(5));
        self.bus.write_byte((value & !ENABLE) | backlight)?;
        sleep(Duration::from_millis(1));
        Ok(())
    }

    /// Transfers a full byte as two nibble transactions, high nibble first.
    fn send(&mut self, byte: u8, rs: bool) -> LcdResult<()> {
        trace!("Sending {:08b}, RS: {}", byte, rs);
        let select = if rs { RS } else { 0 };
        self.strobe((byte & 0xF0) | select)?;
        self.strobe(((byte << 4) & 0xF0) | select)
    }

    fn init_sequence(&mut self, multiline: bool, alt_font: bool) -> LcdResult<()> {
        // Synchronize: the controller may be in 8-bit mode or halfway
        // through a 4-bit transfer, so force 8-bit mode three times before
        // committing to 4-bit.
        for _ in 0..3 {
            self.send(0b0011_0011, false)?;
            sleep(Duration::from_millis(5));
        }
        self.send(0b0011_0010, false)?;
        sleep(Duration::from_millis(5));

        self.function_set(false, multiline, alt_font)?;
        sleep(Duration::from_millis(20));
        self.set_display_control(true, false, false)?;
        self.clear_display()?;
        sleep(Duration::from_millis(20));
        self.set_entry_mode(CursorDirection::Right, false)
    }
}

impl<T: I2cTransport> HD44780Driver for I2cHD44780Driver<T> {
    fn init(&mut self, multiline: bool, alt_font: bool) -> LcdResult<()> {
        self.init_sequence(multiline, alt_font)
            .map_err(|err| LcdError::Init(Box::new(err)))
    }

    fn set_backlight(&mut self, on: bool) -> LcdResult<()> {
        self.backlight = on;
        // The expander holds its last byte; push the new state immediately.
        self.bus.write_byte(self.backlight_bit())
    }

    fn send_command(&mut self, command: u8) -> LcdResult<()> {
        self.send(command, false)
    }

    fn send_data(&mut self, data: u8) -> LcdResult<()> {
        self.send(data, true)
    }
}

//! [I2cTransport] implementation backed by the rppal I2C bus.

use crate::{I2cTransport, LcdError, LcdResult};
use rppal::i2c::I2c;
use std::fmt::{Debug, Formatter};

/// Transport over a Raspberry Pi hardware I2C bus (`/dev/i2c-N`).
pub struct RppalTransport {
    i2c: I2c,
    address: u16,
}

impl RppalTransport {
    /// Opens the given bus and selects the backpack's 7-bit device address.
    ///
    /// The reference hardware answers at address `0x27` on bus 1.
    pub fn open(bus: u8, address: u16) -> LcdResult<Self> {
        let mut i2c = I2c::with_bus(bus)?;
        i2c.set_slave_address(address)?;
        Ok(Self { i2c, address })
    }
}

impl Debug for RppalTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RppalTransport(i2c-{}, {:#04x})", self.i2c.bus(), self.address)
    }
}

impl I2cTransport for RppalTransport {
    fn write_byte(&mut self, value: u8) -> LcdResult<()> {
        self.i2c.write(&[value])?;
        Ok(())
    }
}

impl From<rppal::i2c::Error> for LcdError {
    fn from(err: rppal::i2c::Error) -> Self {
        match err {
            rppal::i2c::Error::Io(io) => LcdError::Transport(io.kind()),
            other => LcdError::Other(other.to_string()),
        }
    }
}

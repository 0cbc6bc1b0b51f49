pub mod hd44780;
pub mod rppal;

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum LcdError {
    #[error("invalid argument")]
    InvalidArgument,
    #[error("transport error: {0}")]
    Transport(std::io::ErrorKind),
    #[error("display initialization failed: {0}")]
    Init(Box<LcdError>),
    #[error("error: {0}")]
    Other(String),
}

impl From<std::io::Error> for LcdError {
    fn from(err: std::io::Error) -> Self {
        LcdError::Transport(err.kind())
    }
}

pub type LcdResult<T> = Result<T, LcdError>;

/// A write-only byte sink the display is reached through — in practice the
/// PCF8574 expander on the backpack, addressed over I2C.
///
/// The expander has a single output register, so one written byte sets all
/// eight port pins at once. No read support: the backpack keeps RW wired low.
pub trait I2cTransport: Debug {
    /// Writes one byte to the expander's output register.
    fn write_byte(&mut self, value: u8) -> LcdResult<()>;
}

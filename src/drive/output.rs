//! Coil output abstraction.
//!
//! The driver owns only bits 0-3 of whatever port the coil lines live on.
//! Implementations backed by a shared I/O register must preserve the other
//! bits on every write; [`merge`] does the read-modify-write arithmetic.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::DriveError;
use crate::sequence::COIL_MASK;

/// Merge a coil pattern into a shared register value.
///
/// Bits 4-7 of `register` are preserved; bits 0-3 are replaced by the
/// pattern's low nibble.
#[inline]
pub const fn merge(register: u8, pattern: u8) -> u8 {
    (register & !COIL_MASK) | (pattern & COIL_MASK)
}

/// Output interface for the four coil-driver lines.
///
/// `pattern` bit 0 maps to IN1, bit 1 to IN2, bit 2 to IN3, bit 3 to IN4.
/// Bits 4-7 are never set by the driver.
pub trait CoilOutput {
    /// Error produced by a failed output operation.
    type Error;

    /// Drive the coil lines to match the low 4 bits of `pattern`.
    fn energize(&mut self, pattern: u8) -> Result<(), Self::Error>;

    /// De-energize all coil lines.
    fn release(&mut self) -> Result<(), Self::Error> {
        self.energize(0)
    }
}

/// Coil output over four discrete `embedded-hal` output pins.
///
/// For targets where the ULN2003 inputs are wired to individual GPIOs rather
/// than four adjacent bits of one port.
pub struct CoilPins<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
}

impl<IN1, IN2, IN3, IN4> CoilPins<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Create a coil output from the four driver input pins.
    pub fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Release the pins.
    pub fn free(self) -> (IN1, IN2, IN3, IN4) {
        (self.in1, self.in2, self.in3, self.in4)
    }
}

impl<IN1, IN2, IN3, IN4> CoilOutput for CoilPins<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    type Error = DriveError;

    fn energize(&mut self, pattern: u8) -> Result<(), Self::Error> {
        self.in1
            .set_state(PinState::from(pattern & 0x01 != 0))
            .map_err(|_| DriveError::PinError)?;
        self.in2
            .set_state(PinState::from(pattern & 0x02 != 0))
            .map_err(|_| DriveError::PinError)?;
        self.in3
            .set_state(PinState::from(pattern & 0x04 != 0))
            .map_err(|_| DriveError::PinError)?;
        self.in4
            .set_state(PinState::from(pattern & 0x08 != 0))
            .map_err(|_| DriveError::PinError)?;
        Ok(())
    }
}

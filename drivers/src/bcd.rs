//! Binary coded decimal (BCD) helpers.
//!
//! A BCD digit is a decimal digit (0 to 9) stored in four bits, a
//! *nibble*. The LCD of the lab kit receives its digits one nibble at
//! a time on four GPIO pins.

use embedded_hal::digital::{OutputPin, PinState};
use heapless::Vec;

/// The number of data pins of a BCD bus
pub const BCD_PINS: usize = 4;

/// The largest digit count accepted by [`to_bcd_digits`].
///
/// Counts from 10 upwards are refused, like the exercise asks.
pub const MAX_BCD_DIGITS: usize = 9;

/// The errors of the BCD conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BcdError {
    /// The digit count is 0 or larger than [`MAX_BCD_DIGITS`]
    InvalidDigitCount(u8),
}

/// Splits `value` into its `digits` lowest decimal digits.
///
/// The units are stored first: `to_bcd_digits(123, 3)` returns
/// `[3, 2, 1]`. Digits above `digits` are dropped and missing digits
/// are returned as zeros.
pub fn to_bcd_digits(mut value: u32, digits: u8) -> Result<Vec<u8, MAX_BCD_DIGITS>, BcdError> {
    if digits == 0 || usize::from(digits) > MAX_BCD_DIGITS {
        return Err(BcdError::InvalidDigitCount(digits));
    }

    // `% 10` gives the last decimal digit, `/ 10` drops it so that the
    // next step finds the following one
    let bcd = (0..digits)
        .map(|_| {
            let digit = (value % 10) as u8;
            value /= 10;
            digit
        })
        .collect();
    Ok(bcd)
}

/// Returns `true` if the nibble is a decimal digit (0 to 9).
///
/// The values 10 to 15 fit in four bits but are not BCD digits.
pub fn is_decimal_digit(nibble: u8) -> bool {
    nibble <= 9
}

/// Four output pins that carry one BCD nibble.
///
/// Pin `i` carries bit `i` of the nibble (`b0` is the first pin).
pub struct BcdPins<P: OutputPin> {
    pins: [P; BCD_PINS],
}

impl<P: OutputPin> BcdPins<P> {
    pub fn new(pins: [P; BCD_PINS]) -> Self {
        BcdPins { pins }
    }

    /// Writes the four low bits of `nibble` on the pins.
    ///
    /// The high four bits are ignored. Values above 9 are written
    /// anyway, the caller decides if that is a problem.
    pub fn write(&mut self, nibble: u8) -> Result<(), P::Error> {
        let nibble = nibble & 0x0f;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from((nibble >> bit) & 1 == 1))?;
        }
        Ok(())
    }

    /// Gives back the pins
    pub fn release(self) -> [P; BCD_PINS] {
        self.pins
    }
}

//! ITS-E0803 three digit LCD driver.
//!
//! The LCD module has one CD4543 BCD to 7 segment latch per digit.
//! All the latches share the four BCD data lines, every latch has its
//! own select (latch enable) line.
//!
//! To display a digit, the driver:
//! 1. writes the digit's nibble on the data lines
//! 2. pulses the digit's select line (LOW -> HIGH -> LOW), the latch
//!    stores the nibble on the falling edge and keeps displaying it
//!
//! The CD4543 blanks its digit for the codes 10 to 15, which is how
//! the display is turned off.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::bcd::{BcdError, BcdPins, to_bcd_digits};

/// The number of digits of the LCD
pub const LCD_DIGITS: usize = 3;

/// The largest value the LCD can display
pub const LCD_MAX_VALUE: u32 = 999;

/// The nibble that blanks a digit
const BLANK: u8 = 0x0f;

/// The length of the latch pulse. The CD4543 needs more than 50 ns.
const LATCH_PULSE_US: u32 = 1;

/// The errors of the LCD driver.
///
/// `E` is the error type of the pins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// The digit count is not between 1 and [`LCD_DIGITS`]
    InvalidDigitCount(u8),

    /// The value does not fit in the requested digits
    OutOfRange(u32),

    /// A pin could not be written
    Pin(E),
}

impl<E> From<BcdError> for LcdError<E> {
    fn from(error: BcdError) -> Self {
        match error {
            BcdError::InvalidDigitCount(digits) => LcdError::InvalidDigitCount(digits),
        }
    }
}

/// ITS-E0803 driver
pub struct LcdItsE0803<P: OutputPin, D: DelayNs> {
    /// The shared BCD data lines
    data: BcdPins<P>,

    /// The select lines, the first one selects the most
    /// significant digit
    select: [P; LCD_DIGITS],

    /// Used to time the latch pulse
    delay: D,
}

impl<P: OutputPin, D: DelayNs> LcdItsE0803<P, D> {
    /// Takes the data and select lines and sets the select lines LOW.
    pub fn new(data: BcdPins<P>, select: [P; LCD_DIGITS], delay: D) -> Result<Self, P::Error> {
        let mut lcd = LcdItsE0803 {
            data,
            select,
            delay,
        };
        for pin in lcd.select.iter_mut() {
            pin.set_low()?;
        }
        Ok(lcd)
    }

    /// Displays `value` using all the digits of the LCD.
    pub fn write(&mut self, value: u32) -> Result<(), LcdError<P::Error>> {
        self.show(value, LCD_DIGITS as u8)
    }

    /// Displays `value` using `digits` digits.
    ///
    /// The most significant digit is latched by the first select line.
    /// The digits that are not used keep their previous value.
    pub fn show(&mut self, value: u32, digits: u8) -> Result<(), LcdError<P::Error>> {
        if digits == 0 || usize::from(digits) > LCD_DIGITS {
            return Err(LcdError::InvalidDigitCount(digits));
        }
        if value >= 10u32.pow(u32::from(digits)) {
            return Err(LcdError::OutOfRange(value));
        }

        // `bcd[0]` holds the units
        let bcd = to_bcd_digits(value, digits)?;
        for (position, digit) in bcd.iter().rev().enumerate() {
            self.latch(position, *digit).map_err(LcdError::Pin)?;
        }
        Ok(())
    }

    /// Blanks all the digits.
    pub fn off(&mut self) -> Result<(), P::Error> {
        for position in 0..LCD_DIGITS {
            self.latch(position, BLANK)?;
        }
        Ok(())
    }

    /// Gives back the pins and the delay
    pub fn release(self) -> (BcdPins<P>, [P; LCD_DIGITS], D) {
        (self.data, self.select, self.delay)
    }

    /// Puts `nibble` on the data lines and pulses the select line
    /// of the digit at `position`.
    fn latch(&mut self, position: usize, nibble: u8) -> Result<(), P::Error> {
        self.data.write(nibble)?;
        let select = &mut self.select[position];
        select.set_high()?;
        self.delay.delay_us(LATCH_PULSE_US);
        select.set_low()
    }
}

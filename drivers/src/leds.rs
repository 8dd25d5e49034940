//! The three LEDs of the lab board.
//!
//! The LEDs on the lab board are active LOW: they light up when the
//! pin is LOW and turn off when the pin is HIGH. The [`LedBank`] hides
//! this behind [`Polarity`] so that the rest of the code only talks
//! about *on* and *off*.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

/// The number of LEDs in a bank
pub const LED_COUNT: usize = 3;

/// The step used when waiting for a toggle period
const TOGGLE_STEP_MS: u32 = 100;

/// One of the three LEDs.
///
/// This is represented as a `u8` so that it can be cast
/// to an index using the `as` keyword.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Led1 = 0,
    Led2 = 1,
    Led3 = 2,
}

impl Led {
    /// All the LEDs, in order
    pub const ALL: [Led; LED_COUNT] = [Led::Led1, Led::Led2, Led::Led3];

    fn index(self) -> usize {
        self as usize
    }
}

/// The level that lights up an LED.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// The LED is on when the pin is HIGH
    ActiveHigh,
    /// The LED is on when the pin is LOW (the lab board)
    ActiveLow,
}

impl Polarity {
    fn pin_state(self, on: bool) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::from(on),
            Polarity::ActiveLow => PinState::from(!on),
        }
    }
}

/// Three LEDs driven through output pins.
pub struct LedBank<P: OutputPin> {
    /// The pins, `Led1` first
    pins: [P; LED_COUNT],

    /// The level that lights up the LEDs
    polarity: Polarity,

    /// The last state written to every LED
    lit: [bool; LED_COUNT],
}

impl<P: OutputPin> LedBank<P> {
    /// Takes the three pins and turns all the LEDs off.
    pub fn new(pins: [P; LED_COUNT], polarity: Polarity) -> Result<Self, P::Error> {
        let mut bank = LedBank {
            pins,
            polarity,
            lit: [false; LED_COUNT],
        };
        bank.all_off()?;
        Ok(bank)
    }

    /// Lights up an LED
    pub fn turn_on(&mut self, led: Led) -> Result<(), P::Error> {
        self.set_state(led, true)
    }

    /// Turns off an LED
    pub fn turn_off(&mut self, led: Led) -> Result<(), P::Error> {
        self.set_state(led, false)
    }

    /// Switches an LED to the opposite state
    pub fn toggle(&mut self, led: Led) -> Result<(), P::Error> {
        self.set_state(led, !self.is_on(led))
    }

    /// Writes the state of an LED.
    ///
    /// Writing the same state twice leaves the LED unchanged.
    pub fn set_state(&mut self, led: Led, on: bool) -> Result<(), P::Error> {
        self.pins[led.index()].set_state(self.polarity.pin_state(on))?;
        self.lit[led.index()] = on;
        Ok(())
    }

    /// Turns off all the LEDs
    pub fn all_off(&mut self) -> Result<(), P::Error> {
        for led in Led::ALL {
            self.turn_off(led)?;
        }
        Ok(())
    }

    /// Returns `true` if the LED was last turned on
    pub fn is_on(&self, led: Led) -> bool {
        self.lit[led.index()]
    }

    /// Gives back the pins
    pub fn release(self) -> [P; LED_COUNT] {
        self.pins
    }
}

/// What an [`LedCommand`] does with its LED.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    On,
    Off,
    Toggle,
}

/// A command for one LED of the bank.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedCommand {
    pub mode: LedMode,

    /// The LED that the command controls
    pub led: Led,

    /// How many times the LED is toggled (only for [`LedMode::Toggle`])
    pub cycles: u8,

    /// The time between two toggles, in milliseconds
    /// (only for [`LedMode::Toggle`])
    pub period_ms: u16,
}

impl LedCommand {
    /// Runs the command on the bank.
    ///
    /// `On` and `Off` return immediately. `Toggle` toggles the LED
    /// `cycles` times and waits for `period_ms` after every toggle. The
    /// wait is done in steps of 100 ms, so the period is rounded down to
    /// a multiple of 100 ms.
    pub async fn apply<P: OutputPin, D: DelayNs>(
        &self,
        bank: &mut LedBank<P>,
        delay: &mut D,
    ) -> Result<(), P::Error> {
        match self.mode {
            LedMode::On => bank.turn_on(self.led),
            LedMode::Off => bank.turn_off(self.led),
            LedMode::Toggle => {
                for _ in 0..self.cycles {
                    bank.toggle(self.led)?;
                    for _ in 0..u32::from(self.period_ms) / TOGGLE_STEP_MS {
                        delay.delay_ms(TOGGLE_STEP_MS).await;
                    }
                }
                Ok(())
            }
        }
    }
}

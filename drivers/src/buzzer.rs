//! A buzzer driven by a GPIO pin (no PWM).
//!
//! The buzzer of the lab kit has its own oscillator, it sounds while
//! the pin is HIGH.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

/// An active buzzer
pub struct Buzzer<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    /// Takes the pin and silences the buzzer.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Buzzer { pin })
    }

    /// Sounds the buzzer for `duration_ms` milliseconds.
    pub async fn beep<D: DelayNs>(&mut self, delay: &mut D, duration_ms: u32) -> Result<(), P::Error> {
        self.pin.set_high()?;
        delay.delay_ms(duration_ms).await;
        self.pin.set_low()
    }

    /// Gives back the pin
    pub fn release(self) -> P {
        self.pin
    }
}

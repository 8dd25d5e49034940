//! The peripherals the tasks use.
//!
//! The tasks only need a few operations from the peripherals, so they
//! use these traits instead of the drivers. The operations cannot fail:
//! the implementations for the drivers log the driver errors and keep
//! going.

use drivers::{
    hc_sr04::{HcSr04, HcSr04Error, MAX_RANGE_CM},
    lcd::LcdItsE0803,
    leds::{Led, LedBank},
    switches::{Key, Switches},
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use embedded_hal_async::digital::Wait;

use crate::{config::DISPLAY_MAX_CM, gauge::IndicatorPattern};

/// Measures a distance.
#[allow(async_fn_in_trait)]
pub trait DistanceSensor {
    /// Returns the distance in centimeters.
    ///
    /// The task waits (and other tasks run) until the measurement is done.
    async fn read_distance_cm(&mut self) -> u16;
}

/// Shows a distance.
pub trait DistanceDisplay {
    /// Shows `value` until the next call
    fn write(&mut self, value: u16);

    /// Turns the display off. Calling it again changes nothing.
    fn power_off(&mut self);
}

/// Reports key presses.
pub trait InputSource {
    /// Returns the key pressed since the last poll, if any
    fn poll(&mut self) -> Option<Key>;
}

/// Three on/off indicators.
pub trait IndicatorBank {
    /// Turns one indicator on or off. Writing the same state again
    /// changes nothing.
    fn set(&mut self, led: Led, on: bool);

    /// Writes all the indicators.
    fn show(&mut self, pattern: IndicatorPattern) {
        for led in Led::ALL {
            self.set(led, pattern.is_on(led));
        }
    }
}

impl<T, E> DistanceSensor for HcSr04<T, E>
where
    T: OutputPin,
    E: InputPin + Wait<Error = T::Error>,
{
    /// A failed measurement means that nothing is in range, so it
    /// is reported as the maximum range of the sensor.
    async fn read_distance_cm(&mut self) -> u16 {
        match self.measure_cm().await {
            Ok(distance_cm) => distance_cm,
            Err(HcSr04Error::Timeout) => {
                warn!("HC-SR04 echo timed out, reporting {} cm", MAX_RANGE_CM);
                MAX_RANGE_CM
            }
            Err(HcSr04Error::Pin(_)) => {
                warn!("HC-SR04 pin error, reporting {} cm", MAX_RANGE_CM);
                MAX_RANGE_CM
            }
        }
    }
}

impl<P: OutputPin, D: DelayNs> DistanceDisplay for LcdItsE0803<P, D> {
    /// Distances above 999 cm are shown as 999.
    fn write(&mut self, value: u16) {
        if LcdItsE0803::write(self, u32::from(value.min(DISPLAY_MAX_CM))).is_err() {
            warn!("Failed to write {} on the LCD", value);
        }
    }

    fn power_off(&mut self) {
        if self.off().is_err() {
            warn!("Failed to turn off the LCD");
        }
    }
}

impl<A, B> InputSource for Switches<A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    fn poll(&mut self) -> Option<Key> {
        match Switches::poll(self) {
            Ok(key) => key,
            Err(_) => {
                warn!("Failed to read the switches");
                None
            }
        }
    }
}

impl<P: OutputPin> IndicatorBank for LedBank<P> {
    fn set(&mut self, led: Led, on: bool) {
        if self.set_state(led, on).is_err() {
            warn!("Failed to set {}", led);
        }
    }
}

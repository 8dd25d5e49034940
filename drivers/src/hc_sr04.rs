//! HC-SR04 ultrasonic distance sensor driver.
//!
//! A measurement works like this:
//! 1. the driver sets the TRIG pin HIGH for at least 10 us
//! 2. the sensor sends an ultrasonic burst and sets the ECHO pin HIGH
//! 3. the sensor sets the ECHO pin LOW when the echo comes back
//!
//! The time ECHO stays HIGH is the time the sound needs to travel to
//! the object and back. Sound travels 1 cm in about 29 us, so the
//! distance in centimeters is the pulse length divided by 58.
//!
//! The driver waits for the ECHO edges with [`Wait`], so the task
//! that measures yields the processor while waiting.

use embassy_time::{Duration, Instant, Timer, with_timeout};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::digital::Wait;

/// Microseconds of echo for one centimeter
const US_PER_CM: u64 = 58;

/// The length of the trigger pulse
const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// The maximum time the driver waits for each ECHO edge.
///
/// A 30 ms echo is more than 5 m, past the sensor's range.
pub const ECHO_TIMEOUT: Duration = Duration::from_millis(30);

/// The maximum distance the sensor can measure, in centimeters
pub const MAX_RANGE_CM: u16 = 400;

/// The errors of the HC-SR04 driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HcSr04Error<E> {
    /// The ECHO pin did not change in [`ECHO_TIMEOUT`]
    Timeout,

    /// A pin could not be read or written
    Pin(E),
}

/// Converts the length of the ECHO pulse to centimeters.
///
/// The result saturates at `u16::MAX`.
pub fn echo_to_cm(echo: Duration) -> u16 {
    u16::try_from(echo.as_micros() / US_PER_CM).unwrap_or(u16::MAX)
}

/// HC-SR04 driver
pub struct HcSr04<T: OutputPin, E: InputPin + Wait<Error = T::Error>> {
    /// The TRIG pin
    trigger: T,

    /// The ECHO pin
    echo: E,
}

impl<T: OutputPin, E: InputPin + Wait<Error = T::Error>> HcSr04<T, E> {
    pub fn new(trigger: T, echo: E) -> Self {
        HcSr04 { trigger, echo }
    }

    /// Triggers a measurement and returns the distance in centimeters.
    pub async fn measure_cm(&mut self) -> Result<u16, HcSr04Error<T::Error>> {
        // A previous echo that is still HIGH would be taken as the
        // start of this one
        if self.echo.is_high().map_err(HcSr04Error::Pin)? {
            self.wait_echo(false).await?;
        }

        self.trigger.set_high().map_err(HcSr04Error::Pin)?;
        Timer::after(TRIGGER_PULSE).await;
        self.trigger.set_low().map_err(HcSr04Error::Pin)?;

        self.wait_echo(true).await?;
        let start = Instant::now();
        self.wait_echo(false).await?;

        Ok(echo_to_cm(start.elapsed()))
    }

    /// Gives back the pins
    pub fn release(self) -> (T, E) {
        (self.trigger, self.echo)
    }

    /// Waits until the ECHO pin is HIGH (`high` is `true`) or LOW.
    async fn wait_echo(&mut self, high: bool) -> Result<(), HcSr04Error<T::Error>> {
        let edge = async {
            if high {
                self.echo.wait_for_high().await
            } else {
                self.echo.wait_for_low().await
            }
        };
        match with_timeout(ECHO_TIMEOUT, edge).await {
            Ok(result) => result.map_err(HcSr04Error::Pin),
            Err(_) => Err(HcSr04Error::Timeout),
        }
    }
}

//! The two push buttons used as keys.
//!
//! The buttons on the lab board have an external pull up resistor, so:
//!    - the pin's value is HIGH when the button is released
//!    - the pin's value is LOW when the button is pressed
//!
//! [`Switches::poll`] reports a key only once per press: when its pin
//! goes from released to pressed. Holding the button down does not
//! report it again.

use embedded_hal::digital::InputPin;

/// The keys read by [`Switches`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Switch1,
    Switch2,
}

/// Two buttons, polled periodically.
pub struct Switches<A: InputPin, B: InputPin<Error = A::Error>> {
    switch1: A,
    switch2: B,

    /// Whether each button was down at the previous poll, `switch1` first
    was_pressed: [bool; 2],
}

impl<A: InputPin, B: InputPin<Error = A::Error>> Switches<A, B> {
    pub fn new(switch1: A, switch2: B) -> Self {
        Switches {
            switch1,
            switch2,
            was_pressed: [false; 2],
        }
    }

    /// Returns the key that was pressed since the last poll.
    ///
    /// A key is reported when its own button goes from released to
    /// pressed. While both buttons are down nothing is reported, and
    /// releasing one of them does not report the other one again.
    pub fn poll(&mut self) -> Result<Option<Key>, A::Error> {
        let pressed = [self.switch1.is_low()?, self.switch2.is_low()?];
        let [was1, was2] = self.was_pressed;
        self.was_pressed = pressed;

        let key = match pressed {
            [true, false] if !was1 => Some(Key::Switch1),
            [false, true] if !was2 => Some(Key::Switch2),
            _ => None,
        };
        Ok(key)
    }
}

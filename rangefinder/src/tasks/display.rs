//! Shows the measured distance on the display.

use embassy_time::Ticker;

use crate::{collaborators::DistanceDisplay, config::DISPLAY_PERIOD, state::MeasurementState};

/// What a display cycle did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayEvent {
    /// The distance was written to the display
    Rendered(u16),

    /// The display kept its previous value
    Held,

    /// The measurement is stopped, the display was turned off
    PoweredOff,
}

/// The display task.
///
/// It only reads the shared state. The distance it reads may be the
/// one of the previous sense cycle.
pub struct DisplayTask<'a, D: DistanceDisplay> {
    state: &'a MeasurementState,
    display: D,
}

impl<'a, D: DistanceDisplay> DisplayTask<'a, D> {
    pub fn new(state: &'a MeasurementState, display: D) -> Self {
        DisplayTask { state, display }
    }

    /// Runs one cycle.
    ///
    /// | measuring | hold  | action            |
    /// |-----------|-------|-------------------|
    /// | off       | any   | turn display off  |
    /// | on        | off   | write distance    |
    /// | on        | on    | nothing (frozen)  |
    pub fn cycle(&mut self) -> DisplayEvent {
        if !self.state.measuring_enabled() {
            self.display.power_off();
            return DisplayEvent::PoweredOff;
        }

        if self.state.hold_enabled() {
            return DisplayEvent::Held;
        }

        let distance_cm = self.state.last_distance();
        self.display.write(distance_cm);
        DisplayEvent::Rendered(distance_cm)
    }

    /// Runs a cycle every [`DISPLAY_PERIOD`], forever.
    pub async fn run(mut self) -> ! {
        let mut ticker = Ticker::every(DISPLAY_PERIOD);
        loop {
            let event = self.cycle();
            debug!("Display {}", event);
            ticker.next().await;
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

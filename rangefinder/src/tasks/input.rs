//! Turns key presses into flag toggles.

use drivers::switches::Key;
use embassy_time::Ticker;

use crate::{collaborators::InputSource, config::INPUT_PERIOD, state::MeasurementState};

/// What an input cycle did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// No key was pressed
    Idle,

    /// `Switch1` started (`true`) or stopped (`false`) the measurement
    MeasuringToggled(bool),

    /// `Switch2` held (`true`) or released (`false`) the display
    HoldToggled(bool),
}

/// The input task.
///
/// It is the only writer of the two flags.
pub struct InputTask<'a, K: InputSource> {
    state: &'a MeasurementState,
    keys: K,
}

impl<'a, K: InputSource> InputTask<'a, K> {
    pub fn new(state: &'a MeasurementState, keys: K) -> Self {
        InputTask { state, keys }
    }

    /// Polls the keys once and toggles the matching flag.
    pub fn cycle(&mut self) -> InputEvent {
        match self.keys.poll() {
            Some(Key::Switch1) => InputEvent::MeasuringToggled(self.state.toggle_measuring()),
            Some(Key::Switch2) => InputEvent::HoldToggled(self.state.toggle_hold()),
            None => InputEvent::Idle,
        }
    }

    /// Runs a cycle every [`INPUT_PERIOD`], forever.
    pub async fn run(mut self) -> ! {
        let mut ticker = Ticker::every(INPUT_PERIOD);
        loop {
            match self.cycle() {
                InputEvent::Idle => {}
                event => info!("{}", event),
            }
            ticker.next().await;
        }
    }
}

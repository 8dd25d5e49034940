//! Measures the distance and shows its band on the LEDs.

use embassy_time::Ticker;

use crate::{
    collaborators::{DistanceSensor, IndicatorBank},
    config::SENSE_PERIOD,
    gauge::{Band, IndicatorPattern},
    state::MeasurementState,
};

/// What a sense cycle did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SenseEvent {
    /// The measurement is stopped, the LEDs were turned off
    MeasurementDisabled,

    /// A distance was measured and stored
    Measured { distance_cm: u16, band: Band },
}

/// The sense task.
///
/// It is the only writer of the measured distance.
pub struct SenseTask<'a, S: DistanceSensor, I: IndicatorBank> {
    state: &'a MeasurementState,
    sensor: S,
    indicators: I,
}

impl<'a, S: DistanceSensor, I: IndicatorBank> SenseTask<'a, S, I> {
    pub fn new(state: &'a MeasurementState, sensor: S, indicators: I) -> Self {
        SenseTask {
            state,
            sensor,
            indicators,
        }
    }

    /// Runs one cycle.
    ///
    /// While the measurement is stopped, the sensor is not read and the
    /// LEDs are turned off. Otherwise the distance is measured, stored
    /// in the shared state and its band is written to the LEDs.
    pub async fn cycle(&mut self) -> SenseEvent {
        if !self.state.measuring_enabled() {
            self.indicators.show(IndicatorPattern::ALL_OFF);
            info!("Measurement disabled");
            return SenseEvent::MeasurementDisabled;
        }

        let distance_cm = self.sensor.read_distance_cm().await;
        self.state.set_last_distance(distance_cm);

        let band = Band::classify(distance_cm);
        self.indicators.show(band.pattern());
        debug!("Distance {} cm, band {}", distance_cm, band);

        SenseEvent::Measured { distance_cm, band }
    }

    /// Runs a cycle every [`SENSE_PERIOD`], forever.
    pub async fn run(mut self) -> ! {
        let mut ticker = Ticker::every(SENSE_PERIOD);
        loop {
            self.cycle().await;
            ticker.next().await;
        }
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }
}

//! The distance bands shown on the three LEDs.
//!
//! | distance (cm)  | LED1 | LED2 | LED3 |
//! |----------------|------|------|------|
//! | `d < 10`       | off  | off  | off  |
//! | `10 <= d < 20` | on   | off  | off  |
//! | `20 <= d < 30` | on   | on   | off  |
//! | `30 <= d`      | on   | on   | on   |

use drivers::leds::{LED_COUNT, Led};

use crate::config::BAND_BOUNDS_CM;

/// One of the four distance ranges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// Less than 10 cm
    Near,
    /// From 10 cm up to (excluding) 20 cm
    Close,
    /// From 20 cm up to (excluding) 30 cm
    Medium,
    /// 30 cm or more
    Far,
}

impl Band {
    /// Finds the band of a distance.
    ///
    /// Every distance has exactly one band.
    pub fn classify(distance_cm: u16) -> Band {
        let [close, medium, far] = BAND_BOUNDS_CM;
        if distance_cm < close {
            Band::Near
        } else if distance_cm < medium {
            Band::Close
        } else if distance_cm < far {
            Band::Medium
        } else {
            Band::Far
        }
    }

    /// The LEDs that are on for this band
    pub fn pattern(self) -> IndicatorPattern {
        match self {
            Band::Near => IndicatorPattern::ALL_OFF,
            Band::Close => IndicatorPattern([true, false, false]),
            Band::Medium => IndicatorPattern([true, true, false]),
            Band::Far => IndicatorPattern([true, true, true]),
        }
    }
}

/// The state of the three LEDs, `Led1` first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorPattern(pub [bool; LED_COUNT]);

impl IndicatorPattern {
    pub const ALL_OFF: IndicatorPattern = IndicatorPattern([false; LED_COUNT]);

    /// The pattern of a distance
    pub fn for_distance(distance_cm: u16) -> IndicatorPattern {
        Band::classify(distance_cm).pattern()
    }

    pub fn is_on(&self, led: Led) -> bool {
        self.0[led as usize]
    }
}

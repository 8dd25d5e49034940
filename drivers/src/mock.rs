//! Mock pins and delays for the host tests.

use core::convert::Infallible;
use core::future::pending;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::digital::Wait;

/// A level change recorded by a [`MockPin`]: `(pin id, high)`
pub type Event = (u8, bool);

/// Records every level written to it.
///
/// Pins created with [`MockPin::logged`] also push their writes to a log
/// shared with other pins, so tests can check the order of the writes.
#[derive(Default)]
pub struct MockPin {
    id: u8,
    high: bool,
    writes: usize,
    log: Option<Rc<RefCell<Vec<Event>>>>,
}

impl MockPin {
    pub fn logged(id: u8, log: &Rc<RefCell<Vec<Event>>>) -> Self {
        MockPin {
            id,
            log: Some(log.clone()),
            ..Default::default()
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    fn write(&mut self, high: bool) {
        self.high = high;
        self.writes += 1;
        if let Some(log) = &self.log {
            log.borrow_mut().push((self.id, high));
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

/// An input whose level is controlled by the test through a shared cell.
#[derive(Clone, Default)]
pub struct MockInput {
    pub low: Rc<Cell<bool>>,
}

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low.get())
    }
}

/// Adds up the requested delays instead of waiting.
#[derive(Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// The pin changes seen by an HC-SR04 test, in order
pub type Steps = Rc<RefCell<Vec<&'static str>>>;

/// A TRIG pin that records its pulses.
pub struct MockTrigger {
    steps: Steps,
    fail: bool,
    raised_at: Option<Instant>,

    /// The length of the last HIGH pulse
    pub pulse: Option<Duration>,
}

impl MockTrigger {
    pub fn new(steps: &Steps) -> Self {
        MockTrigger {
            steps: steps.clone(),
            fail: false,
            raised_at: None,
            pulse: None,
        }
    }

    /// A pin that cannot be written
    pub fn failing(steps: &Steps) -> Self {
        MockTrigger {
            fail: true,
            ..MockTrigger::new(steps)
        }
    }
}

impl ErrorType for MockTrigger {
    type Error = ErrorKind;
}

impl OutputPin for MockTrigger {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.steps.borrow_mut().push("trigger low");
        if let Some(raised_at) = self.raised_at.take() {
            self.pulse = Some(raised_at.elapsed());
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.steps.borrow_mut().push("trigger high");
        self.raised_at = Some(Instant::now());
        Ok(())
    }
}

/// An ECHO pin.
///
/// It goes HIGH as soon as it is waited on and stays HIGH for `pulse`.
/// Without a pulse it never goes HIGH.
pub struct MockEcho {
    steps: Steps,
    high: bool,
    answered: bool,
    pulse: Option<Duration>,
}

impl MockEcho {
    pub fn answering(steps: &Steps, pulse: Duration) -> Self {
        MockEcho {
            steps: steps.clone(),
            high: false,
            answered: false,
            pulse: Some(pulse),
        }
    }

    pub fn silent(steps: &Steps) -> Self {
        MockEcho {
            pulse: None,
            ..MockEcho::answering(steps, Duration::from_ticks(0))
        }
    }

    /// Starts HIGH, as if a previous echo was still going on
    pub fn stale(mut self) -> Self {
        self.high = true;
        self
    }
}

impl ErrorType for MockEcho {
    type Error = ErrorKind;
}

impl InputPin for MockEcho {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

impl Wait for MockEcho {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            if self.pulse.is_none() {
                pending::<()>().await;
            }
            self.high = true;
            self.answered = true;
            self.steps.borrow_mut().push("echo high");
        }
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        if self.high {
            if let (true, Some(pulse)) = (self.answered, self.pulse) {
                Timer::after(pulse).await;
            }
            self.high = false;
            self.steps.borrow_mut().push("echo low");
        }
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_high().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_low().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        if self.high {
            self.wait_for_low().await
        } else {
            self.wait_for_high().await
        }
    }
}

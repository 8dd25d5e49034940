//! Drivers for the peripherals used by the course exercises.
//!
//! All the drivers are written against the `embedded-hal` and
//! `embedded-hal-async` traits instead of `embassy-stm32` types.
//! The firmware gives them `Output`, `Input` and `ExtiInput`
//! pins, while the tests give them mock pins.

#![cfg_attr(not(test), no_std)]

pub mod bcd;
pub mod buzzer;
pub mod hc_sr04;
pub mod lcd;
pub mod leds;
pub mod switches;

#[cfg(test)]
mod mock;

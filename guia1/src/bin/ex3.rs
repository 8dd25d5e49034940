#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use drivers::leds::{Led, LedBank, LedCommand, LedMode, Polarity};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::{Delay, Timer};
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The LEDs on the lab board are active LOW, the `LedBank` takes care of it
    // and sets all the pins HIGH (off) when it is created.
    let pins = [
        Output::new(peripherals.PC7, Level::High, Speed::Low),
        Output::new(peripherals.PC6, Level::High, Speed::Low),
        Output::new(peripherals.PC9, Level::High, Speed::Low),
    ];
    let Ok(mut leds) = LedBank::new(pins, Polarity::ActiveLow);

    // `Delay` implements the async `DelayNs` trait using the embassy timer
    let mut delay = Delay;

    let commands = [
        LedCommand {
            mode: LedMode::On,
            led: Led::Led1,
            cycles: 0,
            period_ms: 0,
        },
        LedCommand {
            mode: LedMode::Toggle,
            led: Led::Led3,
            cycles: 10,
            period_ms: 500,
        },
        LedCommand {
            mode: LedMode::Off,
            led: Led::Led1,
            cycles: 0,
            period_ms: 0,
        },
    ];

    for command in commands {
        info!("Running {}", command);
        let Ok(()) = command.apply(&mut leds, &mut delay).await;
    }
    info!("Done");

    loop {
        Timer::after_secs(1).await;
    }
}

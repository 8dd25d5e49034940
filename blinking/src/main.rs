#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use drivers::leds::{Led, LedBank, Polarity};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The LEDs on the lab board are active LOW: they light up when the pin is LOW
    // and turn off when the pin is HIGH. We set the initial value of the pin to HIGH
    // so that the LED are turned off when the pins are setup.
    let pins = [
        // LED1 is connected to PC7
        Output::new(peripherals.PC7, Level::High, Speed::Low),
        // LED2 is connected to PC6
        Output::new(peripherals.PC6, Level::High, Speed::Low),
        // LED3 is connected to PC9
        Output::new(peripherals.PC9, Level::High, Speed::Low),
    ];

    // GPIO pins cannot fail, their error type is `Infallible`,
    // so the `Ok` pattern always matches.
    let Ok(mut leds) = LedBank::new(pins, Polarity::ActiveLow);

    loop {
        for led in Led::ALL {
            let Ok(()) = leds.turn_on(led);
        }
        info!("LEDs on");
        Timer::after_millis(1000).await;

        let Ok(()) = leds.all_off();
        info!("LEDs off");
        Timer::after_millis(1000).await;
    }
}

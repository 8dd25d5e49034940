#![no_std]
#![no_main]

use defmt::{info, warn};
use defmt_rtt as _;
use drivers::bcd::{BcdPins, is_decimal_digit};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // Pin `i` carries bit `i` of the nibble
    let mut bus = BcdPins::new([
        Output::new(peripherals.PB12, Level::Low, Speed::Low), // b0
        Output::new(peripherals.PB13, Level::Low, Speed::Low), // b1
        Output::new(peripherals.PB14, Level::Low, Speed::Low), // b2
        Output::new(peripherals.PB15, Level::Low, Speed::Low), // b3
    ]);

    // 12 is not a BCD digit, it is written but a warning is printed
    for nibble in [7, 12] {
        if !is_decimal_digit(nibble) {
            warn!("{} is not a decimal digit", nibble);
        }
        let Ok(()) = bus.write(nibble);
        info!("Wrote {=u8:04b}", nibble);
        Timer::after_secs(2).await;
    }

    loop {
        Timer::after_secs(1).await;
    }
}

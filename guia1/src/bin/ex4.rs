#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use drivers::bcd::to_bcd_digits;
use embassy_executor::Spawner;
use embassy_time::Timer;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let _peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The last request asks for too many digits and is refused
    let requests: [(u32, u8); 4] = [(123, 3), (7, 3), (98_765, 5), (1, 10)];

    for (value, digits) in requests {
        match to_bcd_digits(value, digits) {
            // The digits are printed units first
            Ok(bcd) => info!("{} on {} digits: {}", value, digits, bcd.as_slice()),
            Err(err) => error!("{} on {} digits: {}", value, digits, err),
        }
    }

    loop {
        Timer::after_secs(1).await;
    }
}

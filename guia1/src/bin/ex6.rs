#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use drivers::{
    bcd::BcdPins,
    buzzer::Buzzer,
    lcd::{LcdError, LcdItsE0803},
};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::{Delay, Timer};
use panic_probe as _;

/// How long the buzzer sounds when a value cannot be shown
const ERROR_BEEP_MS: u32 = 500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The four BCD lines are shared by the three CD4543 latches of the LCD
    let data = BcdPins::new([
        Output::new(peripherals.PB12, Level::Low, Speed::Low), // b0
        Output::new(peripherals.PB13, Level::Low, Speed::Low), // b1
        Output::new(peripherals.PB14, Level::Low, Speed::Low), // b2
        Output::new(peripherals.PB15, Level::Low, Speed::Low), // b3
    ]);

    // One latch enable line per digit, the first one is the most
    // significant digit
    let select = [
        Output::new(peripherals.PC10, Level::Low, Speed::Low),
        Output::new(peripherals.PC11, Level::Low, Speed::Low),
        Output::new(peripherals.PC12, Level::Low, Speed::Low),
    ];

    let Ok(mut lcd) = LcdItsE0803::new(data, select, Delay);
    let Ok(mut buzzer) = Buzzer::new(Output::new(peripherals.PB5, Level::Low, Speed::Low));
    let mut delay = Delay;

    // The last two requests are refused: 4 digits is more than the LCD
    // has and 1000 does not fit in 3 digits
    let requests: [(u32, u8); 4] = [(765, 3), (42, 2), (1, 4), (1000, 3)];

    for (value, digits) in requests {
        match lcd.show(value, digits) {
            Ok(()) => info!("Showing {} on {} digits", value, digits),
            Err(err) => {
                if let LcdError::InvalidDigitCount(_) = err {
                    error!("The LCD has 1 to 3 digits, not {}", digits);
                } else {
                    error!("Cannot show {} on {} digits: {}", value, digits, err);
                }
                let Ok(()) = buzzer.beep(&mut delay, ERROR_BEEP_MS).await;
            }
        }
        Timer::after_secs(2).await;
    }

    let Ok(()) = lcd.off();
    info!("LCD off");

    loop {
        Timer::after_secs(1).await;
    }
}

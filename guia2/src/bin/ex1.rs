#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use drivers::{
    bcd::BcdPins,
    hc_sr04::HcSr04,
    lcd::LcdItsE0803,
    leds::{LedBank, Polarity},
    switches::Switches,
};
use embassy_executor::Spawner;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Input, Level, Output, Pull, Speed},
};
use embassy_time::{Delay, Timer};
use panic_probe as _;
use rangefinder::{
    MeasurementState,
    tasks::{DisplayTask, InputTask, SenseTask},
};

// Embassy tasks cannot be generic, so the concrete peripherals get names
type Sensor = HcSr04<Output<'static>, ExtiInput<'static>>;
type Indicators = LedBank<Output<'static>>;
type Display = LcdItsE0803<Output<'static>, Delay>;
type Keys = Switches<Input<'static>, Input<'static>>;

/// Shared by the three tasks.
///
/// It only holds atomics, so it can be a plain `static`.
static STATE: MeasurementState = MeasurementState::new();

#[embassy_executor::task]
async fn sense(task: SenseTask<'static, Sensor, Indicators>) {
    task.run().await
}

#[embassy_executor::task]
async fn display(task: DisplayTask<'static, Display>) {
    task.run().await
}

#[embassy_executor::task]
async fn input(task: InputTask<'static, Keys>) {
    task.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());
    info!("Device started");

    // The LEDs on the lab board are active LOW, the `LedBank` turns them
    // off when it is created.
    let Ok(leds) = LedBank::new(
        [
            Output::new(peripherals.PC7, Level::High, Speed::Low),
            Output::new(peripherals.PC6, Level::High, Speed::Low),
            Output::new(peripherals.PC9, Level::High, Speed::Low),
        ],
        Polarity::ActiveLow,
    );

    // The HC-SR04 TRIG pin is an output, the ECHO pin is an input that
    // the driver waits on, so it is connected to an EXTI line.
    let sensor = HcSr04::new(
        Output::new(peripherals.PA1, Level::Low, Speed::Low),
        ExtiInput::new(peripherals.PA0, peripherals.EXTI0, Pull::Down),
    );

    let data = BcdPins::new([
        Output::new(peripherals.PB12, Level::Low, Speed::Low),
        Output::new(peripherals.PB13, Level::Low, Speed::Low),
        Output::new(peripherals.PB14, Level::Low, Speed::Low),
        Output::new(peripherals.PB15, Level::Low, Speed::Low),
    ]);
    let select = [
        Output::new(peripherals.PC10, Level::Low, Speed::Low),
        Output::new(peripherals.PC11, Level::Low, Speed::Low),
        Output::new(peripherals.PC12, Level::Low, Speed::Low),
    ];
    let Ok(lcd) = LcdItsE0803::new(data, select, Delay);

    // The buttons on the lab board have an external pull up resistor (soldered
    // on the lab board), so the internal pull resistor is not needed.
    // The input task polls them, so they do not need EXTI lines.
    let keys = Switches::new(
        // SWITCH1 starts and stops the measurement
        Input::new(peripherals.PA8, Pull::None),
        // SWITCH2 holds the value on the display
        Input::new(peripherals.PA7, Pull::None),
    );

    spawner
        .spawn(sense(SenseTask::new(&STATE, sensor, leds)))
        .unwrap();
    spawner
        .spawn(display(DisplayTask::new(&STATE, lcd)))
        .unwrap();
    spawner.spawn(input(InputTask::new(&STATE, keys))).unwrap();

    loop {
        Timer::after_secs(5).await;
        info!("{}", STATE.snapshot());
    }
}

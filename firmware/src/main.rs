#![no_std]
#![no_main]

mod temp_sense;

use esp_backtrace as _;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config, I2c};
use esp_hal::main;
use esp_println::println;
use log::{info, warn};
use zerocopy::IntoBytes;

use crate::temp_sense::TempSense;

// One conversion takes 240ms in continuous mode
const POLL_INTERVAL_MS: u32 = 250;

#[main]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Default config is 100kHz standard mode
    let i2c = I2c::new(peripherals.I2C0, Config::default())
        .unwrap()
        .with_sda(peripherals.GPIO10)
        .with_scl(peripherals.GPIO8);

    let delay = Delay::new();

    println!("booted!");

    let mut temp_sense = TempSense::new(i2c).expect("ADT7410 not responding");
    info!("ADT7410 configured");

    loop {
        match temp_sense.poll() {
            Ok(Some(reading)) => esp_println::Printer::write_bytes(reading.as_bytes()),
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }

        delay.delay_millis(POLL_INTERVAL_MS);
    }
}

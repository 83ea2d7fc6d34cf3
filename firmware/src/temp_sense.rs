// ADT7410 board temperature sampling

use adt7410::{Adt7410, Error, Reading, DEFAULT_ADDRESS};
use embedded_hal::i2c::I2c;
use log::warn;

pub struct TempSense<I> {
    sensor: Adt7410<I>,
    tick: u32,
}

impl<I: I2c> TempSense<I> {
    pub fn new(i2c: I) -> Result<Self, Error<I::Error>> {
        let mut sensor = Adt7410::new(i2c, DEFAULT_ADDRESS)?;

        // A wrong ID usually means a different part on the footprint, keep going anyway
        match sensor.verify_id() {
            Ok(_) => {}
            Err(Error::UnexpectedId(id)) => warn!("unexpected ADT7410 id 0x{:02x}", id),
            Err(e) => return Err(e),
        }

        Ok(Self { sensor, tick: 0 })
    }

    // Called once per poll interval. Returns None while a conversion is in progress.
    pub fn poll(&mut self) -> Result<Option<Reading>, Error<I::Error>> {
        self.tick = self.tick.wrapping_add(1);

        Ok(self
            .sensor
            .read_sample()?
            .map(|sample| Reading::from_sample(self.tick, &sample)))
    }
}

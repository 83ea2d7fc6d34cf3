//! Driver for the ADT7410 I2C temperature sensor
//!
//! The driver keeps no copy of the device state: the configuration register is
//! read back before every sample so the decode always matches what the chip is
//! actually doing, even if something else on the bus reconfigured it.
//!
//! Not safe to share between callers without external locking, the
//! status/config/temperature read sequence is not atomic.

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod conversion;
pub mod error;
pub mod frame;
pub mod registers;
pub mod status;

pub use bus::BusTransport;
pub use config::{Config, FaultQueue, InterruptMode, OperatingMode, Polarity, Resolution};
pub use error::Error;
pub use frame::Reading;
pub use registers::{Register, DEFAULT_ADDRESS};
pub use status::Status;

use log::{debug, trace};

use registers::{DEVICE_ID, DEVICE_ID_MASK};

/// A ready sample along with the status and configuration it was read with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub raw: u16,
    pub config: u8,
    pub status: Status,
    pub temperature_c: f32,
}

impl Sample {
    pub fn resolution(&self) -> Resolution {
        Resolution::from_word(self.config)
    }
}

#[derive(Debug)]
pub struct Adt7410<B> {
    bus: B,
    address: u8,
}

impl<B> Adt7410<B>
where
    B: BusTransport,
{
    /// Take ownership of the bus and write the default configuration
    pub fn new(bus: B, address: u8) -> Result<Self, Error<B::Error>> {
        let mut sensor = Self { bus, address };
        sensor.configure()?;
        Ok(sensor)
    }

    /// Like `new`, but writes `config` instead of the default
    pub fn with_config(bus: B, address: u8, config: Config) -> Result<Self, Error<B::Error>> {
        let mut sensor = Self { bus, address };
        sensor.set_config(config)?;
        Ok(sensor)
    }

    /// Write the default configuration: 16-bit, continuous, 1 fault, INT/CT active low
    pub fn configure(&mut self) -> Result<(), Error<B::Error>> {
        self.set_config(Config::default())
    }

    pub fn set_config(&mut self, config: Config) -> Result<(), Error<B::Error>> {
        let word = config.word();
        debug!("adt7410@0x{:02x}: config <- 0x{:02x}", self.address, word);
        self.write_reg(Register::Configuration, word)
    }

    /// Read the configuration currently held by the device
    pub fn config(&mut self) -> Result<Config, Error<B::Error>> {
        let word = self.read_reg(Register::Configuration)?;
        Ok(Config::from_word(word))
    }

    pub fn status(&mut self) -> Result<Status, Error<B::Error>> {
        Ok(Status(self.read_reg(Register::Status)?))
    }

    pub fn is_data_ready(&mut self) -> Result<bool, Error<B::Error>> {
        Ok(self.status()?.is_ready())
    }

    /// Read the latest conversion.
    ///
    /// Returns `None` without touching the temperature registers if the
    /// current conversion has not finished.
    pub fn read_sample(&mut self) -> Result<Option<Sample>, Error<B::Error>> {
        let status = self.status()?;
        if !status.is_ready() {
            return Ok(None);
        }

        let config = self.read_reg(Register::Configuration)?;

        let mut data = [0u8; 2];
        self.bus
            .read_block(self.address, Register::TempMsb.into(), &mut data)
            .map_err(Error::Bus)?;

        let raw = conversion::raw_from_bytes(data);
        let temperature_c = conversion::decode(raw, Resolution::from_word(config));
        trace!(
            "adt7410@0x{:02x}: raw 0x{:04x} config 0x{:02x} -> {} C",
            self.address,
            raw,
            config,
            temperature_c
        );

        Ok(Some(Sample {
            raw,
            config,
            status,
            temperature_c,
        }))
    }

    /// Temperature in degrees C, or exactly 0.0 if no conversion is ready yet.
    /// Use `read_sample` to tell the two apart.
    pub fn read_temperature(&mut self) -> Result<f32, Error<B::Error>> {
        Ok(self
            .read_sample()?
            .map_or(0.0, |sample| sample.temperature_c))
    }

    /// Contents of the ID register
    pub fn device_id(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_reg(Register::WhoAmI)
    }

    /// Check the manufacturer bits of the ID register, ignoring the revision
    pub fn verify_id(&mut self) -> Result<u8, Error<B::Error>> {
        let id = self.device_id()?;
        if id & DEVICE_ID_MASK != DEVICE_ID & DEVICE_ID_MASK {
            return Err(Error::UnexpectedId(id));
        }
        Ok(id)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    fn write_reg(&mut self, register: Register, value: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .write_byte(self.address, register.into(), value)
            .map_err(Error::Bus)
    }

    fn read_reg(&mut self, register: Register) -> Result<u8, Error<B::Error>> {
        self.bus
            .read_byte(self.address, register.into())
            .map_err(Error::Bus)
    }
}

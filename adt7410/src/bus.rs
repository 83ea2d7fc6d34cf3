// Register-addressed access to a two-wire bus, SMBus "byte data" style

use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Byte and block register access used by the driver.
///
/// Every `embedded_hal::i2c::I2c` implementation gets this for free, so the
/// driver can sit on any HAL bus (or a shared-bus proxy) without glue code.
pub trait BusTransport {
    type Error;

    /// Write `value` into `register` of the device at `address`.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Read one byte from `register`.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Read `buf.len()` consecutive bytes starting at `register`.
    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I> BusTransport for I
where
    I: I2c<SevenBitAddress>,
{
    type Error = I::Error;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[register, value])
    }

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buffer: [u8; 1] = [0x00];
        self.write_read(address, &[register], &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        // The ADT7410 auto-increments its address pointer across a block read
        self.write_read(address, &[register], buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_byte_sends_register_then_value() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(0x48, vec![0x03, 0x80])]);
        i2c.write_byte(0x48, 0x03, 0x80).unwrap();
        i2c.done();
    }

    #[test]
    fn read_block_fills_whole_buffer() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write_read(
            0x49,
            vec![0x00],
            vec![0x0C, 0x80],
        )]);
        let mut buf = [0u8; 2];
        i2c.read_block(0x49, 0x00, &mut buf).unwrap();
        assert_eq!(buf, [0x0C, 0x80]);
        i2c.done();
    }
}

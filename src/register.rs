//! Command-byte framing for the TSL2591 register file.
//!
//! Every access starts with a command byte: bit 7 selects the command register and bits 6:5
//! select the transaction type.  `0b01` (normal operation, auto-increment) lets a two byte read
//! walk from a low data register into its high partner.
use embedded_hal::i2c::I2c;

const COMMAND: u8 = 0b1000_0000;
const AUTO_INCREMENT: u8 = 0b0010_0000;

#[must_use]
pub const fn command(register: u8) -> u8 {
    COMMAND | AUTO_INCREMENT | register
}

pub struct RegisterInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> RegisterInterface<I2C> {
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub const fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn write_byte(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[command(register), value])
    }

    pub fn read_byte(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0];
        self.i2c
            .write_read(self.address, &[command(register)], &mut data)?;
        Ok(data[0])
    }

    /// Reads `register` and `register + 1` as one little-endian word.
    pub fn read_word(&mut self, register: u8) -> Result<u16, I2C::Error> {
        let mut data: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[command(register)], &mut data)?;
        Ok(u16::from_le_bytes(data))
    }
}

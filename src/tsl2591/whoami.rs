use crate::{
    tsl2591::{reg, Tsl2591},
    WhoAmI,
};
use embedded_hal::i2c::I2c;

impl<I2C: I2c> WhoAmI<I2C, u8> for Tsl2591<I2C> {
    const EXPECTED_WHOAMI: u8 = 0x50;

    fn whoami(&mut self) -> Result<u8, I2C::Error> {
        self.registers.read_byte(reg::ID)
    }
}

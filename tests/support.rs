use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

pub const ADDRESS: u8 = 0x29;

/// Identification, power on and default control write, in the order `init` performs them.
pub fn init() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write_read(ADDRESS, vec![0xB2], vec![0x50]),
        I2cTransaction::write(ADDRESS, vec![0xA0, 0x03]),
        I2cTransaction::write(ADDRESS, vec![0xA1, 0x10]),
    ]
}

pub fn control(value: u8) -> I2cTransaction {
    I2cTransaction::write(ADDRESS, vec![0xA1, value])
}

pub fn channels(channel0: u16, channel1: u16) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write_read(ADDRESS, vec![0xB4], channel0.to_le_bytes().to_vec()),
        I2cTransaction::write_read(ADDRESS, vec![0xB6], channel1.to_le_bytes().to_vec()),
    ]
}

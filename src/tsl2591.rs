//! # Rust Driver for TSL2591 High Dynamic Range Ambient Light Sensor
//!
//! The sensor integrates two photodiodes: channel 0 responds to the full spectrum (visible and
//! infrared) and channel 1 mostly to infrared.  Illuminance is derived from both counts, the
//! configured gain and the integration time.
//!
//! ```no_run
//! # use embedded_hal::i2c::I2c;
//! use tsl2591_driver::{tsl2591::{config::Gain, Tsl2591, ADDRESS}, Driver};
//!
//! # fn run<I2C: I2c>(i2c: I2C) -> Result<(), tsl2591_driver::tsl2591::Error<I2C::Error>> {
//! let mut sensor = Tsl2591::new(i2c, ADDRESS).unwrap().init()?;
//! sensor.set_gain(Gain::High)?;
//! let lux = sensor.lux()?;
//! # let _ = lux;
//! # Ok(())
//! # }
//! ```
//!
//! ## External Links
//!
//! - [Datasheet]
//!
//! [Datasheet]: https://cdn-shop.adafruit.com/datasheets/TSL25911_Datasheet_EN_v1.pdf
use crate::{register::RegisterInterface, Driver, WhoAmI};
use config::{EnableFlags, Gain, IntegrationTime, SensorConfig};
use embedded_hal::i2c::I2c;

pub mod config;
pub mod helper;
pub mod whoami;

/// Default 7-bit bus address.
pub const ADDRESS: u8 = 0x29;

/// Register file.  Only the enable, control, identification and channel data registers are
/// driven; the interrupt threshold, persistence and status registers are listed for reference.
pub mod reg {
    pub const ENABLE: u8 = 0x00;
    pub const CONTROL: u8 = 0x01;
    pub const AILTL: u8 = 0x04;
    pub const AILTH: u8 = 0x05;
    pub const AIHTL: u8 = 0x06;
    pub const AIHTH: u8 = 0x07;
    pub const NPAILTL: u8 = 0x08;
    pub const NPAILTH: u8 = 0x09;
    pub const NPAIHTL: u8 = 0x0A;
    pub const NPAIHTH: u8 = 0x0B;
    pub const PERSIST: u8 = 0x0C;
    pub const PID: u8 = 0x11;
    pub const ID: u8 = 0x12;
    pub const STATUS: u8 = 0x13;
    pub const C0DATAL: u8 = 0x14;
    pub const C0DATAH: u8 = 0x15;
    pub const C1DATAL: u8 = 0x16;
    pub const C1DATAH: u8 = 0x17;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    I2cError(E),
    /// Gain or integration time outside the supported set.  Nothing was written.
    InvalidConfig,
    UnexpectedDevice,
    /// A channel saturated, so no meaningful lux value exists.  Reduce gain or integration time.
    Overflow,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::I2cError(error)
    }
}

/// One reading of both channels.  `channel1` normally stays below `channel0` but noise can push
/// it above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawLuminosity {
    /// Full spectrum
    pub channel0: u16,
    /// Infrared
    pub channel1: u16,
}

impl RawLuminosity {
    #[must_use]
    pub const fn visible(self) -> u16 {
        self.channel0.saturating_sub(self.channel1)
    }
}

pub struct Tsl2591<I2C> {
    registers: RegisterInterface<I2C>,
    config: SensorConfig,
}

impl<I2C: I2c> Driver<I2C, Error<I2C::Error>> for Tsl2591<I2C> {
    fn new_inner(i2c: I2C, address: u8) -> Self {
        Self {
            registers: RegisterInterface::new(i2c, address),
            config: SensorConfig::default(),
        }
    }

    fn init_inner(mut self) -> Result<Self, Error<I2C::Error>> {
        if self.whoami()? != Self::EXPECTED_WHOAMI {
            return Err(Error::UnexpectedDevice);
        }
        self.enable()?;
        self.write_control(self.config)?;
        Ok(self)
    }
}

impl<I2C: I2c> Tsl2591<I2C> {
    pub fn release(self) -> I2C {
        self.registers.release()
    }

    pub const fn config(&self) -> SensorConfig {
        self.config
    }

    pub const fn gain(&self) -> Gain {
        self.config.gain
    }

    pub const fn integration_time(&self) -> IntegrationTime {
        self.config.integration_time
    }

    /// Accepts a [`Gain`] or its two bit register encoding.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] before any bus traffic when `gain` does not name a gain.
    pub fn set_gain<G: TryInto<Gain>>(&mut self, gain: G) -> Result<(), Error<I2C::Error>> {
        let gain = gain.try_into().map_err(|_| Error::InvalidConfig)?;
        self.configure(SensorConfig {
            gain,
            ..self.config
        })
    }

    /// Accepts an [`IntegrationTime`], its three bit register encoding or a
    /// [`fugit::MillisDurationU32`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] before any bus traffic when `integration_time` is not one of the
    /// supported times.
    pub fn set_integration_time<T: TryInto<IntegrationTime>>(
        &mut self,
        integration_time: T,
    ) -> Result<(), Error<I2C::Error>> {
        let integration_time = integration_time
            .try_into()
            .map_err(|_| Error::InvalidConfig)?;
        self.configure(SensorConfig {
            integration_time,
            ..self.config
        })
    }

    /// Writes gain and integration time together.  The stored config only changes once the
    /// device has accepted it.
    pub fn configure(&mut self, config: SensorConfig) -> Result<(), Error<I2C::Error>> {
        self.write_control(config)?;
        self.config = config;
        Ok(())
    }

    fn write_control(&mut self, config: SensorConfig) -> Result<(), I2C::Error> {
        self.registers.write_byte(reg::CONTROL, config.control())
    }

    /// Reads the control register as the device currently holds it.  The stored config is left
    /// untouched.
    pub fn read_config(&mut self) -> Result<SensorConfig, Error<I2C::Error>> {
        let control = self.registers.read_byte(reg::CONTROL)?;
        SensorConfig::from_control(control).map_err(|_| Error::InvalidConfig)
    }

    /// Powers on the oscillator and starts the ADC.
    pub fn enable(&mut self) -> Result<(), I2C::Error> {
        self.set_enable(EnableFlags::POWER_ON)
    }

    /// Powers the device down.  Readings taken while disabled are stale.
    pub fn disable(&mut self) -> Result<(), I2C::Error> {
        self.set_enable(EnableFlags::POWER_OFF)
    }

    pub fn set_enable(&mut self, flags: EnableFlags) -> Result<(), I2C::Error> {
        self.registers.write_byte(reg::ENABLE, flags.into())
    }

    /// Reads channel 0 and then channel 1.
    pub fn read_raw(&mut self) -> Result<RawLuminosity, I2C::Error> {
        let channel0 = self.registers.read_word(reg::C0DATAL)?;
        let channel1 = self.registers.read_word(reg::C1DATAL)?;
        Ok(RawLuminosity { channel0, channel1 })
    }

    /// Takes a fresh reading.  Use [`Tsl2591::read_raw`] when both channels are needed from the
    /// same integration cycle.
    pub fn full_spectrum(&mut self) -> Result<u16, I2C::Error> {
        Ok(self.read_raw()?.channel0)
    }

    /// Takes a fresh reading.
    pub fn infrared(&mut self) -> Result<u16, I2C::Error> {
        Ok(self.read_raw()?.channel1)
    }

    /// Full spectrum minus infrared, clamped at zero.
    pub fn visible(&mut self) -> Result<u16, I2C::Error> {
        Ok(self.read_raw()?.visible())
    }

    /// # Errors
    ///
    /// [`Error::Overflow`]: a channel saturated under the current integration time.
    pub fn lux(&mut self) -> Result<f64, Error<I2C::Error>> {
        let raw = self.read_raw()?;
        helper::lux(raw, self.config).ok_or(Error::Overflow)
    }
}

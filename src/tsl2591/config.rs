use cast::u16;
use fugit::MillisDurationU32;
use num_enum::{IntoPrimitive, TryFromPrimitive};

const CONTROL_AGAIN_SHIFT: u8 = 4;
const CONTROL_AGAIN_MASK: u8 = 0b0011_0000;
const CONTROL_ATIME_MASK: u8 = 0b0000_0111;

/// Raised when a gain or integration time falls outside the values the device supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidConfig;

/// ALS gain.  The discriminant is the two bit `AGAIN` field of the control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gain {
    Low = 0b00,
    Medium = 0b01,
    High = 0b10,
    Maximum = 0b11,
}

impl Gain {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Maximum];

    /// Typical gain relative to [`Gain::Low`], as characterised for the lux equation.
    #[must_use]
    pub const fn multiplier(self) -> u16 {
        match self {
            Self::Low => 1,
            Self::Medium => 25,
            Self::High => 428,
            Self::Maximum => 9876,
        }
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::Medium
    }
}

/// ALS integration time.  The discriminant is the three bit `ATIME` field of the control
/// register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    Ms100 = 0b000,
    Ms200 = 0b001,
    Ms300 = 0b010,
    Ms400 = 0b011,
    Ms500 = 0b100,
    Ms600 = 0b101,
}

impl IntegrationTime {
    pub const ALL: [Self; 6] = [
        Self::Ms100,
        Self::Ms200,
        Self::Ms300,
        Self::Ms400,
        Self::Ms500,
        Self::Ms600,
    ];

    #[must_use]
    pub const fn millis(self) -> u16 {
        match self {
            Self::Ms100 => 100,
            Self::Ms200 => 200,
            Self::Ms300 => 300,
            Self::Ms400 => 400,
            Self::Ms500 => 500,
            Self::Ms600 => 600,
        }
    }

    /// How long a caller should wait between reads for a full integration cycle.
    #[must_use]
    pub const fn duration(self) -> MillisDurationU32 {
        MillisDurationU32::millis(self.millis() as u32)
    }

    /// Largest count either channel can report before it is considered saturated.  The 100 ms
    /// cycle is too short for the ADC to reach the full 16 bit range.
    #[must_use]
    pub const fn max_count(self) -> u16 {
        match self {
            Self::Ms100 => 36863,
            _ => u16::MAX,
        }
    }
}

impl Default for IntegrationTime {
    fn default() -> Self {
        Self::Ms100
    }
}

impl TryFrom<MillisDurationU32> for IntegrationTime {
    type Error = InvalidConfig;

    fn try_from(duration: MillisDurationU32) -> Result<Self, Self::Error> {
        let millis = u16(duration.to_millis()).map_err(|_| InvalidConfig)?;
        Self::ALL
            .into_iter()
            .find(|time| time.millis() == millis)
            .ok_or(InvalidConfig)
    }
}

/// Gain and integration time, the two halves of the control register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    pub gain: Gain,
    pub integration_time: IntegrationTime,
}

impl SensorConfig {
    #[must_use]
    pub const fn new(gain: Gain, integration_time: IntegrationTime) -> Self {
        Self {
            gain,
            integration_time,
        }
    }

    /// Control register value: `AGAIN` in bits 5:4, `ATIME` in bits 2:0.
    #[must_use]
    pub fn control(self) -> u8 {
        (u8::from(self.gain) << CONTROL_AGAIN_SHIFT) | u8::from(self.integration_time)
    }

    /// Decodes a control register value read back from the device.  `SRESET` (bit 7) and the
    /// reserved bits are ignored.
    ///
    /// # Errors
    ///
    /// [`InvalidConfig`]: `ATIME` holds one of the two unassigned codes.
    pub fn from_control(control: u8) -> Result<Self, InvalidConfig> {
        let gain = Gain::try_from((control & CONTROL_AGAIN_MASK) >> CONTROL_AGAIN_SHIFT)
            .map_err(|_| InvalidConfig)?;
        let integration_time =
            IntegrationTime::try_from(control & CONTROL_ATIME_MASK).map_err(|_| InvalidConfig)?;
        Ok(Self::new(gain, integration_time))
    }
}

/// Contents of the enable register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnableFlags {
    /// No-persist interrupt enable
    pub npien: bool,
    /// ALS interrupt enable
    pub aien: bool,
    /// ALS (ADC) enable
    pub aen: bool,
    /// Oscillator power on
    pub pon: bool,
}

impl EnableFlags {
    pub const POWER_ON: Self = Self {
        npien: false,
        aien: false,
        aen: true,
        pon: true,
    };

    pub const POWER_OFF: Self = Self {
        npien: false,
        aien: false,
        aen: false,
        pon: false,
    };
}

impl Default for EnableFlags {
    fn default() -> Self {
        Self::POWER_ON
    }
}

impl From<EnableFlags> for u8 {
    fn from(flags: EnableFlags) -> Self {
        (Self::from(flags.npien) << 7)
            | (Self::from(flags.aien) << 4)
            | (Self::from(flags.aen) << 1)
            | Self::from(flags.pon)
    }
}

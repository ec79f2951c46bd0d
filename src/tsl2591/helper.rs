//! Conversion from raw channel counts to illuminance.
//!
//! The device characterisation gives two linear equations in the channel counts, scaled by the
//! counts-per-lux of the current configuration.  The larger of the two is the estimate.
use crate::tsl2591::{
    config::{IntegrationTime, SensorConfig},
    RawLuminosity,
};

/// Device factor.
pub const LUX_DF: f64 = 408.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Coefficients applying to every channel ratio from `lower` up to the next band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBand {
    pub lower: f64,
    pub coefficients: Coefficients,
}

// One set covers the whole ratio range for this package.
pub const RATIO_BANDS: [RatioBand; 1] = [RatioBand {
    lower: 0.0,
    coefficients: Coefficients {
        b: 1.64,
        c: 0.59,
        d: 0.86,
    },
}];

#[must_use]
pub fn coefficients_for(ratio: f64) -> Coefficients {
    RATIO_BANDS
        .iter()
        .rev()
        .find(|band| ratio >= band.lower)
        .map_or(RATIO_BANDS[0].coefficients, |band| band.coefficients)
}

#[must_use]
pub fn is_saturated(raw: RawLuminosity, integration_time: IntegrationTime) -> bool {
    let max_count = integration_time.max_count();
    raw.channel0 >= max_count || raw.channel1 >= max_count
}

#[must_use]
pub fn counts_per_lux(config: SensorConfig) -> f64 {
    f64::from(config.integration_time.millis()) * f64::from(config.gain.multiplier()) / LUX_DF
}

/// Returns `None` when either channel is saturated.
#[must_use]
pub fn lux(raw: RawLuminosity, config: SensorConfig) -> Option<f64> {
    if is_saturated(raw, config.integration_time) {
        return None;
    }
    if raw.channel0 == 0 {
        return Some(0.0);
    }

    let channel0 = f64::from(raw.channel0);
    let channel1 = f64::from(raw.channel1);
    let Coefficients { b, c, d } = coefficients_for(channel1 / channel0);
    let cpl = counts_per_lux(config);

    let lux = f64::max((channel0 - b * channel1) / cpl, (c * channel0 - d * channel1) / cpl);
    Some(f64::max(lux, 0.0))
}

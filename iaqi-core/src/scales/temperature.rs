//! Temperature point scale
//!
//! Rates whole-degree Celsius readings against the IAQUK comfort band:
//!
//! ```text
//! Excellent: 18 - 21 °C
//! Good:      ±1 °C
//! Fair:      ±2 °C
//! Poor:      ±3 °C
//! Inadequate: ±4 °C or more
//! ```
//!
//! One point is deducted per whole degree of deviation from the nearest band
//! edge, capped at four so the floor stays at 1. Readings are signed; a
//! sub-zero reading deviates by its full distance instead of wrapping.

use crate::{
    constants::bands::{TEMP_EXCELLENT_HIGH_C, TEMP_EXCELLENT_LOW_C},
    constants::index::{MAX_DEDUCTION, MAX_POINTS},
    errors::{ScaleError, ScaleResult},
    traits::PointScale,
};

use super::utils;

/// Temperature scale for whole-degree Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureScale {
    /// Lower edge of the excellent band (°C)
    excellent_low_c: i32,

    /// Upper edge of the excellent band (°C)
    excellent_high_c: i32,
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self {
            excellent_low_c: TEMP_EXCELLENT_LOW_C,
            excellent_high_c: TEMP_EXCELLENT_HIGH_C,
        }
    }
}

impl TemperatureScale {
    /// Create a scale with a custom excellent band
    pub fn with_band(low_c: i32, high_c: i32) -> ScaleResult<Self> {
        if low_c > high_c {
            return Err(ScaleError::InvertedBand { low: low_c, high: high_c });
        }

        Ok(Self {
            excellent_low_c: low_c,
            excellent_high_c: high_c,
        })
    }
}

impl PointScale for TemperatureScale {
    type Value = i32;

    fn points(&self, celsius: Self::Value) -> u8 {
        let deviation = utils::band_deviation(celsius, self.excellent_low_c, self.excellent_high_c);
        MAX_POINTS - deviation.min(MAX_DEDUCTION as u32) as u8
    }
}

/// Rate a temperature reading against the reference band
pub fn points_temperature(celsius: i32) -> u8 {
    TemperatureScale::default().points(celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excellent_band_scores_full_points() {
        for celsius in 18..=21 {
            assert_eq!(points_temperature(celsius), 5);
        }
    }

    #[test]
    fn one_point_per_degree_of_deviation() {
        assert_eq!(points_temperature(17), 4);
        assert_eq!(points_temperature(22), 4);
        assert_eq!(points_temperature(16), 3);
        assert_eq!(points_temperature(24), 2);
    }

    #[test]
    fn deduction_caps_at_floor() {
        // Deviation beyond four degrees on either side always yields 1
        assert_eq!(points_temperature(10), 1);
        assert_eq!(points_temperature(30), 1);
        assert_eq!(points_temperature(-40), 1);
    }

    #[test]
    fn custom_band() {
        let scale = TemperatureScale::with_band(20, 24).unwrap();
        assert_eq!(scale.points(22), 5);
        assert_eq!(scale.points(18), 3);
        assert!(scale.is_excellent(24));
    }

    #[test]
    fn inverted_band_rejected() {
        let result = TemperatureScale::with_band(25, 18);
        assert_eq!(result.unwrap_err(), ScaleError::InvertedBand { low: 25, high: 18 });
    }
}

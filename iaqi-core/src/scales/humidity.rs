//! Relative humidity point scale
//!
//! Rates percentage readings against nested symmetric rings around the
//! IAQUK comfort band:
//!
//! ```text
//! Excellent:  40 - 60 % RH
//! Good:       < 40 / > 60 % RH
//! Fair:       < 30 / > 70 % RH
//! Poor:       < 20 / > 80 % RH
//! Inadequate: < 10 / > 90 % RH
//! ```
//!
//! The rings are checked widest first so a severely dry or damp reading
//! matches only its worst band. Readings are signed and unvalidated: a
//! negative percentage simply lands in the inadequate ring.

use crate::{
    constants::bands::{
        HUMIDITY_EXCELLENT_HIGH_PCT, HUMIDITY_EXCELLENT_LOW_PCT, HUMIDITY_RING_WIDTH_PCT,
    },
    errors::{ScaleError, ScaleResult},
    traits::PointScale,
};

/// Humidity scale for relative humidity percentages
#[derive(Debug, Clone)]
pub struct HumidityScale {
    /// Lower edge of the excellent band (% RH)
    excellent_low_pct: i32,

    /// Upper edge of the excellent band (% RH)
    excellent_high_pct: i32,

    /// Width of each rating ring outside the excellent band (% RH)
    ring_width_pct: i32,
}

impl Default for HumidityScale {
    fn default() -> Self {
        Self {
            excellent_low_pct: HUMIDITY_EXCELLENT_LOW_PCT,
            excellent_high_pct: HUMIDITY_EXCELLENT_HIGH_PCT,
            ring_width_pct: HUMIDITY_RING_WIDTH_PCT,
        }
    }
}

impl HumidityScale {
    /// Create a scale with a custom excellent band and ring width
    pub fn with_bands(low_pct: i32, high_pct: i32, ring_width_pct: i32) -> ScaleResult<Self> {
        if low_pct > high_pct {
            return Err(ScaleError::InvertedBand { low: low_pct, high: high_pct });
        }
        if ring_width_pct < 1 {
            return Err(ScaleError::InvalidRingWidth);
        }

        Ok(Self {
            excellent_low_pct: low_pct,
            excellent_high_pct: high_pct,
            ring_width_pct,
        })
    }
}

impl PointScale for HumidityScale {
    type Value = i32;

    fn points(&self, percent: Self::Value) -> u8 {
        let low = self.excellent_low_pct;
        let high = self.excellent_high_pct;
        let ring = self.ring_width_pct;

        // Widest ring first, so each reading matches only its worst band
        if percent < low - 3 * ring || percent > high + 3 * ring {
            1
        } else if percent < low - 2 * ring || percent > high + 2 * ring {
            2
        } else if percent < low - ring || percent > high + ring {
            3
        } else if percent < low || percent > high {
            4
        } else {
            5
        }
    }
}

/// Rate a relative humidity reading against the reference bands
pub fn points_humidity(percent: i32) -> u8 {
    HumidityScale::default().points(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excellent_band_edges() {
        assert_eq!(points_humidity(40), 5);
        assert_eq!(points_humidity(50), 5);
        assert_eq!(points_humidity(60), 5);
    }

    #[test]
    fn ring_boundaries() {
        assert_eq!(points_humidity(39), 4);
        assert_eq!(points_humidity(61), 4);
        assert_eq!(points_humidity(30), 4);
        assert_eq!(points_humidity(29), 3);
        assert_eq!(points_humidity(19), 2);
        assert_eq!(points_humidity(80), 3);
        assert_eq!(points_humidity(81), 2);
        assert_eq!(points_humidity(9), 1);
        assert_eq!(points_humidity(91), 1);
    }

    #[test]
    fn out_of_domain_readings_land_in_worst_ring() {
        assert_eq!(points_humidity(-5), 1);
        assert_eq!(points_humidity(180), 1);
    }

    #[test]
    fn custom_bands() {
        // Museum-style tight control: 45-55 with 5% rings
        let scale = HumidityScale::with_bands(45, 55, 5).unwrap();
        assert_eq!(scale.points(50), 5);
        assert_eq!(scale.points(44), 4);
        assert_eq!(scale.points(34), 2);
        assert_eq!(scale.points(29), 1);
    }

    #[test]
    fn bad_configurations_rejected() {
        assert_eq!(
            HumidityScale::with_bands(60, 40, 10).unwrap_err(),
            ScaleError::InvertedBand { low: 60, high: 40 },
        );
        assert_eq!(
            HumidityScale::with_bands(40, 60, 0).unwrap_err(),
            ScaleError::InvalidRingWidth,
        );
    }
}

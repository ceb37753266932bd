//! CO2 point scale
//!
//! Rates CO2 concentration in parts per million against an ascending
//! threshold ladder:
//!
//! ```text
//! Excellent:  <= 600 ppm
//! Good:       <= 800 ppm
//! Fair:       <= 1500 ppm
//! Poor:       <= 1800 ppm
//! Inadequate:  > 1800 ppm
//! ```
//!
//! ## Threshold provenance
//!
//! The IAQUK rating index prose describes the good band as 601-1000 ppm,
//! but monitors in the field evaluate an 800 ppm cutover and this scale
//! keeps that behavior for continuity. Whoever owns domain calibration
//! should reconcile the two; switching to the published edge is a one-line
//! change in [`crate::constants::bands::CO2_GOOD_MAX_PPM`].

use crate::{
    constants::bands::{
        CO2_EXCELLENT_MAX_PPM, CO2_FAIR_MAX_PPM, CO2_GOOD_MAX_PPM, CO2_POOR_MAX_PPM,
    },
    errors::{ScaleError, ScaleResult},
    traits::PointScale,
};

use super::utils;

/// CO2 scale for ppm concentration readings
#[derive(Debug, Clone)]
pub struct Co2Scale {
    /// Ladder cutoffs, lowest concentration first (ppm)
    cutoffs_ppm: [u32; 4],
}

impl Default for Co2Scale {
    fn default() -> Self {
        Self {
            cutoffs_ppm: [
                CO2_EXCELLENT_MAX_PPM,
                CO2_GOOD_MAX_PPM,
                CO2_FAIR_MAX_PPM,
                CO2_POOR_MAX_PPM,
            ],
        }
    }
}

impl Co2Scale {
    /// Create a scale with custom ladder cutoffs
    pub fn with_thresholds(
        excellent_max: u32,
        good_max: u32,
        fair_max: u32,
        poor_max: u32,
    ) -> ScaleResult<Self> {
        if !(excellent_max < good_max && good_max < fair_max && fair_max < poor_max) {
            return Err(ScaleError::UnorderedThresholds);
        }

        Ok(Self {
            cutoffs_ppm: [excellent_max, good_max, fair_max, poor_max],
        })
    }
}

impl PointScale for Co2Scale {
    type Value = u32;

    fn points(&self, ppm: Self::Value) -> u8 {
        utils::ascending_ladder(ppm, &self.cutoffs_ppm)
    }
}

/// Rate a CO2 reading against the reference ladder
pub fn points_co2(ppm: u32) -> u8 {
    Co2Scale::default().points(ppm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        assert_eq!(points_co2(0), 5);
        assert_eq!(points_co2(600), 5);
        assert_eq!(points_co2(601), 4);
        assert_eq!(points_co2(800), 4);
        assert_eq!(points_co2(801), 3);
        assert_eq!(points_co2(1500), 3);
        assert_eq!(points_co2(1501), 2);
        assert_eq!(points_co2(1800), 2);
        assert_eq!(points_co2(1801), 1);
    }

    #[test]
    fn extreme_concentration_floors_at_one() {
        assert_eq!(points_co2(u32::MAX), 1);
    }

    #[test]
    fn custom_thresholds() {
        let scale = Co2Scale::with_thresholds(450, 600, 800, 1000).unwrap();
        assert_eq!(scale.points(450), 5);
        assert_eq!(scale.points(550), 4);
        assert_eq!(scale.points(1001), 1);
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let result = Co2Scale::with_thresholds(600, 600, 1500, 1800);
        assert_eq!(result.unwrap_err(), ScaleError::UnorderedThresholds);
    }
}

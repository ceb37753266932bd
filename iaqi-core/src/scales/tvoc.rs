//! TVOC point scale
//!
//! Rates total volatile organic compound concentration in parts per billion
//! against an ascending threshold ladder:
//!
//! ```text
//! Excellent:  <=   65 ppb  (0 - 0.065 ppm)
//! Good:       <=  220 ppb  (0.065 - 0.22 ppm)
//! Fair:       <=  660 ppb  (0.22 - 0.66 ppm)
//! Poor:       <= 2200 ppb  (0.66 - 2.2 ppm)
//! Inadequate:  > 2200 ppb  (2.2 - 5.5 ppm)
//! ```
//!
//! ## Unit background
//!
//! Published IAQ ratings for TVOC are usually given in mg/m³, while MOx
//! sensors report ppb. Converting between the two needs an assumed gas
//! mixture and its average molar mass, so instead the ladder follows the
//! Umweltbundesamt guideline, which grades TVOC concentration directly in
//! ppb on a logarithmic scale aligned with human perception
//! (Bundesgesundheitsblatt 50:990-1005, 2007,
//! DOI 10.1007/s00103-007-0290-y).

use crate::{
    constants::bands::{
        TVOC_EXCELLENT_MAX_PPB, TVOC_FAIR_MAX_PPB, TVOC_GOOD_MAX_PPB, TVOC_POOR_MAX_PPB,
    },
    errors::{ScaleError, ScaleResult},
    traits::PointScale,
};

use super::utils;

/// TVOC scale for ppb concentration readings
#[derive(Debug, Clone)]
pub struct TvocScale {
    /// Ladder cutoffs, lowest concentration first (ppb)
    cutoffs_ppb: [u32; 4],
}

impl Default for TvocScale {
    fn default() -> Self {
        Self {
            cutoffs_ppb: [
                TVOC_EXCELLENT_MAX_PPB,
                TVOC_GOOD_MAX_PPB,
                TVOC_FAIR_MAX_PPB,
                TVOC_POOR_MAX_PPB,
            ],
        }
    }
}

impl TvocScale {
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
            cutoffs_ppb: [excellent_max, good_max, fair_max, poor_max],
        })
    }
}

impl PointScale for TvocScale {
    type Value = u32;

    fn points(&self, ppb: Self::Value) -> u8 {
        utils::ascending_ladder(ppb, &self.cutoffs_ppb)
    }
}

/// Rate a TVOC reading against the reference ladder
pub fn points_tvoc(ppb: u32) -> u8 {
    TvocScale::default().points(ppb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        assert_eq!(points_tvoc(0), 5);
        assert_eq!(points_tvoc(65), 5);
        assert_eq!(points_tvoc(66), 4);
        assert_eq!(points_tvoc(220), 4);
        assert_eq!(points_tvoc(221), 3);
        assert_eq!(points_tvoc(660), 3);
        assert_eq!(points_tvoc(661), 2);
        assert_eq!(points_tvoc(2200), 2);
        assert_eq!(points_tvoc(2201), 1);
    }

    #[test]
    fn custom_thresholds() {
        let scale = TvocScale::with_thresholds(50, 100, 300, 1000).unwrap();
        assert_eq!(scale.points(80), 4);
        assert!(scale.is_excellent(50));
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let result = TvocScale::with_thresholds(65, 660, 220, 2200);
        assert_eq!(result.unwrap_err(), ScaleError::UnorderedThresholds);
    }
}

//! Rating bands for the composite index
//!
//! Five ordered qualitative bands, anchored at multiples of the number of
//! regarded measurements. The scoring core deals only in the closed
//! [`Rating`] enum; conversion to display text happens at the presentation
//! boundary via [`Rating::label`] or `Display`, so the engine stays
//! independent of any locale or transport encoding.

use core::fmt;
use core::str::FromStr;

use crate::constants::index::REGARDED_MEASUREMENTS;
use crate::errors::ScaleError;

/// Qualitative air quality band derived from the composite index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Rating {
    /// Index below 8 - air quality needs intervention
    Inadequate = 1,
    /// Index 8 to 11
    Poor = 2,
    /// Index 12 to 15
    Fair = 3,
    /// Index 16 to 19
    Good = 4,
    /// Index 20 and above
    Excellent = 5,
}

impl Rating {
    /// Classify a composite index into its rating band.
    ///
    /// Total over all of `u8`: indexes above the theoretical maximum still
    /// rate excellent, and indexes below the achievable minimum rate
    /// inadequate.
    pub const fn from_index(index: u8) -> Self {
        if index < 2 * REGARDED_MEASUREMENTS {
            Self::Inadequate
        } else if index < 3 * REGARDED_MEASUREMENTS {
            Self::Poor
        } else if index < 4 * REGARDED_MEASUREMENTS {
            Self::Fair
        } else if index < 5 * REGARDED_MEASUREMENTS {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    /// Human-readable band label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inadequate => "Inadequate",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Position of this band in the fixed order, 1 (worst) to 5 (best)
    pub const fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rating {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Inadequate" => Ok(Self::Inadequate),
            "Poor" => Ok(Self::Poor),
            "Fair" => Ok(Self::Fair),
            "Good" => Ok(Self::Good),
            "Excellent" => Ok(Self::Excellent),
            _ => Err(ScaleError::UnknownRating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(Rating::from_index(0), Rating::Inadequate);
        assert_eq!(Rating::from_index(7), Rating::Inadequate);
        assert_eq!(Rating::from_index(8), Rating::Poor);
        assert_eq!(Rating::from_index(11), Rating::Poor);
        assert_eq!(Rating::from_index(12), Rating::Fair);
        assert_eq!(Rating::from_index(15), Rating::Fair);
        assert_eq!(Rating::from_index(16), Rating::Good);
        assert_eq!(Rating::from_index(19), Rating::Good);
        assert_eq!(Rating::from_index(20), Rating::Excellent);
        // Above the theoretical maximum still classifies
        assert_eq!(Rating::from_index(u8::MAX), Rating::Excellent);
    }

    #[test]
    fn bands_are_ordered() {
        assert!(Rating::Inadequate < Rating::Poor);
        assert!(Rating::Poor < Rating::Fair);
        assert!(Rating::Fair < Rating::Good);
        assert!(Rating::Good < Rating::Excellent);
        assert_eq!(Rating::Inadequate.rank(), 1);
        assert_eq!(Rating::Excellent.rank(), 5);
    }

    #[test]
    fn labels_round_trip() {
        for rating in [
            Rating::Inadequate,
            Rating::Poor,
            Rating::Fair,
            Rating::Good,
            Rating::Excellent,
        ] {
            assert_eq!(rating.label().parse::<Rating>().unwrap(), rating);
        }
    }

    #[test]
    fn unknown_label_rejected() {
        assert_eq!("Splendid".parse::<Rating>(), Err(ScaleError::UnknownRating));
    }
}

//! Error Types for Scale Configuration and Parsing
//!
//! The scoring path itself is total: every point function and the composite
//! index always return a value for any integer input, so no error can arise
//! while rating a snapshot. Errors exist only at the edges:
//!
//! - constructing a scale with custom bands that are inconsistent
//! - parsing a rating label coming back in from a host or CLI
//!
//! Errors are kept small and `Copy` so they can be stored and logged on
//! embedded targets without allocation.

use thiserror_no_std::Error;

/// Result type for scale configuration operations
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Configuration and parsing errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// A custom band's lower edge lies above its upper edge
    #[error("band lower edge {low} above upper edge {high}")]
    InvertedBand {
        /// The offending lower edge
        low: i32,
        /// The offending upper edge
        high: i32,
    },

    /// Ladder thresholds do not strictly increase
    #[error("ladder thresholds must strictly increase")]
    UnorderedThresholds,

    /// Humidity ring width of zero or less
    #[error("ring width must be at least 1")]
    InvalidRingWidth,

    /// Rating label did not match any band
    #[error("unrecognized rating label")]
    UnknownRating,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScaleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvertedBand { low, high } =>
                defmt::write!(fmt, "Band lower edge {} above upper edge {}", low, high),
            Self::UnorderedThresholds =>
                defmt::write!(fmt, "Ladder thresholds must strictly increase"),
            Self::InvalidRingWidth =>
                defmt::write!(fmt, "Ring width must be at least 1"),
            Self::UnknownRating =>
                defmt::write!(fmt, "Unrecognized rating label"),
        }
    }
}

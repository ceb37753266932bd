//! Core trait for per-measurement point scales
//!
//! One trait shared by the four scales. Keep it simple - the engine is a
//! handful of pure functions and doesn't need deeper abstractions.

use crate::constants::index::MAX_POINTS;

/// Point scale - implement this for each regarded measurement
pub trait PointScale {
    /// The measurement type this scale rates
    type Value;

    /// Rate a single reading on the 1-5 point scale.
    ///
    /// Total over the whole input domain: out-of-domain readings fall
    /// through the comparison ladder into the worst band, never an error.
    fn points(&self, value: Self::Value) -> u8;

    /// Whether a reading sits in the excellent band of this scale
    fn is_excellent(&self, value: Self::Value) -> bool {
        self.points(value) == MAX_POINTS
    }
}

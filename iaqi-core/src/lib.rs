//! Scoring engine for IAQI
//!
//! Converts four raw environmental readings (temperature, relative
//! humidity, CO2, TVOC) into a bounded composite index and an ordered
//! rating band, following the IAQUK rating index scheme. Designed for edge
//! devices:
//!
//! - Pure integer arithmetic, no allocation, no I/O
//! - Stateless and total: every function returns a value for any input
//! - `no_std` by default-feature opt-out
//!
//! Sensor acquisition, display rendering and radio advertising live with
//! the callers; this crate only turns readings into scores.
//!
//! ```
//! use iaqi_core::{iaq_index, iaq_rating, quality_percent, Rating};
//!
//! let index = iaq_index(19, 45, 550, 60);
//! assert_eq!(index, 20);
//! assert_eq!(iaq_rating(index), Rating::Excellent);
//! assert_eq!(quality_percent(index), 100);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod index;
pub mod rating;
pub mod scales;
pub mod traits;

// Public API
pub use errors::{ScaleError, ScaleResult};
pub use index::{
    iaq_index, iaq_rating, max_iaq_index, min_iaq_index, quality_percent, IaqScale, Scorecard,
    Snapshot,
};
pub use rating::Rating;
pub use scales::{
    points_co2, points_humidity, points_temperature, points_tvoc, Co2Scale, HumidityScale,
    TemperatureScale, TvocScale,
};
pub use traits::PointScale;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

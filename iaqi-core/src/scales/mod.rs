//! Per-Measurement Point Scales
//!
//! ## Overview
//!
//! Each regarded measurement - temperature, relative humidity, CO2 and TVOC
//! concentration - is rated independently on a 1-5 point scale following the
//! IAQUK rating index scheme. The four point scores sum to the composite
//! index handled in [`crate::index`].
//!
//! Every scale is a small configuration struct: the reference band edges
//! live in [`crate::constants::bands`] and back the `Default` impl, while
//! custom constructors let a deployment tune thresholds without touching the
//! evaluation logic. The scales hold no state and perform no I/O, so they
//! are safe to call concurrently from any context.
//!
//! ## Scale shapes
//!
//! Two shapes cover all four measurements:
//!
//! - **Deviation bands** (temperature, humidity): full points inside an
//!   excellent band, one point lost per unit (or ring) of deviation outside
//!   it, floored at 1.
//! - **Ascending ladders** (CO2, TVOC): four concentration cutoffs walked
//!   lowest first, first match wins, everything above the last cutoff
//!   scores 1.
//!
//! ## Usage
//!
//! ```
//! use iaqi_core::scales::{points_co2, Co2Scale};
//! use iaqi_core::PointScale;
//!
//! // Reference thresholds via the free function
//! assert_eq!(points_co2(550), 5);
//!
//! // Stricter deployment-specific thresholds
//! let strict = Co2Scale::with_thresholds(450, 600, 800, 1000).unwrap();
//! assert_eq!(strict.points(550), 4);
//! ```

mod co2;
mod humidity;
mod temperature;
mod tvoc;
mod utils;

pub use co2::{points_co2, Co2Scale};
pub use humidity::{points_humidity, HumidityScale};
pub use temperature::{points_temperature, TemperatureScale};
pub use tvoc::{points_tvoc, TvocScale};

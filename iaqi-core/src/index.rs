//! Composite index aggregation
//!
//! The composite IAQ index is the sum of the four per-measurement point
//! scores, bounded by [`MIN_IAQ_INDEX`] and [`MAX_IAQ_INDEX`]. This module
//! carries the aggregation in two forms:
//!
//! - free functions over the reference scales, for callers that just want a
//!   number for four readings;
//! - [`IaqScale`], the four scales composed into one value, for deployments
//!   with tuned bands.
//!
//! The engine makes no freshness or consistency guarantee across the four
//! inputs; the caller acquires a coherent [`Snapshot`] per evaluation cycle
//! and discards the result after use.
//!
//! ```
//! use iaqi_core::{IaqScale, Snapshot, Rating};
//!
//! let snapshot = Snapshot { temperature_c: 19, humidity_pct: 45, co2_ppm: 550, tvoc_ppb: 60 };
//! let card = IaqScale::default().assess(&snapshot);
//! assert_eq!(card.index, 20);
//! assert_eq!(card.rating, Rating::Excellent);
//! assert_eq!(card.quality_percent(), 100);
//! ```

use crate::{
    constants::index::{MAX_IAQ_INDEX, MIN_IAQ_INDEX},
    rating::Rating,
    scales::{
        points_co2, points_humidity, points_temperature, points_tvoc, Co2Scale, HumidityScale,
        TemperatureScale, TvocScale,
    },
    traits::PointScale,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! trace_assess {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_assess {
    ($($arg:tt)*) => {};
}

/// One evaluation cycle's worth of sensor readings.
///
/// The four values must come from the same time window; gathering them
/// atomically is the acquisition side's obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Temperature in whole degrees Celsius
    pub temperature_c: i32,
    /// Relative humidity in percent
    pub humidity_pct: i32,
    /// CO2 concentration in parts per million
    pub co2_ppm: u32,
    /// TVOC concentration in parts per billion
    pub tvoc_ppb: u32,
}

/// Scoring result for one snapshot: per-measurement points, composite
/// index and rating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scorecard {
    /// Points contributed by temperature
    pub temperature: u8,
    /// Points contributed by relative humidity
    pub humidity: u8,
    /// Points contributed by CO2 concentration
    pub co2: u8,
    /// Points contributed by TVOC concentration
    pub tvoc: u8,
    /// Composite index, the sum of the four point scores
    pub index: u8,
    /// Rating band for the composite index
    pub rating: Rating,
}

impl Scorecard {
    /// Index normalized against the theoretical maximum, for gauge display.
    ///
    /// The all-excellent snapshot maps to 100.
    pub const fn quality_percent(&self) -> u8 {
        quality_percent(self.index)
    }
}

/// The four per-measurement scales composed into one scoring engine.
///
/// `Default` uses the reference bands; deployments with tuned thresholds
/// build the individual scales first and compose them with [`IaqScale::new`].
#[derive(Debug, Clone, Default)]
pub struct IaqScale {
    temperature: TemperatureScale,
    humidity: HumidityScale,
    co2: Co2Scale,
    tvoc: TvocScale,
}

impl IaqScale {
    /// Compose an engine from four individually configured scales
    pub fn new(
        temperature: TemperatureScale,
        humidity: HumidityScale,
        co2: Co2Scale,
        tvoc: TvocScale,
    ) -> Self {
        Self { temperature, humidity, co2, tvoc }
    }

    /// Composite index for a snapshot
    pub fn index(&self, snapshot: &Snapshot) -> u8 {
        self.temperature.points(snapshot.temperature_c)
            + self.humidity.points(snapshot.humidity_pct)
            + self.co2.points(snapshot.co2_ppm)
            + self.tvoc.points(snapshot.tvoc_ppb)
    }

    /// Full scoring breakdown for a snapshot
    pub fn assess(&self, snapshot: &Snapshot) -> Scorecard {
        let temperature = self.temperature.points(snapshot.temperature_c);
        let humidity = self.humidity.points(snapshot.humidity_pct);
        let co2 = self.co2.points(snapshot.co2_ppm);
        let tvoc = self.tvoc.points(snapshot.tvoc_ppb);

        let index = temperature + humidity + co2 + tvoc;
        let rating = Rating::from_index(index);

        trace_assess!(
            "iaq index {} ({}) for t={} h={} co2={} tvoc={}",
            index,
            rating.label(),
            snapshot.temperature_c,
            snapshot.humidity_pct,
            snapshot.co2_ppm,
            snapshot.tvoc_ppb,
        );

        Scorecard { temperature, humidity, co2, tvoc, index, rating }
    }
}

/// Composite index for four readings rated with the reference scales
pub fn iaq_index(temperature_c: i32, humidity_pct: i32, co2_ppm: u32, tvoc_ppb: u32) -> u8 {
    points_temperature(temperature_c)
        + points_humidity(humidity_pct)
        + points_co2(co2_ppm)
        + points_tvoc(tvoc_ppb)
}

/// Rating band for a composite index
pub const fn iaq_rating(index: u8) -> Rating {
    Rating::from_index(index)
}

/// Smallest achievable composite index
pub const fn min_iaq_index() -> u8 {
    MIN_IAQ_INDEX
}

/// Largest achievable composite index
pub const fn max_iaq_index() -> u8 {
    MAX_IAQ_INDEX
}

/// Normalize a composite index to a 0-100 percentage.
///
/// Indexes above the theoretical maximum yield values above 100, matching
/// the classifier's tolerance for out-of-band input.
pub const fn quality_percent(index: u8) -> u8 {
    (index as u16 * 100 / MAX_IAQ_INDEX as u16) as u8
}

//! Rating Band Edges for the Regarded Measurements
//!
//! The IAQUK rating index scheme scores each measurement on a 1-5 point
//! scale. The band edges below reproduce that scheme for temperature,
//! relative humidity, CO2 and TVOC concentration. Values are integers in the
//! native unit of each sensor channel; temperature and humidity edges are
//! signed so that readings below a band deviate meaningfully instead of
//! wrapping.

// ===== TEMPERATURE BANDS =====

/// Lower edge of the excellent temperature band (°C).
///
/// Readings inside [18, 21] score the full 5 points; each whole degree of
/// deviation outside the band costs one point.
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const TEMP_EXCELLENT_LOW_C: i32 = 18;

/// Upper edge of the excellent temperature band (°C).
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const TEMP_EXCELLENT_HIGH_C: i32 = 21;

// ===== HUMIDITY BANDS =====

/// Lower edge of the excellent relative humidity band (% RH).
///
/// The comfort optimum for occupied indoor spaces.
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const HUMIDITY_EXCELLENT_LOW_PCT: i32 = 40;

/// Upper edge of the excellent relative humidity band (% RH).
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const HUMIDITY_EXCELLENT_HIGH_PCT: i32 = 60;

/// Width of each humidity rating ring around the excellent band (% RH).
///
/// One point is lost per ring: <40/>60 is good, <30/>70 fair, <20/>80 poor,
/// <10/>90 inadequate.
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const HUMIDITY_RING_WIDTH_PCT: i32 = 10;

// ===== CO2 BANDS =====

/// Highest CO2 concentration rated excellent (ppm).
///
/// Near-outdoor air; unoccupied or very well ventilated spaces.
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const CO2_EXCELLENT_MAX_PPM: u32 = 600;

/// Highest CO2 concentration rated good (ppm).
///
/// The IAQUK table prose puts this edge at 1000 ppm; fielded monitors
/// evaluate 800 ppm. See the `scales::co2` module docs for the discrepancy.
pub const CO2_GOOD_MAX_PPM: u32 = 800;

/// Highest CO2 concentration rated fair (ppm).
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const CO2_FAIR_MAX_PPM: u32 = 1500;

/// Highest CO2 concentration rated poor (ppm).
///
/// Above this, ventilation is inadequate for occupancy.
///
/// Source: IAQUK Rating Index (iaquk.org.uk)
pub const CO2_POOR_MAX_PPM: u32 = 1800;

// ===== TVOC BANDS =====

/// Highest TVOC concentration rated excellent (ppb).
///
/// Hygienically unremarkable air (0-0.065 ppm).
///
/// Source: Umweltbundesamt TVOC guideline, Bundesgesundheitsblatt
/// 50:990-1005 (2007), DOI 10.1007/s00103-007-0290-y
pub const TVOC_EXCELLENT_MAX_PPB: u32 = 65;

/// Highest TVOC concentration rated good (ppb).
///
/// Source: Umweltbundesamt TVOC guideline (2007)
pub const TVOC_GOOD_MAX_PPB: u32 = 220;

/// Highest TVOC concentration rated fair (ppb).
///
/// Source: Umweltbundesamt TVOC guideline (2007)
pub const TVOC_FAIR_MAX_PPB: u32 = 660;

/// Highest TVOC concentration rated poor (ppb).
///
/// Above this the air is considered hygienically objectionable.
///
/// Source: Umweltbundesamt TVOC guideline (2007)
pub const TVOC_POOR_MAX_PPB: u32 = 2200;

//! Air Quality Index computation
//!
//! This crate computes the AQI from concentrations of five pollutants:
//! - PM2.5 (µg/m³)
//! - O3 (ppb)
//! - CO (ppm)
//! - SO2 (ppb)
//! - NO2 (ppb)
//!
//! Each concentration is turned into a sub-index by piecewise-linear
//! interpolation over the pollutant's breakpoint table. The overall AQI is the
//! largest sub-index, and it falls into one of six health categories.
//!
//! # Example
//!
//! ```rust
//! use aqi_engine::{classify, compute_overall_aqi, Pollutant};
//!
//! let result = compute_overall_aqi(75.0, 50.0, 8.0, 30.0, 60.0).unwrap();
//! assert_eq!(result.aqi, 161);
//! assert_eq!(result.dominant_pollutant(), Pollutant::Pm25);
//!
//! let category = classify(result.aqi.into()).unwrap();
//! println!("{}: {}", category.label(), category.implication());
//! ```

pub mod breakpoints;
pub mod category;
pub mod config;
pub mod engine;
pub mod error;
pub mod pollutant;
pub mod reading;
pub mod scenario;

pub use breakpoints::{Breakpoint, BreakpointTable};
pub use category::{AqiCategory, classify};
pub use config::EngineConfig;
pub use engine::{AqiEngine, OverallAqi, SubIndices, standard_engine};
pub use error::{AqiError, Result};
pub use pollutant::{Pollutant, Unit};
pub use reading::{PollutantReading, Readings};
pub use scenario::Scenario;

/// Main entry point: compute the overall AQI using the built-in tables
///
/// # Arguments
///
/// * `pm25` - PM2.5 in µg/m³
/// * `o3` - O3 in ppb
/// * `co` - CO in ppm
/// * `so2` - SO2 in ppb
/// * `no2` - NO2 in ppb
///
/// # Returns
///
/// * `Ok(OverallAqi)` - Overall AQI, every sub-index and the category
/// * `Err(AqiError)` - Computation failed
///
/// # Example
///
/// ```rust
/// use aqi_engine::{compute_overall_aqi, AqiCategory};
///
/// let result = compute_overall_aqi(8.0, 40.0, 0.5, 2.0, 5.0).unwrap();
/// assert_eq!(result.aqi, 37);
/// assert_eq!(result.category, AqiCategory::Good);
/// ```
///
/// # Errors
///
/// * `AqiError::InvalidConcentration` - A concentration is negative or NaN
/// * `AqiError::InvalidBreakpointTable` - A built-in table is malformed
pub fn compute_overall_aqi(pm25: f64, o3: f64, co: f64, so2: f64, no2: f64) -> Result<OverallAqi> {
    standard_engine()?.compute(&Readings::new(pm25, o3, co, so2, no2))
}

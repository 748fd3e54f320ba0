//! Error types for AQI computation

use thiserror::Error;

use crate::pollutant::Pollutant;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AqiError>;

/// Errors that can occur while computing or classifying an AQI
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Concentration is negative or not a number
    #[error("Invalid {pollutant} concentration: {value}")]
    InvalidConcentration { pollutant: Pollutant, value: f64 },

    /// Breakpoint table is empty or its tiers are out of order
    #[error("Invalid breakpoint table: {0}")]
    InvalidBreakpointTable(String),

    /// AQI value outside every category range
    #[error("Unclassifiable AQI value: {0}")]
    UnclassifiableAqi(i32),

    /// Pollutant identifier not recognized
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),

    /// Configuration text could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AqiError {
    /// Create a new `InvalidConcentration` error
    #[must_use]
    pub fn invalid_concentration(pollutant: Pollutant, value: f64) -> Self {
        Self::InvalidConcentration { pollutant, value }
    }

    /// Create a new `InvalidBreakpointTable` error for a specific tier
    #[must_use]
    pub fn invalid_tier(tier: usize, reason: &str) -> Self {
        Self::InvalidBreakpointTable(format!("tier {tier}: {reason}"))
    }
}

impl From<serde_json::Error> for AqiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

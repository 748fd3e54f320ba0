//! Pollutant identifiers and their measurement units

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AqiError;

/// Concentration unit a pollutant is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Micrograms per cubic metre
    MicrogramsPerCubicMeter,
    /// Parts per million
    PartsPerMillion,
    /// Parts per billion
    PartsPerBillion,
}

impl Unit {
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::MicrogramsPerCubicMeter => "µg/m³",
            Self::PartsPerMillion => "ppm",
            Self::PartsPerBillion => "ppb",
        }
    }
}

/// The five pollutants that contribute to the AQI
///
/// Each pollutant has a fixed unit; concentrations are always given in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    /// Fine particulate matter (µg/m³)
    #[serde(rename = "PM2.5")]
    Pm25,
    /// Ozone (ppb)
    #[serde(rename = "O3")]
    O3,
    /// Carbon monoxide (ppm)
    #[serde(rename = "CO")]
    Co,
    /// Sulfur dioxide (ppb)
    #[serde(rename = "SO2")]
    So2,
    /// Nitrogen dioxide (ppb)
    #[serde(rename = "NO2")]
    No2,
}

impl Pollutant {
    /// All pollutants in canonical order
    pub const ALL: [Self; 5] = [Self::Pm25, Self::O3, Self::Co, Self::So2, Self::No2];

    /// Display label, e.g. `PM2.5`
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::O3 => "O3",
            Self::Co => "CO",
            Self::So2 => "SO2",
            Self::No2 => "NO2",
        }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        match self {
            Self::Pm25 => Unit::MicrogramsPerCubicMeter,
            Self::Co => Unit::PartsPerMillion,
            Self::O3 | Self::So2 | Self::No2 => Unit::PartsPerBillion,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pollutant {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "PM2.5", "pm25", "pm2_5" and the like
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '.' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pm25" => Ok(Self::Pm25),
            "o3" => Ok(Self::O3),
            "co" => Ok(Self::Co),
            "so2" => Ok(Self::So2),
            "no2" => Ok(Self::No2),
            _ => Err(AqiError::UnknownPollutant(s.to_string())),
        }
    }
}

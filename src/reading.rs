//! Pollutant concentration inputs

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::pollutant::Pollutant;

/// A single concentration in the pollutant's native unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantReading {
    pollutant: Pollutant,
    concentration: f64,
}

impl PollutantReading {
    /// Create a reading, rejecting negative or NaN concentrations
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConcentration` - Concentration is negative or NaN
    pub fn new(pollutant: Pollutant, concentration: f64) -> Result<Self> {
        validate_concentration(pollutant, concentration)?;
        Ok(Self {
            pollutant,
            concentration,
        })
    }

    #[must_use]
    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    #[must_use]
    pub fn concentration(&self) -> f64 {
        self.concentration
    }
}

/// Concentrations for all five pollutants
///
/// Units: PM2.5 in µg/m³, CO in ppm, O3/SO2/NO2 in ppb.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Readings {
    pub pm25: f64,
    pub o3: f64,
    pub co: f64,
    pub so2: f64,
    pub no2: f64,
}

impl Readings {
    #[must_use]
    pub const fn new(pm25: f64, o3: f64, co: f64, so2: f64, no2: f64) -> Self {
        Self {
            pm25,
            o3,
            co,
            so2,
            no2,
        }
    }

    /// Concentration for one pollutant
    #[must_use]
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
        }
    }

    /// Iterate `(pollutant, concentration)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Validate every concentration
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConcentration` - First pollutant with a negative or NaN value
    pub fn validate(&self) -> Result<()> {
        self.iter()
            .try_for_each(|(pollutant, value)| validate_concentration(pollutant, value))
    }
}

impl From<&[PollutantReading]> for Readings {
    /// Later readings for the same pollutant override earlier ones; missing
    /// pollutants read as zero.
    fn from(readings: &[PollutantReading]) -> Self {
        let mut out = Self::default();
        for reading in readings {
            let slot = match reading.pollutant {
                Pollutant::Pm25 => &mut out.pm25,
                Pollutant::O3 => &mut out.o3,
                Pollutant::Co => &mut out.co,
                Pollutant::So2 => &mut out.so2,
                Pollutant::No2 => &mut out.no2,
            };
            *slot = reading.concentration;
        }
        out
    }
}

pub(crate) fn validate_concentration(pollutant: Pollutant, value: f64) -> Result<()> {
    // Also catches NaN
    if value >= 0.0 {
        Ok(())
    } else {
        tracing::warn!(%pollutant, value, "rejecting invalid concentration");
        Err(AqiError::invalid_concentration(pollutant, value))
    }
}

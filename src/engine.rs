//! Sub-index computation and overall AQI aggregation

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::breakpoints::BreakpointTable;
use crate::category::AqiCategory;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::pollutant::Pollutant;
use crate::reading::{Readings, validate_concentration};

/// Per-pollutant sub-indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubIndices {
    pub pm25: u16,
    pub o3: u16,
    pub co: u16,
    pub so2: u16,
    pub no2: u16,
}

impl SubIndices {
    #[must_use]
    pub fn get(&self, pollutant: Pollutant) -> u16 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
        }
    }

    /// Iterate `(pollutant, sub-index)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, u16)> + '_ {
        Pollutant::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Largest sub-index
    #[must_use]
    pub fn max(&self) -> u16 {
        self.iter().map(|(_, index)| index).max().unwrap_or(0)
    }

    /// Pollutant with the largest sub-index, first in canonical order on ties
    #[must_use]
    pub fn dominant(&self) -> Pollutant {
        let max = self.max();
        self.iter()
            .find(|&(_, index)| index == max)
            .map_or(Pollutant::Pm25, |(pollutant, _)| pollutant)
    }

    /// Pollutants ordered by contribution, highest first
    #[must_use]
    pub fn ranked(&self) -> Vec<(Pollutant, u16)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // Stable sort keeps canonical order among equal sub-indices
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    fn set(&mut self, pollutant: Pollutant, index: u16) {
        let slot = match pollutant {
            Pollutant::Pm25 => &mut self.pm25,
            Pollutant::O3 => &mut self.o3,
            Pollutant::Co => &mut self.co,
            Pollutant::So2 => &mut self.so2,
            Pollutant::No2 => &mut self.no2,
        };
        *slot = index;
    }
}

/// Result of an AQI computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallAqi {
    /// Maximum of all sub-indices
    pub aqi: u16,
    pub sub_indices: SubIndices,
    pub category: AqiCategory,
}

impl OverallAqi {
    /// Pollutant that determined the overall AQI
    #[must_use]
    pub fn dominant_pollutant(&self) -> Pollutant {
        self.sub_indices.dominant()
    }
}

/// Breakpoint tables for all five pollutants
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiEngine {
    pm25: BreakpointTable,
    o3: BreakpointTable,
    co: BreakpointTable,
    so2: BreakpointTable,
    no2: BreakpointTable,
}

impl AqiEngine {
    /// Engine using the built-in tables
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidBreakpointTable` - A built-in table is malformed
    pub fn standard() -> Result<Self> {
        Ok(Self {
            pm25: BreakpointTable::standard(Pollutant::Pm25)?,
            o3: BreakpointTable::standard(Pollutant::O3)?,
            co: BreakpointTable::standard(Pollutant::Co)?,
            so2: BreakpointTable::standard(Pollutant::So2)?,
            no2: BreakpointTable::standard(Pollutant::No2)?,
        })
    }

    /// Engine using tables loaded from configuration
    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            pm25: config.pm25,
            o3: config.o3,
            co: config.co,
            so2: config.so2,
            no2: config.no2,
        }
    }

    #[must_use]
    pub fn table(&self, pollutant: Pollutant) -> &BreakpointTable {
        match pollutant {
            Pollutant::Pm25 => &self.pm25,
            Pollutant::O3 => &self.o3,
            Pollutant::Co => &self.co,
            Pollutant::So2 => &self.so2,
            Pollutant::No2 => &self.no2,
        }
    }

    /// Sub-index for a single pollutant
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConcentration` - Concentration is negative or NaN
    pub fn sub_index(&self, pollutant: Pollutant, concentration: f64) -> Result<u16> {
        validate_concentration(pollutant, concentration)?;

        let table = self.table(pollutant);
        if concentration > table.max_concentration() {
            warn!(
                %pollutant,
                concentration,
                max = table.max_concentration(),
                "concentration above top tier, clamping sub-index"
            );
        }

        let index = table.interpolate(concentration);
        trace!(%pollutant, concentration, index, "sub-index");
        Ok(index)
    }

    /// Compute every sub-index, the overall AQI and its category
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConcentration` - A concentration is negative or NaN
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn compute(&self, readings: &Readings) -> Result<OverallAqi> {
        let mut sub_indices = SubIndices::default();
        for (pollutant, concentration) in readings.iter() {
            sub_indices.set(pollutant, self.sub_index(pollutant, concentration)?);
        }

        let aqi = sub_indices.max();
        let category = AqiCategory::for_index(aqi);
        debug!(aqi, dominant = %sub_indices.dominant(), %category, "computed AQI");

        Ok(OverallAqi {
            aqi,
            sub_indices,
            category,
        })
    }
}

/// Process-wide engine over the built-in tables, validated on first use
///
/// # Errors
///
/// * `AqiError::InvalidBreakpointTable` - A built-in table is malformed
pub fn standard_engine() -> Result<&'static AqiEngine> {
    static STANDARD: OnceLock<Result<AqiEngine>> = OnceLock::new();
    STANDARD
        .get_or_init(AqiEngine::standard)
        .as_ref()
        .map_err(Clone::clone)
}

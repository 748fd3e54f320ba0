//! Loadable breakpoint table configuration
//!
//! The built-in tables can be dumped to JSON, edited (for example to follow a
//! revised standard) and loaded back:
//!
//! ```rust
//! use aqi_engine::{AqiEngine, EngineConfig, Pollutant};
//!
//! let json = EngineConfig::standard().unwrap().to_json().unwrap();
//! let engine = AqiEngine::from_config(EngineConfig::from_json(&json).unwrap());
//! assert_eq!(engine.sub_index(Pollutant::Pm25, 12.0).unwrap(), 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::breakpoints::BreakpointTable;
use crate::error::Result;
use crate::pollutant::Pollutant;

/// One breakpoint table per pollutant
///
/// Every table is validated while deserializing, so a parsed config is always
/// usable by [`crate::AqiEngine::from_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub pm25: BreakpointTable,
    pub o3: BreakpointTable,
    pub co: BreakpointTable,
    pub so2: BreakpointTable,
    pub no2: BreakpointTable,
}

impl EngineConfig {
    /// The built-in tables
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

    /// Parse a JSON config
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - Malformed JSON, a missing table, or a table
    ///   violating the breakpoint ordering rules
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        tracing::debug!("loaded breakpoint configuration");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - Serialization failed
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

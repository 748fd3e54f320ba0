//! Preset pollution scenarios
//!
//! Each scenario is a fixed set of five concentrations that a front end can
//! offer as a starting point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reading::Readings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scenario {
    /// City centre during the morning rush
    BusyMorning,
    /// Clean mountain air
    CleanMountains,
    /// Industrial area at night
    IndustrialNight,
    /// Neutral starting values for manual entry
    #[default]
    Manual,
}

impl Scenario {
    pub const ALL: [Self; 4] = [
        Self::BusyMorning,
        Self::CleanMountains,
        Self::IndustrialNight,
        Self::Manual,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BusyMorning => "City (Busy Morning)",
            Self::CleanMountains => "Mountains (Clean)",
            Self::IndustrialNight => "Industrial Area (Night)",
            Self::Manual => "Manual",
        }
    }

    #[must_use]
    pub const fn readings(&self) -> Readings {
        match self {
            Self::BusyMorning => Readings::new(75.0, 50.0, 8.0, 30.0, 60.0),
            Self::CleanMountains => Readings::new(8.0, 40.0, 0.5, 2.0, 5.0),
            Self::IndustrialNight => Readings::new(120.0, 30.0, 10.0, 80.0, 90.0),
            Self::Manual => Readings::new(15.0, 70.0, 2.0, 10.0, 20.0),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AqiCategory;
    use crate::engine::standard_engine;
    use rstest::rstest;

    #[rstest]
    #[case(Scenario::BusyMorning, 161, AqiCategory::Unhealthy)]
    #[case(Scenario::CleanMountains, 37, AqiCategory::Good)]
    #[case(Scenario::IndustrialNight, 184, AqiCategory::Unhealthy)]
    #[case(Scenario::Manual, 100, AqiCategory::Moderate)]
    fn scenario_results(
        #[case] scenario: Scenario,
        #[case] aqi: u16,
        #[case] category: AqiCategory,
    ) {
        let result = standard_engine()
            .unwrap()
            .compute(&scenario.readings())
            .unwrap();
        assert_eq!(result.aqi, aqi);
        assert_eq!(result.category, category);
    }

    #[test]
    fn presets_are_valid_readings() {
        for scenario in Scenario::ALL {
            assert!(scenario.readings().validate().is_ok(), "{scenario}");
        }
    }

    #[test]
    fn manual_is_default() {
        assert_eq!(Scenario::default(), Scenario::Manual);
    }
}

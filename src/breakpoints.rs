//! Breakpoint tables and piecewise-linear sub-index interpolation
//!
//! Each pollutant maps concentrations to AQI values through an ordered list of
//! tiers. Within a tier the index is interpolated linearly:
//!
//! ```text
//! I = (C - C_low) / (C_high - C_low) * (I_high - I_low) + I_low
//! ```
//!
//! Results are rounded half-to-even. Concentrations below the first tier clamp to
//! its `index_low`, concentrations above the last tier clamp to its `index_high`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::pollutant::Pollutant;

/// One tier of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Lowest concentration in this tier (inclusive)
    pub concentration_low: f64,
    /// Highest concentration in this tier (inclusive)
    pub concentration_high: f64,
    /// AQI at `concentration_low`
    pub index_low: u16,
    /// AQI at `concentration_high`
    pub index_high: u16,
}

impl Breakpoint {
    #[must_use]
    pub const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: u16,
        index_high: u16,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// Interpolate a concentration known to lie within this tier
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn interpolate(&self, concentration: f64) -> u16 {
        let width = self.concentration_high - self.concentration_low;
        if width <= 0.0 {
            // Zero-width tier
            return self.index_low;
        }

        let span = f64::from(self.index_high - self.index_low);
        let index =
            (concentration - self.concentration_low) / width * span + f64::from(self.index_low);

        // Stays within [index_low, index_high], so the cast cannot overflow
        index.round_ties_even() as u16
    }
}

/// PM2.5, 24-hour, µg/m³
pub const PM25_TIERS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 500.4, 301, 500),
];

/// O3, ppb
pub const O3_TIERS: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 70.0, 51, 100),
    Breakpoint::new(71.0, 85.0, 101, 150),
    Breakpoint::new(86.0, 105.0, 151, 200),
    Breakpoint::new(106.0, 200.0, 201, 300),
];

/// CO, ppm
pub const CO_TIERS: [Breakpoint; 4] = [
    Breakpoint::new(0.0, 4.4, 0, 50),
    Breakpoint::new(4.5, 9.4, 51, 100),
    Breakpoint::new(9.5, 12.4, 101, 150),
    Breakpoint::new(12.5, 15.4, 151, 200),
];

/// SO2, ppb
pub const SO2_TIERS: [Breakpoint; 4] = [
    Breakpoint::new(0.0, 35.0, 0, 50),
    Breakpoint::new(36.0, 75.0, 51, 100),
    Breakpoint::new(76.0, 185.0, 101, 150),
    Breakpoint::new(186.0, 304.0, 151, 200),
];

/// NO2, ppb
pub const NO2_TIERS: [Breakpoint; 4] = [
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
];

/// Built-in tiers for a pollutant
#[must_use]
pub fn standard_tiers(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25_TIERS,
        Pollutant::O3 => &O3_TIERS,
        Pollutant::Co => &CO_TIERS,
        Pollutant::So2 => &SO2_TIERS,
        Pollutant::No2 => &NO2_TIERS,
    }
}

/// Validated, ordered breakpoint tiers for one pollutant
///
/// Construction checks that the table is non-empty, every tier has
/// `concentration_low <= concentration_high` and `index_low <= index_high`, and
/// tiers are strictly increasing without overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointTable {
    tiers: Cow<'static, [Breakpoint]>,
}

impl BreakpointTable {
    /// Build a table from tiers, validating ordering invariants
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidBreakpointTable` - Empty table or tiers out of order
    pub fn new(tiers: impl Into<Cow<'static, [Breakpoint]>>) -> Result<Self> {
        let tiers = tiers.into();
        validate(&tiers)?;
        Ok(Self { tiers })
    }

    /// The built-in table for a pollutant
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidBreakpointTable` - The built-in tiers are malformed
    pub fn standard(pollutant: Pollutant) -> Result<Self> {
        Self::new(standard_tiers(pollutant))
    }

    #[must_use]
    pub fn tiers(&self) -> &[Breakpoint] {
        &self.tiers
    }

    /// Highest concentration covered by the table
    #[must_use]
    pub fn max_concentration(&self) -> f64 {
        self.tiers.last().map_or(0.0, |t| t.concentration_high)
    }

    /// Highest index the table can produce
    #[must_use]
    pub fn max_index(&self) -> u16 {
        self.tiers.last().map_or(0, |t| t.index_high)
    }

    /// Compute the sub-index for a concentration
    ///
    /// The concentration is not range-checked here; callers validate it first
    /// (see [`crate::AqiEngine::sub_index`]). Values below the first tier clamp
    /// to its floor, values above the last tier clamp to its ceiling, and values
    /// falling in a gap between two tiers take the lower tier's `index_high`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aqi_engine::{BreakpointTable, Pollutant};
    ///
    /// let table = BreakpointTable::standard(Pollutant::Pm25).unwrap();
    /// assert_eq!(table.interpolate(12.0), 50);
    /// assert_eq!(table.interpolate(12.1), 51);
    /// assert_eq!(table.interpolate(1000.0), 500);
    /// ```
    #[must_use]
    pub fn interpolate(&self, concentration: f64) -> u16 {
        let mut previous: Option<&Breakpoint> = None;

        for tier in self.tiers.iter() {
            if concentration < tier.concentration_low {
                return previous.map_or(tier.index_low, |p| p.index_high);
            }
            if concentration <= tier.concentration_high {
                return tier.interpolate(concentration);
            }
            previous = Some(tier);
        }

        self.max_index()
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointTable {
    type Error = AqiError;

    fn try_from(tiers: Vec<Breakpoint>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<BreakpointTable> for Vec<Breakpoint> {
    fn from(table: BreakpointTable) -> Self {
        table.tiers.into_owned()
    }
}

fn validate(tiers: &[Breakpoint]) -> Result<()> {
    if tiers.is_empty() {
        return Err(AqiError::InvalidBreakpointTable("table has no tiers".into()));
    }

    for (i, tier) in tiers.iter().enumerate() {
        let bounds_valid = tier.concentration_low.is_finite()
            && tier.concentration_high.is_finite()
            && tier.concentration_low >= 0.0;
        if !bounds_valid {
            return Err(AqiError::invalid_tier(
                i,
                "concentration bounds must be finite and non-negative",
            ));
        }
        if tier.concentration_low > tier.concentration_high {
            return Err(AqiError::invalid_tier(
                i,
                "concentration_low exceeds concentration_high",
            ));
        }
        if tier.index_low > tier.index_high {
            return Err(AqiError::invalid_tier(i, "index_low exceeds index_high"));
        }

        if let Some(prev) = i.checked_sub(1).map(|p| &tiers[p]) {
            if tier.concentration_low <= prev.concentration_high {
                return Err(AqiError::invalid_tier(i, "overlaps previous tier"));
            }
            if tier.index_low < prev.index_high {
                return Err(AqiError::invalid_tier(i, "index range decreases"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pm25() -> BreakpointTable {
        BreakpointTable::standard(Pollutant::Pm25).unwrap()
    }

    #[test]
    fn standard_tables_are_valid() {
        for pollutant in Pollutant::ALL {
            let table = BreakpointTable::standard(pollutant).unwrap();
            assert!(!table.tiers().is_empty());
        }
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(6.0, 25)]
    #[case(12.0, 50)]
    #[case(12.1, 51)]
    #[case(35.4, 100)]
    #[case(35.5, 101)]
    #[case(55.4, 150)]
    #[case(55.5, 151)]
    #[case(75.0, 161)]
    #[case(150.4, 200)]
    #[case(150.5, 201)]
    #[case(250.4, 300)]
    #[case(250.5, 301)]
    #[case(500.4, 500)]
    fn pm25_cases(#[case] concentration: f64, #[case] expected: u16) {
        assert_eq!(pm25().interpolate(concentration), expected);
    }

    #[rstest]
    #[case(Pollutant::Pm25, 1000.0, 500)]
    #[case(Pollutant::Pm25, f64::INFINITY, 500)]
    #[case(Pollutant::O3, 201.0, 300)]
    #[case(Pollutant::Co, 50.0, 200)]
    #[case(Pollutant::So2, 305.0, 200)]
    #[case(Pollutant::No2, 2000.0, 200)]
    fn ceiling_clamp(#[case] pollutant: Pollutant, #[case] concentration: f64, #[case] expected: u16) {
        let table = BreakpointTable::standard(pollutant).unwrap();
        assert_eq!(table.interpolate(concentration), expected);
        assert_eq!(table.max_index(), expected);
    }

    #[rstest]
    #[case(Pollutant::O3, 27.0, 25)]
    #[case(Pollutant::O3, 54.0, 50)]
    #[case(Pollutant::O3, 55.0, 51)]
    #[case(Pollutant::O3, 70.0, 100)]
    #[case(Pollutant::Co, 4.4, 50)]
    #[case(Pollutant::Co, 4.5, 51)]
    #[case(Pollutant::So2, 35.0, 50)]
    #[case(Pollutant::So2, 36.0, 51)]
    #[case(Pollutant::No2, 100.0, 100)]
    #[case(Pollutant::No2, 101.0, 101)]
    fn tier_edges(#[case] pollutant: Pollutant, #[case] concentration: f64, #[case] expected: u16) {
        let table = BreakpointTable::standard(pollutant).unwrap();
        assert_eq!(table.interpolate(concentration), expected);
    }

    #[rstest]
    #[case(Pollutant::Pm25, 12.05, 50)]
    #[case(Pollutant::O3, 54.5, 50)]
    #[case(Pollutant::Co, 9.45, 100)]
    #[case(Pollutant::No2, 360.5, 150)]
    fn gap_between_tiers_takes_lower_ceiling(
        #[case] pollutant: Pollutant,
        #[case] concentration: f64,
        #[case] expected: u16,
    ) {
        let table = BreakpointTable::standard(pollutant).unwrap();
        assert_eq!(table.interpolate(concentration), expected);
    }

    #[rstest]
    #[case(1.0, 2)] // 2.5 -> 2
    #[case(3.0, 8)] // 7.5 -> 8
    #[case(2.0, 5)]
    fn rounds_half_to_even(#[case] concentration: f64, #[case] expected: u16) {
        let table = BreakpointTable::new(vec![Breakpoint::new(0.0, 4.0, 0, 10)]).unwrap();
        assert_eq!(table.interpolate(concentration), expected);
    }

    #[test]
    fn floor_clamp_below_first_tier() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(10.0, 20.0, 5, 50),
            Breakpoint::new(21.0, 40.0, 51, 100),
        ])
        .unwrap();
        assert_eq!(table.interpolate(0.0), 5);
        assert_eq!(table.interpolate(9.99), 5);
        assert_eq!(table.interpolate(10.0), 5);
    }

    #[test]
    fn zero_width_tier_returns_index_low() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(20.0, 20.0, 60, 80),
        ])
        .unwrap();
        assert_eq!(table.interpolate(20.0), 60);
        assert_eq!(table.interpolate(25.0), 80);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::inverted_concentration(vec![Breakpoint::new(10.0, 5.0, 0, 50)])]
    #[case::inverted_index(vec![Breakpoint::new(0.0, 5.0, 50, 0)])]
    #[case::negative_bound(vec![Breakpoint::new(-1.0, 5.0, 0, 50)])]
    #[case::nan_bound(vec![Breakpoint::new(0.0, f64::NAN, 0, 50)])]
    #[case::overlapping(vec![
        Breakpoint::new(0.0, 10.0, 0, 50),
        Breakpoint::new(10.0, 20.0, 51, 100),
    ])]
    #[case::decreasing_index(vec![
        Breakpoint::new(0.0, 10.0, 0, 50),
        Breakpoint::new(11.0, 20.0, 40, 100),
    ])]
    fn invalid_tables(#[case] tiers: Vec<Breakpoint>) {
        assert!(matches!(
            BreakpointTable::new(tiers),
            Err(AqiError::InvalidBreakpointTable(_))
        ));
    }

    #[test]
    fn deserialize_validates() {
        let ok = r#"[{"concentration_low":0.0,"concentration_high":10.0,"index_low":0,"index_high":50}]"#;
        let table: BreakpointTable = serde_json::from_str(ok).unwrap();
        assert_eq!(table.interpolate(5.0), 25);

        let bad = r#"[{"concentration_low":10.0,"concentration_high":0.0,"index_low":0,"index_high":50}]"#;
        let err = serde_json::from_str::<BreakpointTable>(bad).unwrap_err();
        assert!(err.to_string().contains("concentration_low exceeds concentration_high"));
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_pollutant() -> impl Strategy<Value = Pollutant> {
        prop::sample::select(Pollutant::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn sub_index_is_monotonic(
            pollutant in any_pollutant(),
            a in 0.0f64..800.0,
            b in 0.0f64..800.0,
        ) {
            let table = BreakpointTable::standard(pollutant).unwrap();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(table.interpolate(low) <= table.interpolate(high));
        }

        #[test]
        fn sub_index_never_exceeds_top_tier(pollutant in any_pollutant(), c in 0.0f64..1e9) {
            let table = BreakpointTable::standard(pollutant).unwrap();
            prop_assert!(table.interpolate(c) <= table.max_index());
        }
    }
}

//! AQI health categories
//!
//! Six fixed, non-overlapping bands: `[0,50]`, `[51,100]`, `[101,150]`,
//! `[151,200]`, `[201,300]` and `[301,∞)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};

/// Severity tier of an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    /// 0 to 50
    Good,
    /// 51 to 100
    Moderate,
    /// 101 to 150
    UnhealthyForSensitiveGroups,
    /// 151 to 200
    Unhealthy,
    /// 201 to 300
    VeryUnhealthy,
    /// 301 and above
    Hazardous,
}

impl AqiCategory {
    /// All categories from least to most severe
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Category for a computed AQI; every `u16` has one
    #[must_use]
    pub fn for_index(aqi: u16) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Inclusive AQI range; `None` as the upper bound means open-ended
    #[must_use]
    pub fn range(&self) -> (u16, Option<u16>) {
        match self {
            Self::Good => (0, Some(50)),
            Self::Moderate => (51, Some(100)),
            Self::UnhealthyForSensitiveGroups => (101, Some(150)),
            Self::Unhealthy => (151, Some(200)),
            Self::VeryUnhealthy => (201, Some(300)),
            Self::Hazardous => (301, None),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// General health implication of this category
    #[must_use]
    pub fn implication(&self) -> &'static str {
        match self {
            Self::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            Self::Moderate => {
                "Air quality is acceptable; however, some pollutants may be a moderate health \
                 concern for a very small number of people who are unusually sensitive to air \
                 pollution."
            }
            Self::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. The general public \
                 is less likely to be affected."
            }
            Self::Unhealthy => {
                "Everyone may begin to experience health effects; members of sensitive groups \
                 may experience more serious health effects."
            }
            Self::VeryUnhealthy => {
                "Health alert: everyone may experience more serious health effects."
            }
            Self::Hazardous => {
                "Health warning of emergency conditions: everyone is more likely to be affected."
            }
        }
    }

    /// Severity color tag used when rendering the category
    #[must_use]
    pub fn severity_tag(&self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Moderate => "gold",
            Self::UnhealthyForSensitiveGroups => "orange",
            Self::Unhealthy => "red",
            Self::VeryUnhealthy => "rebeccapurple",
            Self::Hazardous => "darkred",
        }
    }

    /// Suggested action for people outdoors
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Good => "Air quality is very good. Enjoy outdoor activities without restriction.",
            Self::Moderate => {
                "Unusually sensitive people (children, older adults, people with asthma) should \
                 consider reducing prolonged or heavy outdoor exertion."
            }
            Self::UnhealthyForSensitiveGroups => {
                "People with heart or lung disease, children and older adults should limit \
                 outdoor exertion. Wearing a mask outdoors is advised."
            }
            Self::Unhealthy => {
                "Everyone should limit prolonged or heavy outdoor exertion; sensitive groups \
                 should avoid it. Wear an N95/KN95 mask outside and keep windows closed."
            }
            Self::VeryUnhealthy => {
                "Everyone should avoid outdoor exertion. Stay indoors with windows and doors \
                 closed and consider running an air purifier."
            }
            Self::Hazardous => {
                "Stay indoors and avoid all outdoor activity. Shelter somewhere with filtered \
                 air and prepare an emergency plan."
            }
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an AQI value that may come from outside the engine
///
/// Negative values belong to no category and are rejected instead of being
/// clamped into `Good`.
///
/// # Errors
///
/// * `AqiError::UnclassifiableAqi` - `aqi` is negative
pub fn classify(aqi: i32) -> Result<AqiCategory> {
    if aqi < 0 {
        tracing::warn!(aqi, "rejecting negative AQI");
        return Err(AqiError::UnclassifiableAqi(aqi));
    }

    Ok(u16::try_from(aqi).map_or(AqiCategory::Hazardous, AqiCategory::for_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Good")]
    #[case(50, "Good")]
    #[case(51, "Moderate")]
    #[case(100, "Moderate")]
    #[case(101, "Unhealthy for Sensitive Groups")]
    #[case(150, "Unhealthy for Sensitive Groups")]
    #[case(151, "Unhealthy")]
    #[case(200, "Unhealthy")]
    #[case(201, "Very Unhealthy")]
    #[case(300, "Very Unhealthy")]
    #[case(301, "Hazardous")]
    #[case(500, "Hazardous")]
    #[case(i32::MAX, "Hazardous")]
    fn classify_boundaries(#[case] aqi: i32, #[case] label: &str) {
        assert_eq!(classify(aqi).unwrap().label(), label);
    }

    #[rstest]
    #[case(-1)]
    #[case(i32::MIN)]
    fn classify_rejects_negative(#[case] aqi: i32) {
        assert_eq!(classify(aqi), Err(AqiError::UnclassifiableAqi(aqi)));
    }

    #[test]
    fn ranges_agree_with_for_index() {
        for category in AqiCategory::ALL {
            let (low, high) = category.range();
            assert_eq!(AqiCategory::for_index(low), category);
            if let Some(high) = high {
                assert_eq!(AqiCategory::for_index(high), category);
                assert_ne!(AqiCategory::for_index(high + 1), category);
            }
        }
    }

    #[test]
    fn ranges_are_contiguous() {
        for pair in AqiCategory::ALL.windows(2) {
            let (_, high) = pair[0].range();
            let (next_low, _) = pair[1].range();
            assert_eq!(high.map(|h| h + 1), Some(next_low));
        }
    }

    #[test]
    fn categories_order_by_severity() {
        assert!(AqiCategory::Good < AqiCategory::Hazardous);
        assert!(AqiCategory::Unhealthy > AqiCategory::UnhealthyForSensitiveGroups);
    }

    #[rstest]
    #[case(AqiCategory::Good, "green")]
    #[case(AqiCategory::Moderate, "gold")]
    #[case(AqiCategory::UnhealthyForSensitiveGroups, "orange")]
    #[case(AqiCategory::Unhealthy, "red")]
    #[case(AqiCategory::VeryUnhealthy, "rebeccapurple")]
    #[case(AqiCategory::Hazardous, "darkred")]
    fn severity_tags(#[case] category: AqiCategory, #[case] tag: &str) {
        assert_eq!(category.severity_tag(), tag);
    }

    #[test]
    fn implication_text() {
        assert_snapshot!(
            AqiCategory::VeryUnhealthy.implication(),
            @"Health alert: everyone may experience more serious health effects."
        );
        assert_eq!(AqiCategory::Hazardous.to_string(), "Hazardous");
    }
}

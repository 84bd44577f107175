// Air quality index severity tiers
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiTier {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Bands in ascending order with their inclusive bounds.
const BANDS: [(i64, i64, AqiTier); 6] = [
    (0, 50, AqiTier::Good),
    (51, 100, AqiTier::Moderate),
    (101, 150, AqiTier::UnhealthyForSensitiveGroups),
    (151, 200, AqiTier::Unhealthy),
    (201, 300, AqiTier::VeryUnhealthy),
    (301, 500, AqiTier::Hazardous),
];

/// Map an index value onto its tier.
///
/// Values that fall in no band (negative, above 500) are reported as
/// [`AqiTier::Hazardous`] rather than rejected.
pub fn classify(aqi: i64) -> AqiTier {
    BANDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&aqi))
        .map(|(_, _, tier)| *tier)
        .unwrap_or(AqiTier::Hazardous)
}

impl AqiTier {
    pub fn label(&self) -> &'static str {
        match self {
            AqiTier::Good => "Good",
            AqiTier::Moderate => "Moderate",
            AqiTier::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiTier::Unhealthy => "Unhealthy",
            AqiTier::VeryUnhealthy => "Very Unhealthy",
            AqiTier::Hazardous => "Hazardous",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AqiTier::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            AqiTier::Moderate => {
                "Air quality is acceptable. However, there may be a risk for some people."
            }
            AqiTier::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects."
            }
            AqiTier::Unhealthy => {
                "Some members of the general public may experience health effects."
            }
            AqiTier::VeryUnhealthy => {
                "Health alert: The risk of health effects is increased for everyone."
            }
            AqiTier::Hazardous => {
                "Health warning of emergency conditions; everyone is more likely to be affected."
            }
        }
    }

    /// Inclusive bounds of the band.
    pub fn range(&self) -> (i64, i64) {
        BANDS
            .iter()
            .find(|(_, _, tier)| tier == self)
            .map(|(low, high, _)| (*low, *high))
            .unwrap_or((301, 500))
    }
}

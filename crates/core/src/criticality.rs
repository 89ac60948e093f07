//! Component criticality tier.

use serde::{Deserialize, Serialize};

/// Qualitative importance of a component, driving safety-stock and
/// reorder-threshold policy.
///
/// Values outside `high|medium|low` deserialize to [`Criticality::Unrecognized`]
/// instead of failing; policy tables give that variant their documented
/// fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    High,
    Medium,
    Low,
    /// Any other tier. The raw string is not kept, so this serializes back as
    /// `"unrecognized"`. Only catalog data carries a criticality.
    #[serde(other)]
    Unrecognized,
}

impl Criticality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::High => "high",
            Criticality::Medium => "medium",
            Criticality::Low => "low",
            Criticality::Unrecognized => "unrecognized",
        }
    }
}

impl core::fmt::Display for Criticality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers_round_trip_as_lowercase() {
        for c in [Criticality::High, Criticality::Medium, Criticality::Low] {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
            let back: Criticality = serde_json::from_str(&json).unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn unknown_tier_degrades_instead_of_failing() {
        let c: Criticality = serde_json::from_str("\"mission-essential\"").unwrap();
        assert_eq!(c, Criticality::Unrecognized);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"unrecognized\"");
    }
}

//! Fixed-enum classifications shared by the context and the panel results.
//!
//! [`ScaleZone`] and [`CadenceLabel`] are also produced by the reasoning
//! service, so both parse leniently: unknown labels fall back to a safe
//! member instead of failing the whole round.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How aggressively the chair should prefer high-upside options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmbitionSetting {
    #[default]
    Safe,
    Bold,
    Ridiculous,
}

impl AmbitionSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbitionSetting::Safe => "SAFE",
            AmbitionSetting::Bold => "BOLD",
            AmbitionSetting::Ridiculous => "RIDICULOUS",
        }
    }

    /// The least ambitious scale zone the chair may settle on without
    /// stating a justification.
    pub fn minimum_zone(&self) -> ScaleZone {
        match self {
            AmbitionSetting::Safe => ScaleZone::Zone1Normal,
            AmbitionSetting::Bold => ScaleZone::Zone2Brave,
            AmbitionSetting::Ridiculous => ScaleZone::Zone3BreaksSystem,
        }
    }
}

impl std::fmt::Display for AmbitionSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AmbitionSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAFE" => Ok(AmbitionSetting::Safe),
            "BOLD" => Ok(AmbitionSetting::Bold),
            "RIDICULOUS" => Ok(AmbitionSetting::Ridiculous),
            other => Err(format!(
                "unknown ambition setting '{}' (expected SAFE, BOLD or RIDICULOUS)",
                other
            )),
        }
    }
}

/// How far an offer deviates from "normal".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleZone {
    Zone1Normal,
    Zone2Brave,
    Zone3BreaksSystem,
    #[default]
    NotApplicable,
}

impl ScaleZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleZone::Zone1Normal => "ZONE_1_NORMAL",
            ScaleZone::Zone2Brave => "ZONE_2_BRAVE",
            ScaleZone::Zone3BreaksSystem => "ZONE_3_BREAKS_SYSTEM",
            ScaleZone::NotApplicable => "NOT_APPLICABLE",
        }
    }

    /// Ordinal used for ambition comparisons; `None` for `NotApplicable`.
    pub fn rank(&self) -> Option<u8> {
        match self {
            ScaleZone::Zone1Normal => Some(1),
            ScaleZone::Zone2Brave => Some(2),
            ScaleZone::Zone3BreaksSystem => Some(3),
            ScaleZone::NotApplicable => None,
        }
    }

    /// Whether this zone is strictly safer than `other`.
    ///
    /// `NotApplicable` on either side never counts as safer.
    pub fn is_safer_than(&self, other: ScaleZone) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}

impl std::fmt::Display for ScaleZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScaleZone {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "ZONE_1_NORMAL" | "ZONE_1" => ScaleZone::Zone1Normal,
            "ZONE_2_BRAVE" | "ZONE_2" => ScaleZone::Zone2Brave,
            "ZONE_3_BREAKS_SYSTEM" | "ZONE_3" => ScaleZone::Zone3BreaksSystem,
            _ => ScaleZone::NotApplicable,
        })
    }
}

impl Serialize for ScaleZone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScaleZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

/// How frequently winners are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CadenceLabel {
    WinnerEveryHour,
    WinnerEveryDay,
    WinnerEveryWeek,
    InstantWin,
    GuaranteedEveryEntry,
    FinalDrawOnly,
    #[default]
    Unknown,
}

impl CadenceLabel {
    pub const ALL: [CadenceLabel; 7] = [
        CadenceLabel::WinnerEveryHour,
        CadenceLabel::WinnerEveryDay,
        CadenceLabel::WinnerEveryWeek,
        CadenceLabel::InstantWin,
        CadenceLabel::GuaranteedEveryEntry,
        CadenceLabel::FinalDrawOnly,
        CadenceLabel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CadenceLabel::WinnerEveryHour => "WINNER_EVERY_HOUR",
            CadenceLabel::WinnerEveryDay => "WINNER_EVERY_DAY",
            CadenceLabel::WinnerEveryWeek => "WINNER_EVERY_WEEK",
            CadenceLabel::InstantWin => "INSTANT_WIN",
            CadenceLabel::GuaranteedEveryEntry => "GUARANTEED_EVERY_ENTRY",
            CadenceLabel::FinalDrawOnly => "FINAL_DRAW_ONLY",
            CadenceLabel::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for CadenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CadenceLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        Ok(CadenceLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == normalized)
            .unwrap_or_default())
    }
}

impl Serialize for CadenceLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CadenceLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambition_minimum_zone() {
        assert_eq!(AmbitionSetting::Safe.minimum_zone(), ScaleZone::Zone1Normal);
        assert_eq!(AmbitionSetting::Bold.minimum_zone(), ScaleZone::Zone2Brave);
        assert_eq!(
            AmbitionSetting::Ridiculous.minimum_zone(),
            ScaleZone::Zone3BreaksSystem
        );
    }

    #[test]
    fn test_ambition_parse_is_strict() {
        assert_eq!("bold".parse::<AmbitionSetting>().unwrap(), AmbitionSetting::Bold);
        assert!("reckless".parse::<AmbitionSetting>().is_err());
    }

    #[test]
    fn test_ambition_serde_uppercase() {
        let json = serde_json::to_string(&AmbitionSetting::Ridiculous).unwrap();
        assert_eq!(json, "\"RIDICULOUS\"");
    }

    #[test]
    fn test_scale_zone_unknown_defaults_to_not_applicable() {
        let zone: ScaleZone = serde_json::from_str("\"ZONE_9_COSMIC\"").unwrap();
        assert_eq!(zone, ScaleZone::NotApplicable);
        let zone: ScaleZone = serde_json::from_str("\"zone_2_brave\"").unwrap();
        assert_eq!(zone, ScaleZone::Zone2Brave);
    }

    #[test]
    fn test_scale_zone_is_safer_than() {
        assert!(ScaleZone::Zone1Normal.is_safer_than(ScaleZone::Zone2Brave));
        assert!(!ScaleZone::Zone3BreaksSystem.is_safer_than(ScaleZone::Zone2Brave));
        assert!(!ScaleZone::NotApplicable.is_safer_than(ScaleZone::Zone2Brave));
        assert!(!ScaleZone::Zone1Normal.is_safer_than(ScaleZone::NotApplicable));
    }

    #[test]
    fn test_cadence_label_lenient_parse() {
        let label: CadenceLabel = "winner every day".parse().unwrap();
        assert_eq!(label, CadenceLabel::WinnerEveryDay);
        let label: CadenceLabel = "WINNER_EVERY_FORTNIGHT".parse().unwrap();
        assert_eq!(label, CadenceLabel::Unknown);
    }

    #[test]
    fn test_cadence_label_serialize() {
        let json = serde_json::to_string(&CadenceLabel::InstantWin).unwrap();
        assert_eq!(json, "\"INSTANT_WIN\"");
    }
}

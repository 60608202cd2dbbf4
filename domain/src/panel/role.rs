//! Specialist roles

use serde::{Deserialize, Serialize};

/// A specialist seat on the council.
///
/// The declaration order of [`SpecialistRole::ALL`] is the order results are
/// returned in, regardless of which reasoning call settles first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistRole {
    /// Value architecture: base value, thresholds, prize economics
    OfferIq,
    /// Hook and story: the idea a shopper repeats to a friend
    Creative,
    /// Shopper behaviour: entry friction, perceived odds, cadence
    Shopper,
    /// Retail and trade operations: execution in store and online
    Retail,
}

impl SpecialistRole {
    /// Default panel, in declared order.
    pub const ALL: [SpecialistRole; 4] = [
        SpecialistRole::OfferIq,
        SpecialistRole::Creative,
        SpecialistRole::Shopper,
        SpecialistRole::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistRole::OfferIq => "offer_iq",
            SpecialistRole::Creative => "creative",
            SpecialistRole::Shopper => "shopper",
            SpecialistRole::Retail => "retail",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialistRole::OfferIq => "OfferIQ",
            SpecialistRole::Creative => "Creative",
            SpecialistRole::Shopper => "Shopper",
            SpecialistRole::Retail => "Retail",
        }
    }

    /// Only the value specialist may restructure the offer itself.
    pub fn owns_offer_structure(&self) -> bool {
        matches!(self, SpecialistRole::OfferIq)
    }
}

impl std::fmt::Display for SpecialistRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialistRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "offer_iq" | "offeriq" | "offer" | "value" => Ok(SpecialistRole::OfferIq),
            "creative" | "story" => Ok(SpecialistRole::Creative),
            "shopper" => Ok(SpecialistRole::Shopper),
            "retail" | "trade" => Ok(SpecialistRole::Retail),
            other => Err(format!("unknown specialist role '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let names: Vec<_> = SpecialistRole::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["offer_iq", "creative", "shopper", "retail"]);
    }

    #[test]
    fn test_role_roundtrip() {
        for role in SpecialistRole::ALL {
            assert_eq!(role.as_str().parse::<SpecialistRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_aliases() {
        assert_eq!("OfferIQ".parse::<SpecialistRole>().unwrap(), SpecialistRole::OfferIq);
        assert_eq!("Offer-IQ".parse::<SpecialistRole>().unwrap(), SpecialistRole::OfferIq);
        assert!("legal".parse::<SpecialistRole>().is_err());
    }

    #[test]
    fn test_only_offer_iq_owns_structure() {
        assert!(SpecialistRole::OfferIq.owns_offer_structure());
        assert!(!SpecialistRole::Retail.owns_offer_structure());
    }
}

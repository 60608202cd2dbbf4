//! Improvement-round checks: slice isolation and signature preservation.

use super::finding::{FindingCode, ValidationFinding};
use super::offer::package_after_state;
use crate::offer::OfferState;
use crate::panel::{SpecialistImprovementResult, SpecialistRole, UpgradePackage};

/// Each improvement must be the variant of the role it was requested for,
/// and a package that changes the offer structure must be informed by the
/// role that owns it.
pub fn validate_slice_isolation(
    roles: &[SpecialistRole],
    improvements: &[SpecialistImprovementResult],
    packages: &[UpgradePackage],
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for (index, (expected, improvement)) in roles.iter().zip(improvements).enumerate() {
        if improvement.role() != *expected {
            findings.push(ValidationFinding::error(
                FindingCode::SliceViolation,
                format!(
                    "improvement #{} was requested from {} but carries {} fields",
                    index + 1,
                    expected,
                    improvement.role()
                ),
            ));
        }
    }

    let owners: Vec<SpecialistRole> = SpecialistRole::ALL
        .into_iter()
        .filter(SpecialistRole::owns_offer_structure)
        .collect();

    for package in packages {
        if package.touches_offer() && !owners.iter().any(|r| package.informed_by.contains(r)) {
            findings.push(ValidationFinding::error(
                FindingCode::SliceViolation,
                format!(
                    "package {} changes the offer structure without input from {}",
                    package.label,
                    owners
                        .iter()
                        .map(SpecialistRole::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
        for role in &package.informed_by {
            if !roles.contains(role) {
                findings.push(ValidationFinding::warning(
                    FindingCode::SliceViolation,
                    format!(
                        "package {} cites {}, which did not sit on this panel",
                        package.label, role
                    ),
                ));
            }
        }
    }

    findings
}

/// The signature element (hero prize) must survive every package unless
/// every specialist agreed to drop it.
pub fn validate_signature_preserved(
    before: &OfferState,
    packages: &[UpgradePackage],
    improvements: &[SpecialistImprovementResult],
) -> Vec<ValidationFinding> {
    let unanimous = !improvements.is_empty() && improvements.iter().all(|i| i.tail.drop_signature);
    if unanimous {
        return Vec::new();
    }

    let signature = before.signature_element();
    packages
        .iter()
        .filter_map(|package| {
            let removed = signature.is_some_and(|hero| {
                !package_after_state(before, package, improvements)
                    .major_prizes
                    .iter()
                    .any(|p| p == hero)
            });
            if !removed && package.preserves_signature {
                return None;
            }
            let what = signature.unwrap_or("the signature element");
            Some(ValidationFinding::warning(
                FindingCode::SignatureDropped,
                format!(
                    "package {} drops {} without every specialist agreeing",
                    package.label, what
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::OfferPatch;
    use crate::panel::{
        ImprovementDetail, ImprovementTail, OfferIqImprovement, RetailImprovement,
        ShopperImprovement,
    };

    fn improvement(detail: ImprovementDetail, drop_signature: bool) -> SpecialistImprovementResult {
        SpecialistImprovementResult::new(
            detail,
            ImprovementTail {
                drop_signature,
                ..Default::default()
            },
        )
    }

    fn panel(drop_signature: [bool; 2]) -> Vec<SpecialistImprovementResult> {
        vec![
            improvement(
                ImprovementDetail::OfferIq(OfferIqImprovement::default()),
                drop_signature[0],
            ),
            improvement(
                ImprovementDetail::Shopper(ShopperImprovement::default()),
                drop_signature[1],
            ),
        ]
    }

    fn no_hero_patch() -> OfferPatch {
        OfferPatch {
            major_prizes: Some(vec!["Cash".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_variant_mismatch_is_error() {
        let roles = [SpecialistRole::OfferIq, SpecialistRole::Retail];
        let improvements = vec![
            improvement(ImprovementDetail::OfferIq(OfferIqImprovement::default()), false),
            improvement(ImprovementDetail::Shopper(ShopperImprovement::default()), false),
        ];
        let findings = validate_slice_isolation(&roles, &improvements, &[]);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
        assert!(findings[0].message.contains("#2"));
    }

    #[test]
    fn test_offer_change_requires_offer_iq() {
        let roles = [SpecialistRole::OfferIq, SpecialistRole::Retail];
        let improvements = vec![
            improvement(ImprovementDetail::OfferIq(OfferIqImprovement::default()), false),
            improvement(ImprovementDetail::Retail(RetailImprovement::default()), false),
        ];
        let rogue = UpgradePackage::new("A", "Retail rewrites the offer")
            .informed_by(SpecialistRole::Retail)
            .with_patch(no_hero_patch());
        let sound = UpgradePackage::new("B", "Value tune")
            .informed_by(SpecialistRole::OfferIq)
            .with_patch(no_hero_patch());
        let copy_only = UpgradePackage::new("C", "Display only").informed_by(SpecialistRole::Retail);

        let findings = validate_slice_isolation(&roles, &improvements, &[rogue, sound, copy_only]);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.starts_with("package A"));
    }

    #[test]
    fn test_package_citing_absent_role_warns() {
        let roles = [SpecialistRole::OfferIq];
        let package = UpgradePackage::new("A", "Story").informed_by(SpecialistRole::Creative);
        let findings = validate_slice_isolation(&roles, &[], &[package]);
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].is_error());
    }

    #[test]
    fn test_signature_removed_without_agreement() {
        let before = OfferState::default().with_major_prize("Trip to Tokyo");
        let package = UpgradePackage::new("A", "Cash instead").with_patch(no_hero_patch());

        let findings = validate_signature_preserved(&before, &[package.clone()], &panel([true, false]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, FindingCode::SignatureDropped);
        assert!(findings[0].message.contains("Trip to Tokyo"));

        assert!(validate_signature_preserved(&before, &[package], &panel([true, true])).is_empty());
    }

    #[test]
    fn test_signature_self_reported_drop() {
        let before = OfferState::default();
        let mut package = UpgradePackage::new("B", "New story");
        package.preserves_signature = false;
        let findings = validate_signature_preserved(&before, &[package], &panel([false, false]));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("the signature element"));
    }

    #[test]
    fn test_signature_kept() {
        let before = OfferState::default().with_major_prize("Trip to Tokyo");
        let package = UpgradePackage::new("A", "Cheaper entry");
        assert!(validate_signature_preserved(&before, &[package], &panel([false, false])).is_empty());
    }
}

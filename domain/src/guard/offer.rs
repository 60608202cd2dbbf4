//! Offer-state guard: at most one guaranteed base-value type per offer.

use super::finding::{FindingCode, ValidationError, ValidationFinding};
use crate::offer::{BaseValueKind, OfferState};
use crate::panel::{OfferOption, SpecialistImprovementResult, UpgradePackage};

/// Check a proposed after-state against the current offer.
///
/// Once an offer carries a guaranteed reward, its type is locked: an
/// after-state guaranteeing a different type is rejected.
pub fn validate_offer_state(
    before: &OfferState,
    after: &OfferState,
) -> Result<OfferState, ValidationError> {
    match guaranteed_conflict(&[before.guaranteed_kind(), after.guaranteed_kind()]) {
        Some(finding) => Err(ValidationError::new(vec![finding])),
        None => Ok(after.clone()),
    }
}

/// The after-state a package produces: the adopted offer_iq option's patch
/// first, then the package's own patch on top.
pub fn package_after_state(
    before: &OfferState,
    package: &UpgradePackage,
    improvements: &[SpecialistImprovementResult],
) -> OfferState {
    let mut after = before.clone();
    if let Some(label) = &package.offer_option
        && let Some(option) = find_offer_option(improvements, label)
    {
        after = after.apply(&option.patch);
    }
    if let Some(patch) = &package.patch {
        after = after.apply(patch);
    }
    after
}

/// Check one upgrade package against the current offer.
///
/// Guaranteed types are collected from the current offer, the package's own
/// patch, any referenced offer_iq option and the combined after-state; more
/// than one distinct type is an error.
pub fn validate_upgrade_package(
    before: &OfferState,
    package: &UpgradePackage,
    improvements: &[SpecialistImprovementResult],
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    let mut kinds = vec![before.guaranteed_kind()];

    if let Some(label) = &package.offer_option {
        match find_offer_option(improvements, label) {
            Some(option) => kinds.push(option.patch.guaranteed_kind_over(before)),
            None => findings.push(ValidationFinding::error(
                FindingCode::UnknownOfferOption,
                format!(
                    "package {} adopts offer option '{}', which offer_iq never proposed",
                    package.label, label
                ),
            )),
        }
    }
    if let Some(patch) = &package.patch {
        kinds.push(patch.guaranteed_kind_over(before));
    }
    kinds.push(package_after_state(before, package, improvements).guaranteed_kind());

    if let Some(mut finding) = guaranteed_conflict(&kinds) {
        finding.message = format!("package {}: {}", package.label, finding.message);
        findings.push(finding);
    }
    findings
}

/// Check every option offer_iq proposed against the current offer.
///
/// An option whose patch would add a second guaranteed type is an error when
/// some package adopts it and a warning otherwise.
pub fn validate_offer_options(
    before: &OfferState,
    improvements: &[SpecialistImprovementResult],
    packages: &[UpgradePackage],
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    for detail in improvements.iter().filter_map(SpecialistImprovementResult::offer_iq) {
        for option in &detail.options {
            let kinds = [
                before.guaranteed_kind(),
                option.patch.guaranteed_kind_over(before),
            ];
            let Some(conflict) = guaranteed_conflict(&kinds) else {
                continue;
            };
            let adopted = packages.iter().any(|p| {
                p.offer_option
                    .as_deref()
                    .is_some_and(|label| label.trim().eq_ignore_ascii_case(&option.label))
            });
            let message = format!("offer_iq option {}: {}", option.label, conflict.message);
            findings.push(if adopted {
                ValidationFinding::error(FindingCode::SecondGuaranteedType, message)
            } else {
                ValidationFinding::warning(FindingCode::SecondGuaranteedType, message)
            });
        }
    }
    findings
}

fn find_offer_option<'a>(
    improvements: &'a [SpecialistImprovementResult],
    label: &str,
) -> Option<&'a OfferOption> {
    improvements
        .iter()
        .filter_map(SpecialistImprovementResult::offer_iq)
        .find_map(|detail| detail.option(label))
}

fn guaranteed_conflict(kinds: &[Option<BaseValueKind>]) -> Option<ValidationFinding> {
    let mut distinct: Vec<BaseValueKind> = Vec::new();
    for kind in kinds.iter().flatten() {
        if !distinct.contains(kind) {
            distinct.push(*kind);
        }
    }
    if distinct.len() <= 1 {
        return None;
    }
    let names: Vec<&str> = distinct.iter().map(BaseValueKind::as_str).collect();
    Some(ValidationFinding::error(
        FindingCode::SecondGuaranteedType,
        format!(
            "offer would carry more than one guaranteed reward type ({})",
            names.join(", ")
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::{BaseValue, OfferPatch, ScaleZone};
    use crate::panel::{
        ImprovementDetail, ImprovementTail, OfferIqImprovement, OfferOption, SpecialistRole,
    };

    fn cashback_offer() -> OfferState {
        OfferState::default()
            .with_base_value(BaseValue::new(BaseValueKind::Cashback, 50.0))
            .with_major_prize("Trip to Tokyo")
            .with_guaranteed_reward(true)
    }

    fn voucher_patch() -> OfferPatch {
        OfferPatch {
            base_value: Some(BaseValue::new(BaseValueKind::Voucher, 10.0)),
            ..Default::default()
        }
    }

    fn offer_iq_with(label: &str, patch: OfferPatch) -> SpecialistImprovementResult {
        SpecialistImprovementResult::new(
            ImprovementDetail::OfferIq(OfferIqImprovement {
                options: vec![OfferOption {
                    label: label.to_string(),
                    summary: "Switch to voucher".to_string(),
                    patch,
                    scale_zone: ScaleZone::Zone1Normal,
                }],
                recommended_option: Some(label.to_string()),
            }),
            ImprovementTail::default(),
        )
    }

    #[test]
    fn test_offer_state_same_type_passes() {
        let before = cashback_offer();
        let after = before.apply(&OfferPatch {
            base_value: Some(BaseValue::new(BaseValueKind::Cashback, 75.0)),
            ..Default::default()
        });
        let accepted = validate_offer_state(&before, &after).unwrap();
        assert_eq!(accepted.base_value.amount, Some(75.0));
    }

    #[test]
    fn test_offer_state_second_type_rejected() {
        let before = cashback_offer();
        let after = before.apply(&voucher_patch());
        let err = validate_offer_state(&before, &after).unwrap_err();
        assert_eq!(err.findings[0].code, FindingCode::SecondGuaranteedType);
        assert!(err.findings[0].message.contains("cashback, voucher"));
    }

    #[test]
    fn test_offer_state_without_guarantee_is_free() {
        let before = cashback_offer().with_guaranteed_reward(false);
        let after = before.apply(&voucher_patch());
        assert!(validate_offer_state(&before, &after).is_ok());
    }

    #[test]
    fn test_package_adopting_conflicting_option() {
        let before = cashback_offer();
        let improvements = vec![offer_iq_with("1", voucher_patch())];
        let package = UpgradePackage::new("A", "Voucher switch")
            .informed_by(SpecialistRole::OfferIq)
            .with_offer_option("1");

        let findings = validate_upgrade_package(&before, &package, &improvements);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
        assert!(findings[0].message.starts_with("package A"));
    }

    #[test]
    fn test_package_unknown_option() {
        let before = cashback_offer();
        let package = UpgradePackage::new("B", "Mystery").with_offer_option("9");
        let findings = validate_upgrade_package(&before, &package, &[]);
        assert_eq!(findings[0].code, FindingCode::UnknownOfferOption);
    }

    #[test]
    fn test_unadopted_conflicting_option_is_a_warning() {
        let before = cashback_offer();
        let mut patch = voucher_patch();
        patch.has_guaranteed_reward = Some(true);
        let improvements = vec![offer_iq_with("1", patch)];
        let package = UpgradePackage::new("A", "Story only")
            .informed_by(SpecialistRole::OfferIq)
            .informed_by(SpecialistRole::Creative);

        let findings = validate_offer_options(&before, &improvements, &[package]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, FindingCode::SecondGuaranteedType);
        assert!(!findings[0].is_error());
        assert!(findings[0].message.starts_with("offer_iq option 1"));
    }

    #[test]
    fn test_adopted_conflicting_option_is_an_error() {
        let before = cashback_offer();
        let improvements = vec![offer_iq_with("1", voucher_patch())];
        let package = UpgradePackage::new("A", "Voucher switch").with_offer_option(" 1 ");

        let findings = validate_offer_options(&before, &improvements, &[package]);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
    }

    #[test]
    fn test_same_type_option_passes() {
        let before = cashback_offer();
        let improvements = vec![offer_iq_with(
            "1",
            OfferPatch {
                base_value: Some(BaseValue::new(BaseValueKind::Cashback, 80.0)),
                ..Default::default()
            },
        )];
        assert!(validate_offer_options(&before, &improvements, &[]).is_empty());
    }

    #[test]
    fn test_package_after_state_layers_patches() {
        let before = OfferState::default().with_major_prize("Car");
        let improvements = vec![offer_iq_with("1", voucher_patch())];
        let package = UpgradePackage::new("A", "Voucher plus trip")
            .with_offer_option("1")
            .with_patch(OfferPatch {
                major_prizes: Some(vec!["Trip".to_string()]),
                ..Default::default()
            });

        let after = package_after_state(&before, &package, &improvements);
        assert_eq!(after.base_value.kind, BaseValueKind::Voucher);
        assert_eq!(after.major_prizes, vec!["Trip"]);
        assert!(validate_upgrade_package(&before, &package, &improvements).is_empty());
    }
}

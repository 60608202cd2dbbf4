//! Chair-level checks: ambition, disagreement backing, snapshot fidelity.

use super::finding::{FindingCode, ValidationFinding};
use crate::offer::{AmbitionSetting, ScaleZone};
use crate::panel::{SpecialistResult, SpecialistSnapshot, Verdict};

/// A BOLD or RIDICULOUS chair may not settle on a zone safer than the
/// ambition asks for unless it states a justification.
///
/// A missing or unranked zone cannot show the ambition was met, so it needs
/// a justification too.
pub fn validate_chair_ambition(
    ambition: AmbitionSetting,
    recommended_zone: Option<ScaleZone>,
    justification: Option<&str>,
) -> Option<ValidationFinding> {
    if ambition == AmbitionSetting::Safe || justification.is_some_and(|j| !j.trim().is_empty()) {
        return None;
    }
    let settled = match recommended_zone {
        Some(zone) if zone.rank().is_none() => format!("an unranked zone ({})", zone),
        Some(zone) if zone.is_safer_than(ambition.minimum_zone()) => zone.to_string(),
        Some(_) => return None,
        None => "no zone".to_string(),
    };
    Some(ValidationFinding::error(
        FindingCode::AmbitionDowngrade,
        format!(
            "ambition is {} but the chair settled on {} without a justification",
            ambition, settled
        ),
    ))
}

/// Whether the panel returned more than one distinct verdict.
pub fn is_split(verdicts: &[Verdict]) -> bool {
    verdicts.windows(2).any(|pair| pair[0] != pair[1])
}

/// A split panel must come with a statement of whom the chair backs.
pub fn validate_disagreement_backing(
    verdicts: &[Verdict],
    backing: Option<&str>,
) -> Option<ValidationFinding> {
    if !is_split(verdicts) || backing.is_some_and(|b| !b.trim().is_empty()) {
        return None;
    }
    let listed: Vec<&str> = verdicts.iter().map(Verdict::as_str).collect();
    Some(ValidationFinding::warning(
        FindingCode::UnbackedDisagreement,
        format!(
            "specialists disagree ({}) but the chair does not say whose position it backs",
            listed.join(", ")
        ),
    ))
}

/// Replace the chair's snapshots with ones rebuilt from the actual results.
///
/// Returns a warning when the chair supplied a list that differed in order,
/// verdict or headline. An omitted list is filled in silently.
pub fn reconcile_snapshots(
    snapshots: &mut Vec<SpecialistSnapshot>,
    specialists: &[SpecialistResult],
) -> Option<ValidationFinding> {
    let actual: Vec<SpecialistSnapshot> = specialists.iter().map(SpecialistSnapshot::from).collect();
    if *snapshots == actual {
        return None;
    }
    if snapshots.is_empty() {
        *snapshots = actual;
        return None;
    }
    let finding = ValidationFinding::warning(
        FindingCode::SnapshotMismatch,
        format!(
            "chair reported {} specialist snapshot(s) that did not match the {} actual result(s); replaced",
            snapshots.len(),
            actual.len()
        ),
    );
    *snapshots = actual;
    Some(finding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::SpecialistRole;

    #[test]
    fn test_bold_downgrade_without_justification() {
        let finding =
            validate_chair_ambition(AmbitionSetting::Bold, Some(ScaleZone::Zone1Normal), None)
                .unwrap();
        assert!(finding.is_error());
        assert_eq!(finding.code, FindingCode::AmbitionDowngrade);
    }

    #[test]
    fn test_bold_downgrade_with_justification() {
        assert!(validate_chair_ambition(
            AmbitionSetting::Bold,
            Some(ScaleZone::Zone1Normal),
            Some("Retail partners cannot staff a live event."),
        )
        .is_none());
        assert!(validate_chair_ambition(
            AmbitionSetting::Bold,
            Some(ScaleZone::Zone1Normal),
            Some("   "),
        )
        .is_some());
    }

    #[test]
    fn test_ambition_met_or_safe() {
        assert!(
            validate_chair_ambition(AmbitionSetting::Bold, Some(ScaleZone::Zone2Brave), None)
                .is_none()
        );
        assert!(
            validate_chair_ambition(AmbitionSetting::Safe, Some(ScaleZone::Zone1Normal), None)
                .is_none()
        );
        assert!(validate_chair_ambition(
            AmbitionSetting::Ridiculous,
            Some(ScaleZone::Zone3BreaksSystem),
            None
        )
        .is_none());
        assert!(
            validate_chair_ambition(AmbitionSetting::Ridiculous, Some(ScaleZone::Zone2Brave), None)
                .is_some()
        );
        assert!(validate_chair_ambition(AmbitionSetting::Safe, None, None).is_none());
    }

    #[test]
    fn test_missing_or_unranked_zone_needs_justification() {
        let missing = validate_chair_ambition(AmbitionSetting::Bold, None, None).unwrap();
        assert!(missing.is_error());
        assert_eq!(missing.code, FindingCode::AmbitionDowngrade);
        assert!(missing.message.contains("no zone"));

        let unranked = validate_chair_ambition(
            AmbitionSetting::Ridiculous,
            Some(ScaleZone::NotApplicable),
            None,
        )
        .unwrap();
        assert!(unranked.message.contains("unranked"));

        assert!(validate_chair_ambition(
            AmbitionSetting::Bold,
            None,
            Some("The chain bans in-store stunts this quarter."),
        )
        .is_none());
    }

    #[test]
    fn test_disagreement_backing() {
        let split = [Verdict::Go, Verdict::Kill, Verdict::Go];
        let finding = validate_disagreement_backing(&split, None).unwrap();
        assert_eq!(finding.code, FindingCode::UnbackedDisagreement);
        assert!(!finding.is_error());
        assert!(finding.message.contains("GO, KILL, GO"));

        assert!(validate_disagreement_backing(&split, Some("Backing retail.")).is_none());
        assert!(validate_disagreement_backing(&[Verdict::Go, Verdict::Go], None).is_none());
        assert!(validate_disagreement_backing(&[], None).is_none());
    }

    #[test]
    fn test_reconcile_snapshots() {
        let specialists = vec![
            SpecialistResult::new(SpecialistRole::OfferIq, Verdict::Go, "Value is clear."),
            SpecialistResult::new(SpecialistRole::Creative, Verdict::Kill, "No story."),
        ];
        let mut snapshots = vec![SpecialistSnapshot {
            role: SpecialistRole::Creative,
            verdict: Verdict::Iterate,
            headline: "Paraphrased.".to_string(),
        }];

        let finding = reconcile_snapshots(&mut snapshots, &specialists).unwrap();
        assert_eq!(finding.code, FindingCode::SnapshotMismatch);
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].headline, "No story.");

        assert!(reconcile_snapshots(&mut snapshots, &specialists).is_none());

        let mut omitted = Vec::new();
        assert!(reconcile_snapshots(&mut omitted, &specialists).is_none());
        assert_eq!(omitted.len(), 2);
    }
}

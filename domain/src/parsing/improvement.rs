//! Parsers for Improvement-mode output.

use super::error::SchemaParseError;
use super::extract::extract_json_object;
use super::fields::{Fields, MAX_LIST_ITEMS};
use crate::offer::OfferPatch;
use crate::panel::{
    ChairImprovementResult, CreativeImprovement, HookOption, ImprovementDetail, ImprovementTail,
    OfferIqImprovement, OfferOption, RetailImprovement, ShopperImprovement, SpecialistImprovementResult,
    SpecialistRole, UpgradePackage,
};

/// Package labels assigned when the chair omits one.
const FALLBACK_LABELS: [&str; 2] = ["A", "B"];

/// Parse one specialist's raw improvement output into the variant for `role`.
pub fn parse_specialist_improvement(
    role: SpecialistRole,
    raw: &str,
) -> Result<SpecialistImprovementResult, SchemaParseError> {
    let obj = extract_json_object(raw)?;
    let fields = Fields::new(&obj, raw);

    let detail = match role {
        SpecialistRole::OfferIq => ImprovementDetail::OfferIq(parse_offer_iq(&fields)?),
        SpecialistRole::Creative => ImprovementDetail::Creative(CreativeImprovement {
            hooks: fields
                .objects("hooks")
                .iter()
                .filter_map(|hook| {
                    Some(HookOption {
                        line: hook.optional_string("line")?,
                        rationale: hook.text("rationale"),
                    })
                })
                .take(MAX_LIST_ITEMS)
                .collect(),
            story_device: fields.optional_string("story_device"),
        }),
        SpecialistRole::Shopper => ImprovementDetail::Shopper(ShopperImprovement {
            simplifications: fields.string_list("simplifications", MAX_LIST_ITEMS),
            steps_before: fields.optional_u32("steps_before"),
            steps_after: fields.optional_u32("steps_after"),
            suggested_cadence: fields.label("suggested_cadence"),
        }),
        SpecialistRole::Retail => ImprovementDetail::Retail(RetailImprovement {
            trade_actions: fields.string_list("trade_actions", MAX_LIST_ITEMS),
            pos_requirements: fields.string_list("pos_requirements", MAX_LIST_ITEMS),
            retailer_risks: fields.string_list("retailer_risks", MAX_LIST_ITEMS),
        }),
    };

    let tail = ImprovementTail {
        must_fix: fields.string_list("must_fix", MAX_LIST_ITEMS),
        nice_to_have: fields.string_list("nice_to_have", MAX_LIST_ITEMS),
        drop_signature: fields.bool_or("drop_signature", false),
    };

    Ok(SpecialistImprovementResult::new(detail, tail))
}

fn parse_offer_iq(fields: &Fields<'_>) -> Result<OfferIqImprovement, SchemaParseError> {
    let mut options = Vec::new();
    for option in fields.objects("options").iter().take(MAX_LIST_ITEMS) {
        let Some(label) = option.optional_string("label") else {
            continue;
        };
        options.push(OfferOption {
            label,
            summary: option.text("summary"),
            patch: option.deserialize::<OfferPatch>("patch")?.unwrap_or_default(),
            scale_zone: option.label("scale_zone"),
        });
    }

    // A recommendation naming no listed option is dropped
    let recommended_option = fields
        .optional_string("recommended_option")
        .filter(|label| options.iter().any(|o| o.label.eq_ignore_ascii_case(label)));

    Ok(OfferIqImprovement {
        options,
        recommended_option,
    })
}

/// Parse the chair's raw improvement output.
///
/// At least one package is required; extra packages beyond
/// [`ChairImprovementResult::MAX_PACKAGES`] are dropped. Labels must be
/// distinct and `recommended` must name one of the kept packages.
pub fn parse_chair_improvement(raw: &str) -> Result<ChairImprovementResult, SchemaParseError> {
    let obj = extract_json_object(raw)?;
    let fields = Fields::new(&obj, raw);

    let mut packages: Vec<UpgradePackage> = Vec::new();
    for (index, package) in fields
        .objects("packages")
        .iter()
        .take(ChairImprovementResult::MAX_PACKAGES)
        .enumerate()
    {
        let package = parse_package(package, FALLBACK_LABELS[index])?;
        if packages.iter().any(|p| p.label.eq_ignore_ascii_case(&package.label)) {
            return Err(fields.invalid(
                "packages",
                format!("duplicate package label '{}'", package.label),
            ));
        }
        packages.push(package);
    }
    if packages.is_empty() {
        return Err(fields.invalid("packages", "expected one or two upgrade packages"));
    }

    let recommended = fields.required_string("recommended")?;
    let Some(recommended) = packages
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(&recommended))
        .map(|p| p.label.clone())
    else {
        return Err(fields.invalid(
            "recommended",
            format!("'{}' does not name a package", recommended),
        ));
    };

    Ok(ChairImprovementResult {
        packages,
        recommended,
        ambition_justification: fields.optional_string("ambition_justification"),
        backing: fields.optional_string("backing"),
        notes: fields.optional_string("notes"),
    })
}

fn parse_package(fields: &Fields<'_>, fallback_label: &str) -> Result<UpgradePackage, SchemaParseError> {
    let mut informed_by: Vec<SpecialistRole> = Vec::new();
    for role in fields
        .string_list("informed_by", SpecialistRole::ALL.len() * 2)
        .iter()
        .filter_map(|s| s.parse::<SpecialistRole>().ok())
    {
        if !informed_by.contains(&role) {
            informed_by.push(role);
        }
    }

    Ok(UpgradePackage {
        label: fields
            .optional_string("label")
            .unwrap_or_else(|| fallback_label.to_string()),
        title: fields.required_string("title")?,
        summary: fields.text("summary"),
        changes: fields.string_list("changes", MAX_LIST_ITEMS),
        informed_by,
        scale_zone: fields.label("scale_zone"),
        patch: fields
            .deserialize::<OfferPatch>("patch")?
            .filter(|patch| !patch.is_empty()),
        offer_option: fields.optional_string("offer_option"),
        preserves_signature: fields.bool_or("preserves_signature", true),
    })
}

//! Parsers for Evaluation-mode output.

use super::error::SchemaParseError;
use super::extract::extract_json_object;
use super::fields::{Fields, MAX_LIST_ITEMS};
use crate::offer::ScaleZone;
use crate::panel::{
    ChairResult, ChairScores, SpecialistRole, SpecialistResult, SpecialistSnapshot,
};

/// Parse one specialist's raw evaluation output.
///
/// `verdict` and `headline` are required; every other field is optional and
/// normalized. The role comes from the caller, never from the output.
pub fn parse_specialist(role: SpecialistRole, raw: &str) -> Result<SpecialistResult, SchemaParseError> {
    let obj = extract_json_object(raw)?;
    let fields = Fields::new(&obj, raw);

    Ok(SpecialistResult {
        role,
        verdict: fields.required_label("verdict")?,
        headline: fields.required_string("headline")?,
        scale_zone: fields.label("scale_zone"),
        cadence_label: fields.label("cadence_label"),
        key_points: fields.string_list("key_points", MAX_LIST_ITEMS),
        must_fix: fields.string_list("must_fix", MAX_LIST_ITEMS),
        nice_to_have: fields.string_list("nice_to_have", MAX_LIST_ITEMS),
        notes_for_chair: fields.text("notes_for_chair"),
    })
}

/// Parse the chair's raw evaluation output.
///
/// All six scores are required. Snapshots are read leniently: entries with
/// an unknown role or no headline are skipped, since the orchestrator
/// reconciles them against the actual specialist results anyway.
pub fn parse_chair(raw: &str) -> Result<ChairResult, SchemaParseError> {
    let obj = extract_json_object(raw)?;
    let fields = Fields::new(&obj, raw);

    let verdict = fields.required_label("verdict")?;
    let scores = parse_scores(&fields.object("scores")?)?;

    let specialists = fields
        .objects("specialists")
        .iter()
        .filter_map(|entry| {
            let role = entry.optional_string("role")?.parse::<SpecialistRole>().ok()?;
            Some(SpecialistSnapshot {
                role,
                verdict: entry.label("verdict"),
                headline: entry.optional_string("headline").unwrap_or_default(),
            })
        })
        .collect();

    Ok(ChairResult {
        verdict,
        scores,
        top_reasons: fields.string_list("top_reasons", MAX_LIST_ITEMS),
        must_fix: fields.string_list("must_fix", MAX_LIST_ITEMS),
        quick_wins: fields.string_list("quick_wins", MAX_LIST_ITEMS),
        benchmark: fields.text("benchmark"),
        specialists,
        recommended_zone: fields.optional_label::<ScaleZone>("recommended_zone"),
        ambition_justification: fields.optional_string("ambition_justification"),
        backing: fields.optional_string("backing"),
        notes: fields.optional_string("notes"),
    })
}

fn parse_scores(scores: &Fields<'_>) -> Result<ChairScores, SchemaParseError> {
    Ok(ChairScores {
        objective_fit: scores.score("objective_fit")?,
        hook_strength: scores.score("hook_strength")?,
        mechanic_fit: scores.score("mechanic_fit")?,
        frequency_feel: scores.score("frequency_feel")?,
        friction: scores.score("friction")?,
        retail_readiness: scores.score("retail_readiness")?,
    })
}

//! JSON payloads sent alongside composed instructions.
//!
//! The policy text never appears here; it lives in the instructions.

use crate::offer::Context;
use crate::panel::{EvaluationBundle, SpecialistImprovementResult, SpecialistResult};
use serde_json::{Value, json};

/// Payload for an Evaluation specialist: the raw context.
pub fn evaluation_specialist_payload(context: &Context) -> Value {
    json!({
        "brief": context.brief,
        "concept": context.concept,
        "ambition": context.ambition,
        "meta": context.meta,
        "offer_state": context.offer_state,
    })
}

/// Payload for the Evaluation chair: context plus the full ordered panel.
pub fn evaluation_chair_payload(context: &Context, specialists: &[SpecialistResult]) -> Value {
    let mut payload = evaluation_specialist_payload(context);
    payload["specialists"] = json!(specialists);
    payload
}

/// Payload for an Improvement specialist: context, its own prior result,
/// the prior chair result and the current offer.
pub fn improvement_specialist_payload(
    context: &Context,
    own: &SpecialistResult,
    evaluation: &EvaluationBundle,
) -> Value {
    let mut payload = evaluation_specialist_payload(context);
    payload["evaluation"] = json!({
        "own": own,
        "chair": evaluation.chair,
    });
    payload
}

/// Payload for the Improvement chair: context, the full prior evaluation
/// and the full ordered list of improvement proposals.
pub fn improvement_chair_payload(
    context: &Context,
    evaluation: &EvaluationBundle,
    improvements: &[SpecialistImprovementResult],
) -> Value {
    let mut payload = evaluation_specialist_payload(context);
    payload["evaluation"] = json!(evaluation);
    payload["improvements"] = json!(improvements);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::{AmbitionSetting, BaseValue, BaseValueKind, OfferState};
    use crate::panel::{ChairResult, ChairScores, SpecialistRole, Verdict};

    fn context() -> Context {
        Context::new("Grow basket size", "Spend 20, get 5 back", AmbitionSetting::Safe)
            .with_policy_text("SECRET POLICY")
            .with_offer_state(
                OfferState::default()
                    .with_base_value(BaseValue::new(BaseValueKind::Cashback, 5.0))
                    .with_guaranteed_reward(true),
            )
    }

    #[test]
    fn test_specialist_payload_excludes_policy() {
        let payload = evaluation_specialist_payload(&context());
        assert_eq!(payload["ambition"], "SAFE");
        assert_eq!(payload["offer_state"]["base_value"]["kind"], "cashback");
        assert!(!payload.to_string().contains("SECRET POLICY"));
    }

    #[test]
    fn test_chair_payload_keeps_specialist_order() {
        let specialists = vec![
            SpecialistResult::new(SpecialistRole::OfferIq, Verdict::Go, "a"),
            SpecialistResult::new(SpecialistRole::Creative, Verdict::Kill, "b"),
        ];
        let payload = evaluation_chair_payload(&context(), &specialists);
        let roles: Vec<_> = payload["specialists"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["role"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(roles, vec!["offer_iq", "creative"]);
    }

    #[test]
    fn test_improvement_specialist_payload_carries_own_and_chair() {
        let own = SpecialistResult::new(SpecialistRole::Retail, Verdict::Iterate, "own");
        let bundle = EvaluationBundle::new(
            ChairResult::new(Verdict::Iterate, ChairScores::uniform(6.0)),
            vec![own.clone()],
        );
        let payload = improvement_specialist_payload(&context(), &own, &bundle);
        assert_eq!(payload["evaluation"]["own"]["headline"], "own");
        assert_eq!(payload["evaluation"]["chair"]["verdict"], "ITERATE");
        assert!(payload.get("offer_state").is_some());
    }
}

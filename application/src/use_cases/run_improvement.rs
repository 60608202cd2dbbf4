//! Run Improvement use case
//!
//! Orchestrates an Improvement round on top of a finished evaluation: each
//! specialist proposes changes within its own slice, then the chair folds
//! them into at most two upgrade packages.

use super::error::OrchestrationError;
use super::rounds::{CouncilRounds, RoundControl, check_roles};
use crate::config::RoundParams;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::reasoning_client::ReasoningClient;
use council_domain::guard::{
    package_after_state, validate_chair_ambition, validate_disagreement_backing,
    validate_offer_options, validate_offer_state, validate_signature_preserved,
    validate_slice_isolation, validate_upgrade_package,
};
use council_domain::prompt::payload::{improvement_chair_payload, improvement_specialist_payload};
use council_domain::{
    ChairImprovementResult, Context, CouncilMode, EvaluationBundle, OfferState, RoundPhase,
    RoundTracker, Seat, SpecialistImprovementResult, SpecialistRole, ValidationFinding, Verdict,
    parse_chair_improvement, parse_specialist_improvement,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Complete result of an Improvement round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementOutcome {
    pub chair: ChairImprovementResult,
    /// One proposal per declared role, in declared order
    pub specialists: Vec<SpecialistImprovementResult>,
    #[serde(default)]
    pub findings: Vec<ValidationFinding>,
    /// Offer after applying the recommended package, when it passes the
    /// guaranteed-reward guard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_offer: Option<OfferState>,
}

/// Use case for running an Improvement round
pub struct RunImprovementUseCase<C: ReasoningClient + 'static> {
    rounds: CouncilRounds<C>,
    roles: Vec<SpecialistRole>,
}

impl<C: ReasoningClient + 'static> RunImprovementUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            rounds: CouncilRounds::new(client),
            roles: SpecialistRole::ALL.to_vec(),
        }
    }

    pub fn with_params(mut self, params: RoundParams) -> Self {
        self.rounds = self.rounds.with_params(params);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.rounds = self.rounds.with_logger(logger);
        self
    }

    pub fn with_roles(mut self, roles: Vec<SpecialistRole>) -> Self {
        self.roles = roles;
        self
    }

    pub async fn execute(
        &self,
        context: &Context,
        evaluation: &EvaluationBundle,
    ) -> Result<ImprovementOutcome, OrchestrationError> {
        self.execute_with_progress(context, evaluation, &NoProgress, CancellationToken::new())
            .await
    }

    pub async fn execute_with_progress(
        &self,
        context: &Context,
        evaluation: &EvaluationBundle,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<ImprovementOutcome, OrchestrationError> {
        let mut tracker = RoundTracker::new(CouncilMode::Improvement);
        let result = self
            .run(context, evaluation, &mut tracker, progress, cancel)
            .await;
        if let Err(e) = &result {
            tracker.fail();
            warn!("Improvement round failed: {}", e);
            progress.on_round_failed(&e.to_string());
        }
        result
    }

    async fn run(
        &self,
        context: &Context,
        evaluation: &EvaluationBundle,
        tracker: &mut RoundTracker,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<ImprovementOutcome, OrchestrationError> {
        check_roles(&self.roles)?;
        context.validate()?;

        let mode = CouncilMode::Improvement;
        let mut requests = Vec::with_capacity(self.roles.len());
        for &role in &self.roles {
            let own = evaluation
                .specialist(role)
                .ok_or(OrchestrationError::MissingPriorResult(role))?;
            let seat = Seat::Specialist(role);
            let payload = improvement_specialist_payload(context, own, evaluation);
            requests.push((
                role,
                self.rounds
                    .request(seat, mode, &context.policy_text, payload),
            ));
        }

        let control = RoundControl::new(cancel, self.rounds.params().round_deadline);
        info!(
            "Starting improvement with {} specialists (prior chair verdict {})",
            self.roles.len(),
            evaluation.chair.verdict
        );

        // Specialists
        tracker.advance(RoundPhase::SpecialistsRunning)?;
        progress.on_phase_start(mode, &RoundPhase::SpecialistsRunning, self.roles.len());

        let improvements = self
            .rounds
            .specialist_round(requests, parse_specialist_improvement, &control, progress)
            .await?;

        progress.on_phase_complete(&RoundPhase::SpecialistsRunning);
        tracker.advance(RoundPhase::SpecialistsDone)?;

        // Chair
        tracker.advance(RoundPhase::ChairRunning)?;
        progress.on_phase_start(mode, &RoundPhase::ChairRunning, 1);

        let request = self.rounds.request(
            Seat::Chair,
            mode,
            &context.policy_text,
            improvement_chair_payload(context, evaluation, &improvements),
        );
        let chair = self
            .rounds
            .chair_round(request, parse_chair_improvement, &control, progress)
            .await?;

        progress.on_phase_complete(&RoundPhase::ChairRunning);

        let findings = self.check(context, evaluation, &chair, &improvements)?;
        let proposed_offer = chair.recommended_package().and_then(|package| {
            let after = package_after_state(&context.offer_state, package, &improvements);
            validate_offer_state(&context.offer_state, &after).ok()
        });
        tracker.advance(RoundPhase::Complete)?;

        info!(
            "Improvement complete: {} package(s), recommended {}",
            chair.packages.len(),
            chair.recommended
        );
        Ok(ImprovementOutcome {
            chair,
            specialists: improvements,
            findings,
            proposed_offer,
        })
    }

    fn check(
        &self,
        context: &Context,
        evaluation: &EvaluationBundle,
        chair: &ChairImprovementResult,
        improvements: &[SpecialistImprovementResult],
    ) -> Result<Vec<ValidationFinding>, OrchestrationError> {
        let before = &context.offer_state;
        let mut findings = validate_slice_isolation(&self.roles, improvements, &chair.packages);
        findings.extend(validate_offer_options(before, improvements, &chair.packages));
        for package in &chair.packages {
            findings.extend(validate_upgrade_package(before, package, improvements));
        }
        findings.extend(validate_signature_preserved(before, &chair.packages, improvements));

        if let Some(package) = chair.recommended_package() {
            findings.extend(validate_chair_ambition(
                context.ambition,
                Some(package.scale_zone),
                chair.ambition_justification.as_deref(),
            ));
        }

        let verdicts: Vec<Verdict> = self
            .roles
            .iter()
            .filter_map(|&role| evaluation.specialist(role).map(|s| s.verdict))
            .collect();
        findings.extend(validate_disagreement_backing(&verdicts, chair.backing.as_deref()));

        self.rounds.record_findings(&findings);
        Ok(self.rounds.params().validation.enforce(findings)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{Reply, ScriptedClient};
    use council_domain::{
        AmbitionSetting, BaseValue, BaseValueKind, ChairResult, ChairScores, FindingCode,
        SpecialistResult,
    };
    use serde_json::{Value, json};

    fn context() -> Context {
        Context::new(
            "Grow summer volume.",
            "Buy two, get 50 cashback and a chance to win a trip.",
            AmbitionSetting::Safe,
        )
        .with_offer_state(
            OfferState::default()
                .with_base_value(BaseValue::new(BaseValueKind::Cashback, 50.0))
                .with_major_prize("Trip to Tokyo")
                .with_guaranteed_reward(true),
        )
    }

    fn evaluation() -> EvaluationBundle {
        let specialists = SpecialistRole::ALL
            .iter()
            .map(|&role| SpecialistResult::new(role, Verdict::Iterate, "Could be sharper."))
            .collect();
        EvaluationBundle::new(
            ChairResult::new(Verdict::Iterate, ChairScores::uniform(6.0)),
            specialists,
        )
    }

    fn offer_iq_reply(base_value: Value) -> String {
        json!({
            "options": [
                {"label": "1", "summary": "Adjust the base value", "scale_zone": "ZONE_1_NORMAL",
                 "patch": {"base_value": base_value}}
            ],
            "recommended_option": "1",
            "must_fix": [],
            "nice_to_have": [],
            "drop_signature": false
        })
        .to_string()
    }

    fn panel(offer_iq: String) -> ScriptedClient {
        ScriptedClient::new()
            .reply(SpecialistRole::OfferIq, Reply::delayed(20, offer_iq))
            .reply(
                SpecialistRole::Creative,
                Reply::text(r#"{"hooks": [{"line": "Taste Tokyo", "rationale": "Ties to the prize"}], "story_device": "Postcards"}"#),
            )
            .reply(
                SpecialistRole::Shopper,
                Reply::delayed(5, r#"{"simplifications": ["Single receipt"], "steps_before": 4, "steps_after": 2, "suggested_cadence": "WINNER_EVERY_DAY"}"#),
            )
            .reply(
                SpecialistRole::Retail,
                Reply::text(r#"{"trade_actions": ["Gondola ends"], "pos_requirements": ["Shelf wobbler"], "retailer_risks": []}"#),
            )
    }

    fn chair_reply(package: Value) -> Reply {
        Reply::text(
            json!({
                "packages": [package],
                "recommended": "A",
                "notes": "One strong package."
            })
            .to_string(),
        )
    }

    #[tokio::test]
    async fn test_improvement_happy_path() {
        let client = Arc::new(
            panel(offer_iq_reply(json!({"kind": "cashback", "amount": 75})))
                .chair(chair_reply(json!({
                    "label": "A",
                    "title": "Richer cashback",
                    "informed_by": ["offer_iq", "shopper"],
                    "offer_option": "1",
                    "scale_zone": "ZONE_1_NORMAL"
                }))),
        );
        let use_case = RunImprovementUseCase::new(client.clone());

        let outcome = use_case.execute(&context(), &evaluation()).await.unwrap();

        let roles: Vec<_> = outcome.specialists.iter().map(|s| s.role()).collect();
        assert_eq!(roles, SpecialistRole::ALL.to_vec());
        assert_eq!(outcome.chair.recommended, "A");
        assert!(outcome.findings.is_empty());
        let offer = outcome.proposed_offer.unwrap();
        assert_eq!(offer.base_value.amount, Some(75.0));
        assert_eq!(offer.major_prizes, vec!["Trip to Tokyo"]);
    }

    #[tokio::test]
    async fn test_specialists_receive_their_prior_result() {
        let client = Arc::new(
            panel(offer_iq_reply(json!({"kind": "cashback", "amount": 60})))
                .chair(chair_reply(json!({"label": "A", "title": "Tune", "informed_by": ["offer_iq"], "offer_option": "1"}))),
        );
        RunImprovementUseCase::new(client.clone())
            .execute(&context(), &evaluation())
            .await
            .unwrap();

        let shopper = client
            .request_for(Seat::Specialist(SpecialistRole::Shopper))
            .unwrap();
        assert_eq!(shopper.payload["evaluation"]["own"]["role"], "shopper");
        assert_eq!(shopper.payload["evaluation"]["chair"]["verdict"], "ITERATE");
        assert_eq!(shopper.payload["offer_state"]["base_value"]["kind"], "cashback");

        let chair = client.request_for(Seat::Chair).unwrap();
        assert_eq!(chair.payload["improvements"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_second_guaranteed_type_rejects_package() {
        let client = Arc::new(
            panel(offer_iq_reply(json!({"kind": "voucher", "amount": 10})))
                .chair(chair_reply(json!({
                    "label": "A",
                    "title": "Voucher swap",
                    "informed_by": ["offer_iq"],
                    "offer_option": "1"
                }))),
        );
        let use_case = RunImprovementUseCase::new(client);

        let err = use_case.execute(&context(), &evaluation()).await.unwrap_err();
        match err {
            OrchestrationError::Validation(e) => {
                assert!(e
                    .findings
                    .iter()
                    .any(|f| f.code == FindingCode::SecondGuaranteedType));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unadopted_conflicting_option_is_flagged() {
        let offer_iq = json!({
            "options": [
                {"label": "1", "summary": "Voucher instead", "scale_zone": "ZONE_1_NORMAL",
                 "patch": {"base_value": {"kind": "voucher", "amount": 10}, "has_guaranteed_reward": true}}
            ],
            "recommended_option": "1"
        })
        .to_string();
        let client = Arc::new(panel(offer_iq).chair(chair_reply(json!({
            "label": "A",
            "title": "Tokyo story",
            "informed_by": ["offer_iq", "creative"],
            "scale_zone": "ZONE_1_NORMAL"
        }))));

        let outcome = RunImprovementUseCase::new(client)
            .execute(&context(), &evaluation())
            .await
            .unwrap();

        assert_eq!(outcome.findings.len(), 1);
        let finding = &outcome.findings[0];
        assert_eq!(finding.code, FindingCode::SecondGuaranteedType);
        assert!(!finding.is_error());
        assert_eq!(
            outcome.proposed_offer.unwrap().base_value.kind,
            BaseValueKind::Cashback
        );
    }

    #[tokio::test]
    async fn test_bold_package_without_readable_zone_rejected() {
        let mut bold = context();
        bold.ambition = AmbitionSetting::Bold;

        for zone in [None, Some("ZONE_ONE")] {
            let mut package = json!({
                "label": "A",
                "title": "Richer cashback",
                "informed_by": ["offer_iq"],
                "offer_option": "1"
            });
            if let Some(zone) = zone {
                package["scale_zone"] = json!(zone);
            }
            let client = Arc::new(
                panel(offer_iq_reply(json!({"kind": "cashback", "amount": 75})))
                    .chair(chair_reply(package)),
            );

            let err = RunImprovementUseCase::new(client)
                .execute(&bold, &evaluation())
                .await
                .unwrap_err();
            assert!(matches!(err, OrchestrationError::Validation(ref e)
                if e.findings.iter().any(|f| f.code == FindingCode::AmbitionDowngrade)));
        }
    }

    #[tokio::test]
    async fn test_offer_change_without_offer_iq_rejected() {
        let client = Arc::new(
            panel(offer_iq_reply(json!({"kind": "cashback", "amount": 60})))
                .chair(chair_reply(json!({
                    "label": "A",
                    "title": "Retail rework",
                    "informed_by": ["retail"],
                    "patch": {"entry_threshold": {"kind": "units", "value": 1}}
                }))),
        );
        let err = RunImprovementUseCase::new(client)
            .execute(&context(), &evaluation())
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::Validation(ref e)
            if e.findings.iter().any(|f| f.code == FindingCode::SliceViolation)));
    }

    #[tokio::test]
    async fn test_signature_drop_is_a_warning() {
        let client = Arc::new(
            panel(offer_iq_reply(json!({"kind": "cashback", "amount": 60})))
                .chair(chair_reply(json!({
                    "label": "A",
                    "title": "Cash prizes",
                    "informed_by": ["offer_iq"],
                    "patch": {"major_prizes": ["1000 cash"]},
                    "preserves_signature": false
                }))),
        );
        let outcome = RunImprovementUseCase::new(client)
            .execute(&context(), &evaluation())
            .await
            .unwrap();

        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].code, FindingCode::SignatureDropped);
        assert_eq!(
            outcome.proposed_offer.unwrap().major_prizes,
            vec!["1000 cash"]
        );
    }

    #[tokio::test]
    async fn test_missing_prior_result() {
        let client = Arc::new(ScriptedClient::new());
        let mut partial = evaluation();
        partial.specialists.retain(|s| s.role != SpecialistRole::Retail);

        let err = RunImprovementUseCase::new(client.clone())
            .execute(&context(), &partial)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::MissingPriorResult(SpecialistRole::Retail)
        ));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let client = Arc::new(panel(offer_iq_reply(json!({"kind": "cashback", "amount": 60}))));
        let token = CancellationToken::new();
        token.cancel();

        let err = RunImprovementUseCase::new(client.clone())
            .execute_with_progress(&context(), &evaluation(), &NoProgress, token)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(!client.was_called(Seat::Chair));
    }
}

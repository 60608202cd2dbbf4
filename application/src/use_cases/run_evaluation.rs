//! Run Evaluation use case
//!
//! Orchestrates an Evaluation round: every specialist judges the context in
//! parallel, then the chair reconciles the full ordered panel.

use super::error::OrchestrationError;
use super::rounds::{CouncilRounds, RoundControl, check_roles};
use crate::config::RoundParams;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::reasoning_client::ReasoningClient;
use council_domain::guard::{
    reconcile_snapshots, validate_chair_ambition, validate_disagreement_backing,
};
use council_domain::prompt::payload::{evaluation_chair_payload, evaluation_specialist_payload};
use council_domain::{
    ChairResult, Context, CouncilMode, EvaluationBundle, RoundPhase, RoundTracker, Seat,
    SpecialistResult, SpecialistRole, ValidationFinding, Verdict, parse_chair, parse_specialist,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Complete result of an Evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub chair: ChairResult,
    /// One result per declared role, in declared order
    pub specialists: Vec<SpecialistResult>,
    /// Findings that did not fail the round
    #[serde(default)]
    pub findings: Vec<ValidationFinding>,
}

impl EvaluationOutcome {
    /// The part of the outcome an Improvement round builds on.
    pub fn bundle(&self) -> EvaluationBundle {
        EvaluationBundle::new(self.chair.clone(), self.specialists.clone())
    }
}

/// Use case for running an Evaluation round
pub struct RunEvaluationUseCase<C: ReasoningClient + 'static> {
    rounds: CouncilRounds<C>,
    roles: Vec<SpecialistRole>,
}

impl<C: ReasoningClient + 'static> RunEvaluationUseCase<C> {
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

    /// Override the declared panel. Order is significant.
    pub fn with_roles(mut self, roles: Vec<SpecialistRole>) -> Self {
        self.roles = roles;
        self
    }

    /// Execute the use case with default (no-op) progress and no cancellation
    pub async fn execute(&self, context: &Context) -> Result<EvaluationOutcome, OrchestrationError> {
        self.execute_with_progress(context, &NoProgress, CancellationToken::new())
            .await
    }

    /// Execute the use case with progress callbacks and a cancellation token
    pub async fn execute_with_progress(
        &self,
        context: &Context,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<EvaluationOutcome, OrchestrationError> {
        let mut tracker = RoundTracker::new(CouncilMode::Evaluation);
        let result = self.run(context, &mut tracker, progress, cancel).await;
        if let Err(e) = &result {
            tracker.fail();
            warn!("Evaluation round failed: {}", e);
            progress.on_round_failed(&e.to_string());
        }
        result
    }

    async fn run(
        &self,
        context: &Context,
        tracker: &mut RoundTracker,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<EvaluationOutcome, OrchestrationError> {
        check_roles(&self.roles)?;
        context.validate()?;

        let params = self.rounds.params();
        let control = RoundControl::new(cancel, params.round_deadline);
        let mode = CouncilMode::Evaluation;
        info!(
            "Starting evaluation with {} specialists (ambition {})",
            self.roles.len(),
            context.ambition
        );

        // Specialists
        tracker.advance(RoundPhase::SpecialistsRunning)?;
        progress.on_phase_start(mode, &RoundPhase::SpecialistsRunning, self.roles.len());

        let payload = evaluation_specialist_payload(context);
        let requests = self
            .roles
            .iter()
            .map(|&role| {
                let seat = Seat::Specialist(role);
                let request = self
                    .rounds
                    .request(seat, mode, &context.policy_text, payload.clone());
                (role, request)
            })
            .collect();
        let specialists = self
            .rounds
            .specialist_round(requests, parse_specialist, &control, progress)
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
            evaluation_chair_payload(context, &specialists),
        );
        let mut chair = self
            .rounds
            .chair_round(request, parse_chair, &control, progress)
            .await?;

        progress.on_phase_complete(&RoundPhase::ChairRunning);

        let findings = self.check(context, &mut chair, &specialists)?;
        tracker.advance(RoundPhase::Complete)?;

        info!(
            "Evaluation complete: chair verdict {} (average score {:.1})",
            chair.verdict,
            chair.scores.average()
        );
        Ok(EvaluationOutcome {
            chair,
            specialists,
            findings,
        })
    }

    /// Run the post-parse validators and apply the validation policy.
    fn check(
        &self,
        context: &Context,
        chair: &mut ChairResult,
        specialists: &[SpecialistResult],
    ) -> Result<Vec<ValidationFinding>, OrchestrationError> {
        let verdicts: Vec<Verdict> = specialists.iter().map(|s| s.verdict).collect();
        let findings: Vec<ValidationFinding> = [
            reconcile_snapshots(&mut chair.specialists, specialists),
            validate_chair_ambition(
                context.ambition,
                chair.recommended_zone,
                chair.ambition_justification.as_deref(),
            ),
            validate_disagreement_backing(&verdicts, chair.backing.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        self.rounds.record_findings(&findings);
        Ok(self.rounds.params().validation.enforce(findings)?)
    }
}

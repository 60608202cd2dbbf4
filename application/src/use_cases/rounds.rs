//! Specialist and chair rounds
//!
//! The specialist round is a fork-join over the declared roles: every call
//! is launched at once, results are slotted back by index so the output
//! follows declared order, and the first failure aborts everything still in
//! flight. The chair round is a single call made only after that join.
//!
//! Both rounds honour a per-call timeout, an absolute round deadline and a
//! cancellation token.

use super::error::OrchestrationError;
use crate::config::RoundParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::ProgressNotifier;
use crate::ports::reasoning_client::{ReasoningClient, ReasoningError, ReasoningRequest};
use council_domain::{
    CouncilMode, DomainError, PromptComposer, RoundPhase, SchemaParseError, Seat, SpecialistRole,
    ValidationFinding,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::error::Elapsed;
use tokio::time::{Instant, sleep_until, timeout};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of one reasoning call wrapped in the per-call timeout.
type CallOutcome = Result<Result<String, ReasoningError>, Elapsed>;

/// Cancellation token plus the absolute deadline of a round.
#[derive(Debug, Clone)]
pub struct RoundControl {
    cancel: CancellationToken,
    deadline: Instant,
}

impl RoundControl {
    /// Start the deadline clock now.
    pub fn new(cancel: CancellationToken, round_deadline: Duration) -> Self {
        Self {
            cancel,
            deadline: Instant::now() + round_deadline,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Reject an empty or duplicated role list.
pub(crate) fn check_roles(roles: &[SpecialistRole]) -> Result<(), DomainError> {
    if roles.is_empty() {
        return Err(DomainError::NoRoles);
    }
    for (i, role) in roles.iter().enumerate() {
        if roles[..i].contains(role) {
            return Err(DomainError::DuplicateRole(role.to_string()));
        }
    }
    Ok(())
}

/// Runs specialist and chair rounds against one reasoning client.
pub struct CouncilRounds<C: ReasoningClient + 'static> {
    client: Arc<C>,
    params: RoundParams,
    logger: Arc<dyn ConversationLogger>,
}

impl<C: ReasoningClient + 'static> CouncilRounds<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            params: RoundParams::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: RoundParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &RoundParams {
        &self.params
    }

    /// Build the reasoning request for `seat`.
    pub fn request(
        &self,
        seat: Seat,
        mode: CouncilMode,
        policy_text: &str,
        payload: Value,
    ) -> ReasoningRequest {
        ReasoningRequest {
            seat,
            instructions: PromptComposer::compose(seat, mode, policy_text),
            payload,
            temperature: self.params.temperature_for(seat),
            expect_json: true,
            max_output_length: self.params.max_output_for(seat),
        }
    }

    /// Run one call per role concurrently and return the parsed results in
    /// the order the requests were given.
    pub async fn specialist_round<T>(
        &self,
        requests: Vec<(SpecialistRole, ReasoningRequest)>,
        parse: fn(SpecialistRole, &str) -> Result<T, SchemaParseError>,
        control: &RoundControl,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<T>, OrchestrationError> {
        let total = requests.len();
        info!("Specialist round: launching {} calls", total);

        let mut join_set = JoinSet::new();
        for (index, (role, request)) in requests.into_iter().enumerate() {
            self.log_request(&request);
            let client = Arc::clone(&self.client);
            let call_timeout = self.params.call_timeout;
            join_set.spawn(async move {
                let outcome = timeout(call_timeout, client.complete(&request)).await;
                (index, role, outcome)
            });
        }

        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
        let deadline = sleep_until(control.deadline);
        tokio::pin!(deadline);

        loop {
            let joined = tokio::select! {
                biased;
                _ = control.cancel.cancelled() => {
                    join_set.abort_all();
                    info!("Specialist round cancelled");
                    return Err(OrchestrationError::Cancelled);
                }
                _ = &mut deadline => {
                    join_set.abort_all();
                    warn!("Round deadline reached during specialist round");
                    return Err(OrchestrationError::RoundDeadlineExceeded);
                }
                joined = join_set.join_next() => joined,
            };
            let Some(joined) = joined else {
                break;
            };

            let settled = joined
                .map_err(|e| OrchestrationError::TaskFailed(e.to_string()))
                .and_then(|(index, role, outcome)| {
                    let seat = Seat::Specialist(role);
                    let parsed = self.settle(seat, outcome, |raw| parse(role, raw));
                    progress.on_seat_complete(&RoundPhase::SpecialistsRunning, &seat, parsed.is_ok());
                    parsed.map(|value| (index, value))
                });

            match settled {
                Ok((index, value)) => slots[index] = Some(value),
                Err(e) => {
                    // Any failure fails the round; nothing still running is needed
                    join_set.abort_all();
                    return Err(e);
                }
            }
        }

        slots
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| {
                OrchestrationError::TaskFailed("specialist round ended with unsettled seats".into())
            })
    }

    /// Make the single chair call and parse it.
    pub async fn chair_round<T>(
        &self,
        request: ReasoningRequest,
        parse: fn(&str) -> Result<T, SchemaParseError>,
        control: &RoundControl,
        progress: &dyn ProgressNotifier,
    ) -> Result<T, OrchestrationError> {
        info!("Chair round: calling chair");
        self.log_request(&request);

        let call = timeout(self.params.call_timeout, self.client.complete(&request));
        let outcome = tokio::select! {
            biased;
            _ = control.cancel.cancelled() => {
                info!("Chair round cancelled");
                return Err(OrchestrationError::Cancelled);
            }
            _ = sleep_until(control.deadline) => {
                warn!("Round deadline reached during chair round");
                return Err(OrchestrationError::RoundDeadlineExceeded);
            }
            outcome = call => outcome,
        };

        let parsed = self.settle(Seat::Chair, outcome, parse);
        progress.on_seat_complete(&RoundPhase::ChairRunning, &Seat::Chair, parsed.is_ok());
        parsed
    }

    /// Record findings in the operation log and the conversation log.
    pub fn record_findings(&self, findings: &[ValidationFinding]) {
        for finding in findings {
            warn!("Validation {}", finding);
            self.logger.log(ConversationEvent::new(
                "validation_finding",
                json!({
                    "severity": finding.severity,
                    "code": finding.code,
                    "message": finding.message,
                }),
            ));
        }
    }

    fn settle<T>(
        &self,
        seat: Seat,
        outcome: CallOutcome,
        parse: impl FnOnce(&str) -> Result<T, SchemaParseError>,
    ) -> Result<T, OrchestrationError> {
        let raw = match outcome {
            Err(_) => {
                warn!(
                    "Reasoning call for {} timed out after {:?}",
                    seat, self.params.call_timeout
                );
                return Err(OrchestrationError::Timeout { seat });
            }
            Ok(Err(e)) => {
                warn!("Reasoning call for {} failed: {}", seat, e);
                return Err(OrchestrationError::Reasoning { seat, source: e });
            }
            Ok(Ok(raw)) => raw,
        };

        debug!("{} responded ({} bytes)", seat, raw.len());
        self.logger.log(ConversationEvent::new(
            "reasoning_response",
            json!({
                "seat": seat.to_string(),
                "bytes": raw.len(),
                "raw": raw,
            }),
        ));

        parse(&raw).map_err(|e| {
            warn!("{} returned unusable output: {} (raw: {})", seat, e.kind, e.excerpt());
            self.logger.log(ConversationEvent::new(
                "schema_parse_error",
                json!({
                    "seat": seat.to_string(),
                    "error": e.kind.to_string(),
                    "raw": e.raw,
                }),
            ));
            OrchestrationError::SchemaParse { seat, source: e }
        })
    }

    fn log_request(&self, request: &ReasoningRequest) {
        debug!(
            "Request for {} ({} bytes of instructions)",
            request.seat,
            request.instructions.len()
        );
        self.logger.log(ConversationEvent::new(
            "reasoning_request",
            json!({
                "seat": request.seat.to_string(),
                "temperature": request.temperature,
                "max_output_length": request.max_output_length,
                "instructions_bytes": request.instructions.len(),
                "payload": request.payload,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{RecordingLogger, Reply, ScriptedClient, specialist_json};
    use council_domain::{SpecialistResult, Verdict, parse_specialist};

    fn rounds(client: ScriptedClient) -> CouncilRounds<ScriptedClient> {
        CouncilRounds::new(Arc::new(client)).with_params(
            RoundParams::default()
                .with_call_timeout(Duration::from_millis(200))
                .with_round_deadline(Duration::from_secs(5)),
        )
    }

    fn requests(
        rounds: &CouncilRounds<ScriptedClient>,
        roles: &[SpecialistRole],
    ) -> Vec<(SpecialistRole, ReasoningRequest)> {
        roles
            .iter()
            .map(|&role| {
                let seat = Seat::Specialist(role);
                (role, rounds.request(seat, CouncilMode::Evaluation, "", json!({})))
            })
            .collect()
    }

    fn control() -> RoundControl {
        RoundControl::new(CancellationToken::new(), Duration::from_secs(5))
    }

    #[test]
    fn test_check_roles() {
        assert_eq!(check_roles(&[]), Err(DomainError::NoRoles));
        assert_eq!(
            check_roles(&[SpecialistRole::Shopper, SpecialistRole::Shopper]),
            Err(DomainError::DuplicateRole("shopper".to_string()))
        );
        assert!(check_roles(&SpecialistRole::ALL).is_ok());
    }

    #[tokio::test]
    async fn test_declared_order_survives_out_of_order_completion() {
        let client = ScriptedClient::new()
            .reply(
                SpecialistRole::OfferIq,
                Reply::delayed(80, specialist_json("GO", "Value first.")),
            )
            .reply(
                SpecialistRole::Creative,
                Reply::delayed(5, specialist_json("KILL", "No story.")),
            )
            .reply(
                SpecialistRole::Shopper,
                Reply::delayed(40, specialist_json("ITERATE", "Too many steps.")),
            )
            .reply(
                SpecialistRole::Retail,
                Reply::delayed(0, specialist_json("GO", "Stores are ready.")),
            );
        let rounds = rounds(client);
        let requests = requests(&rounds, &SpecialistRole::ALL);

        let results: Vec<SpecialistResult> = rounds
            .specialist_round(requests, parse_specialist, &control(), &NoProgress)
            .await
            .unwrap();

        let roles: Vec<_> = results.iter().map(|r| r.role).collect();
        assert_eq!(roles, SpecialistRole::ALL.to_vec());
        assert_eq!(results[1].verdict, Verdict::Kill);
        assert_eq!(results[2].headline, "Too many steps.");
    }

    #[tokio::test]
    async fn test_malformed_output_fails_round() {
        let client = ScriptedClient::new()
            .reply(SpecialistRole::OfferIq, Reply::text(specialist_json("GO", "Fine.")))
            .reply(SpecialistRole::Creative, Reply::text("I love it!"))
            .reply(SpecialistRole::Shopper, Reply::Hang);
        let logger = Arc::new(RecordingLogger::default());
        let rounds = rounds(client).with_logger(logger.clone());
        let requests = requests(
            &rounds,
            &[
                SpecialistRole::OfferIq,
                SpecialistRole::Creative,
                SpecialistRole::Shopper,
            ],
        );

        let err = rounds
            .specialist_round(requests, parse_specialist, &control(), &NoProgress)
            .await
            .unwrap_err();

        match err {
            OrchestrationError::SchemaParse { seat, source } => {
                assert_eq!(seat, Seat::Specialist(SpecialistRole::Creative));
                assert_eq!(source.raw, "I love it!");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(logger.event_types().contains(&"schema_parse_error"));
    }

    #[tokio::test]
    async fn test_client_error_propagates_with_seat() {
        let client = ScriptedClient::new().reply(
            SpecialistRole::Retail,
            Reply::Error(ReasoningError::RateLimited("quota".into())),
        );
        let rounds = rounds(client);
        let requests = requests(&rounds, &[SpecialistRole::Retail]);

        let err = rounds
            .specialist_round(requests, parse_specialist, &control(), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::Reasoning {
                seat: Seat::Specialist(SpecialistRole::Retail),
                source: ReasoningError::RateLimited(_),
            }
        ));
    }

    #[tokio::test]
    async fn test_hung_call_times_out() {
        let client = ScriptedClient::new()
            .reply(SpecialistRole::OfferIq, Reply::text(specialist_json("GO", "Fine.")))
            .reply(SpecialistRole::Shopper, Reply::Hang);
        let rounds = rounds(client);
        let requests = requests(&rounds, &[SpecialistRole::OfferIq, SpecialistRole::Shopper]);

        let err = rounds
            .specialist_round(requests, parse_specialist, &control(), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::Timeout {
                seat: Seat::Specialist(SpecialistRole::Shopper)
            }
        ));
    }

    #[tokio::test]
    async fn test_round_deadline() {
        let client = ScriptedClient::new().reply(SpecialistRole::OfferIq, Reply::Hang);
        let rounds = CouncilRounds::new(Arc::new(client))
            .with_params(RoundParams::default().with_call_timeout(Duration::from_secs(30)));
        let requests = requests(&rounds, &[SpecialistRole::OfferIq]);
        let control = RoundControl::new(CancellationToken::new(), Duration::from_millis(50));

        let err = rounds
            .specialist_round(requests, parse_specialist, &control, &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::RoundDeadlineExceeded));
    }

    #[tokio::test]
    async fn test_cancellation_aborts_round() {
        let client = ScriptedClient::new()
            .reply(SpecialistRole::OfferIq, Reply::Hang)
            .reply(SpecialistRole::Creative, Reply::Hang);
        let rounds = rounds(client);
        let requests = requests(&rounds, &[SpecialistRole::OfferIq, SpecialistRole::Creative]);
        let token = CancellationToken::new();
        let control = RoundControl::new(token.clone(), Duration::from_secs(5));

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let err = rounds
            .specialist_round(requests, parse_specialist, &control, &NoProgress)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        canceller.await.unwrap();
    }

    #[tokio::test]
    async fn test_chair_round_respects_pre_cancelled_token() {
        let client = ScriptedClient::new().chair(Reply::text("{}"));
        let rounds = rounds(client);
        let request = rounds.request(Seat::Chair, CouncilMode::Evaluation, "", json!({}));
        let token = CancellationToken::new();
        token.cancel();
        let control = RoundControl::new(token, Duration::from_secs(5));

        let err = rounds
            .chair_round(request, council_domain::parse_chair, &control, &NoProgress)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_requests_and_responses_are_logged() {
        let client = ScriptedClient::new()
            .reply(SpecialistRole::OfferIq, Reply::text(specialist_json("GO", "Fine.")));
        let logger = Arc::new(RecordingLogger::default());
        let rounds = rounds(client).with_logger(logger.clone());
        let requests = requests(&rounds, &[SpecialistRole::OfferIq]);

        rounds
            .specialist_round(requests, parse_specialist, &control(), &NoProgress)
            .await
            .unwrap();
        assert_eq!(
            logger.event_types(),
            vec!["reasoning_request", "reasoning_response"]
        );
    }
}

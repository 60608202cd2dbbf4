//! Test doubles shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::progress::ProgressNotifier;
use crate::ports::reasoning_client::{ReasoningClient, ReasoningError, ReasoningRequest};
use async_trait::async_trait;
use council_domain::{CouncilMode, RoundPhase, Seat, SpecialistRole};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted response.
pub(crate) enum Reply {
    Text(String),
    Delayed(Duration, String),
    Error(ReasoningError),
    /// Never resolves
    Hang,
}

impl Reply {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub(crate) fn delayed(millis: u64, text: impl Into<String>) -> Self {
        Reply::Delayed(Duration::from_millis(millis), text.into())
    }
}

/// Mock client that answers each seat from its own queue of replies and
/// records every call it receives.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    scripts: Mutex<HashMap<Seat, VecDeque<Reply>>>,
    requests: Mutex<Vec<ReasoningRequest>>,
    events: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, role: SpecialistRole, reply: Reply) -> Self {
        self.push(Seat::Specialist(role), reply);
        self
    }

    pub(crate) fn chair(self, reply: Reply) -> Self {
        self.push(Seat::Chair, reply);
        self
    }

    fn push(&self, seat: Seat, reply: Reply) {
        self.scripts
            .lock()
            .unwrap()
            .entry(seat)
            .or_default()
            .push_back(reply);
    }

    /// Requests in the order calls were made.
    pub(crate) fn requests(&self) -> Vec<ReasoningRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_for(&self, seat: Seat) -> Option<ReasoningRequest> {
        self.requests().into_iter().find(|r| r.seat == seat)
    }

    /// `start:<seat>` / `done:<seat>` markers in the order they happened.
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn was_called(&self, seat: Seat) -> bool {
        self.requests().iter().any(|r| r.seat == seat)
    }
}

#[async_trait]
impl ReasoningClient for ScriptedClient {
    async fn complete(&self, request: &ReasoningRequest) -> Result<String, ReasoningError> {
        self.requests.lock().unwrap().push(request.clone());
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}", request.seat));

        let reply = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&request.seat)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Reply::Error(ReasoningError::Other(format!("no script for {}", request.seat)))
            });

        let result = match reply {
            Reply::Text(text) => Ok(text),
            Reply::Delayed(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Reply::Error(e) => Err(e),
            Reply::Hang => std::future::pending().await,
        };

        self.events
            .lock()
            .unwrap()
            .push(format!("done:{}", request.seat));
        result
    }
}

/// Conversation logger that keeps every event in memory.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

/// Progress notifier that records phase and seat callbacks.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) calls: Mutex<Vec<String>>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_phase_start(&self, mode: CouncilMode, phase: &RoundPhase, total_seats: usize) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("start:{}:{}:{}", mode, phase, total_seats));
    }

    fn on_seat_complete(&self, _phase: &RoundPhase, seat: &Seat, success: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("seat:{}:{}", seat, success));
    }

    fn on_phase_complete(&self, phase: &RoundPhase) {
        self.calls.lock().unwrap().push(format!("done:{}", phase));
    }

    fn on_round_failed(&self, _reason: &str) {
        self.calls.lock().unwrap().push("failed".to_string());
    }
}

pub(crate) fn specialist_json(verdict: &str, headline: &str) -> String {
    json!({
        "verdict": verdict,
        "headline": headline,
        "scale_zone": "ZONE_1_NORMAL",
        "cadence_label": "WINNER_EVERY_DAY",
        "key_points": ["Clear mechanic"],
        "must_fix": [],
        "nice_to_have": ["Stronger pack shot"],
        "notes_for_chair": ""
    })
    .to_string()
}

/// A well-formed evaluation chair reply; `extra` fields are merged on top.
pub(crate) fn chair_json(verdict: &str, extra: Value) -> String {
    let mut chair = json!({
        "verdict": verdict,
        "scores": {
            "objective_fit": 7,
            "hook_strength": 6.5,
            "mechanic_fit": 8,
            "frequency_feel": 7,
            "friction": 6,
            "retail_readiness": 7
        },
        "top_reasons": ["Simple value", "Daily winners"],
        "must_fix": [],
        "quick_wins": ["Bigger on-pack flash"],
        "benchmark": "In line with category leaders."
    });
    if let (Some(chair), Value::Object(extra)) = (chair.as_object_mut(), extra) {
        chair.extend(extra);
    }
    chair.to_string()
}

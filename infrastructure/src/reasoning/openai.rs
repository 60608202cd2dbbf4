//! OpenAI-compatible chat completions adapter.
//!
//! Works with any service that speaks `/v1/chat/completions`. The seat's
//! instructions become the system message and the payload is sent as the
//! user message. JSON mode is requested through `response_format` whenever
//! the caller expects a JSON object back.

use super::retry::RetryPolicy;
use crate::config::FileReasoningConfig;
use async_trait::async_trait;
use council_application::{ReasoningClient, ReasoningError, ReasoningRequest};
use council_domain::Seat;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Reasoning client for OpenAI-compatible services.
#[derive(Clone)]
pub struct OpenAiReasoningClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    specialist_model: String,
    chair_model: String,
    retry: RetryPolicy,
}

impl OpenAiReasoningClient {
    /// Build a client from the `[reasoning]` config section.
    ///
    /// The API key is read from the configured environment variable. A
    /// missing key is allowed for local services that need none.
    pub fn from_config(config: &FileReasoningConfig) -> Result<Self, ReasoningError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!(
                "{} is not set; calling {} without credentials",
                config.api_key_env, config.base_url
            );
        }

        Self::new(
            &config.base_url,
            api_key,
            Duration::from_secs(config.request_timeout_secs),
        )
        .map(|client| {
            client
                .with_models(&config.specialist_model, &config.chair_model)
                .with_retry(RetryPolicy::new(config.max_retries))
        })
    }

    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, ReasoningError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ReasoningError::Other(format!("failed to create HTTP client: {}", e)))?;

        let defaults = FileReasoningConfig::default();
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            api_key,
            specialist_model: defaults.specialist_model,
            chair_model: defaults.chair_model,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_models(mut self, specialist: &str, chair: &str) -> Self {
        self.specialist_model = specialist.to_string();
        self.chair_model = chair.to_string();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn model_for(&self, seat: Seat) -> &str {
        if seat.is_chair() {
            &self.chair_model
        } else {
            &self.specialist_model
        }
    }

    fn to_chat_request<'a>(&'a self, request: &'a ReasoningRequest) -> ChatRequest<'a> {
        // A string payload is sent as-is; anything else as compact JSON.
        let user = match &request.payload {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        ChatRequest {
            model: self.model_for(request.seat),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.instructions.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_length,
            response_format: request
                .expect_json
                .then_some(ResponseFormat { kind: "json_object" }),
        }
    }

    async fn send_once(&self, body: &ChatRequest<'_>) -> Result<String, ReasoningError> {
        let mut builder = self.client.post(&self.endpoint).json(body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(map_status(status, text));
        }
        extract_content(&text)
    }
}

#[async_trait]
impl ReasoningClient for OpenAiReasoningClient {
    async fn complete(&self, request: &ReasoningRequest) -> Result<String, ReasoningError> {
        let body = self.to_chat_request(request);
        debug!(
            "Calling {} for {} (model {}, json {})",
            self.endpoint, request.seat, body.model, request.expect_json
        );

        let label = format!("reasoning call for {}", request.seat);
        self.retry.run(&label, || self.send_once(&body)).await
    }
}

fn map_transport_error(e: reqwest::Error) -> ReasoningError {
    if e.is_timeout() {
        ReasoningError::Timeout
    } else if e.is_connect() || e.is_request() {
        ReasoningError::Connection(e.to_string())
    } else if e.is_decode() || e.is_body() {
        ReasoningError::InvalidResponse(e.to_string())
    } else {
        ReasoningError::Other(e.to_string())
    }
}

fn map_status(status: StatusCode, body: String) -> ReasoningError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        ReasoningError::RateLimited(body)
    } else {
        ReasoningError::Status {
            code: status.as_u16(),
            body,
        }
    }
}

/// Pull the first choice's message text out of a completions response body.
fn extract_content(body: &str) -> Result<String, ReasoningError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ReasoningError::InvalidResponse(format!("malformed response: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ReasoningError::InvalidResponse("response has no choices".to_string()))?;

    if choice.finish_reason.as_deref() == Some("length") {
        warn!("Reasoning output was cut off at the length limit");
    }

    match choice.message.content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ReasoningError::InvalidResponse(
            "response message is empty".to_string(),
        )),
    }
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

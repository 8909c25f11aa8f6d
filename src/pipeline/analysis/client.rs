use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Deserialize;

use super::request::GenerateContentRequest;
use super::AttemptError;
use crate::config::AnalyzerConfig;

/// Remote model backend abstraction (allows mocking).
#[async_trait]
pub trait ModelClient {
    /// Issue one generateContent call, returning the raw text body of the
    /// first candidate. An empty body is a valid return; the caller decides
    /// how to treat it.
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AttemptError>;
}

/// Gemini HTTP client for remote inference.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client from pipeline configuration. The per-attempt timeout
    /// is baked into the HTTP client and is identical for every tier.
    pub fn new(config: &AnalyzerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Response envelope from generateContent.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    /// Reasoning traces are interleaved as thought parts; they are not part
    /// of the answer body.
    #[serde(default)]
    thought: bool,
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AttemptError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AttemptError::Transport(format!("cannot reach {}", self.base_url))
                } else if e.is_timeout() {
                    AttemptError::Transport(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    AttemptError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AttemptError::ResponseParsing(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

#[derive(Default)]
struct MockState {
    outcomes: Mutex<VecDeque<Result<String, AttemptError>>>,
    calls: AtomicUsize,
}

/// Mock model client for testing — replays a scripted sequence of outcomes
/// and counts the calls it observes. Clones share state so tests can keep a
/// handle after injecting the mock into an analyzer.
#[derive(Clone, Default)]
pub struct MockModelClient {
    state: Arc<MockState>,
}

impl MockModelClient {
    pub fn script(outcomes: Vec<Result<String, AttemptError>>) -> Self {
        Self {
            state: Arc::new(MockState {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of generate calls observed so far.
    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, _request: &GenerateContentRequest) -> Result<String, AttemptError> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .outcomes
            .lock()
            .expect("mock state poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(AttemptError::EmptyResponse))
    }
}

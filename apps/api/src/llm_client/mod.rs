/// LLM Client: the Text-Generation Gateway. Every evaluation component talks to
/// the model through `TextGenerator`; nothing else touches the network.
///
/// ARCHITECTURAL RULE: the gateway never degrades to a fallback. Callers own the
/// per-sub-score fallback shape and must catch `GenerationError` themselves.
///
/// Model: gemini-2.0-flash (hardcoded, not configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash";
const MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("Could not parse {expected} from model response: {response:?}")]
    Parse {
        expected: &'static str,
        response: String,
    },

    #[error("Generation failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<GenerationError>,
    },
}

/// Prompt → text service. Stateless; safe to call concurrently for independent prompts.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Bounded linear backoff: failed attempt `n` waits `n * base_delay` before the next.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn with_base_delay(base_delay: Duration) -> Self {
        Self {
            base_delay,
            ..Self::default()
        }
    }

    fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_tokens: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub output_tokens: u32,
}

impl GenerateContentResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// Gemini `generateContent` client with bounded retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    retry: RetryPolicy,
}

impl LlmClient {
    pub fn new(api_key: String, api_base: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint: format!(
                "{}/models/{MODEL}:generateContent",
                api_base.trim_end_matches('/')
            ),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// One round-trip. Any non-2xx status, transport failure, undecodable body or
    /// blank text is reported as an error for the retry loop to handle.
    async fn attempt(&self, prompt: &str) -> Result<String, GenerationError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Generation succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_tokens, usage.output_tokens
            );
        }

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(GenerationError::EmptyContent),
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let attempts = self.retry.max_attempts.max(1);
        let mut last_error: Option<GenerationError> = None;

        for attempt in 1..=attempts {
            match self.attempt(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(attempt, attempts, error = %e, "Generation attempt failed");
                    last_error = Some(e);
                }
            }

            if attempt < attempts {
                let delay = self.retry.delay_after(attempt);
                debug!("Retrying generation after {}ms", delay.as_millis());
                tokio::time::sleep(delay).await;
            }
        }

        Err(GenerationError::Exhausted {
            attempts,
            last: Box::new(last_error.unwrap_or(GenerationError::EmptyContent)),
        })
    }
}

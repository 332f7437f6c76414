//! In-memory `TextGenerator` doubles for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerationError, TextGenerator};

/// Returns the same text for every prompt and counts calls.
pub struct ConstantGenerator {
    response: String,
    calls: AtomicUsize,
}

impl ConstantGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ConstantGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Behaves like a gateway that exhausted its retries on every call.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Exhausted {
            attempts: 3,
            last: Box::new(GenerationError::Api {
                status: 429,
                message: "rate limited".to_string(),
            }),
        })
    }
}

/// Panics on every call, simulating a catastrophic per-question failure.
pub struct PanickingGenerator;

#[async_trait]
impl TextGenerator for PanickingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        panic!("generator crashed");
    }
}

/// Answers with the response of the first rule whose needle appears in the prompt;
/// prompts matching no rule fail. Records every prompt it sees.
pub struct ScriptedGenerator {
    rules: Vec<(String, String)>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(rules: &[(&str, &str)]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|(needle, response)| (needle.to_string(), response.to_string()))
                .collect(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .ok_or(GenerationError::EmptyContent)
    }
}

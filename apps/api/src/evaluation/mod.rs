// Interview Evaluation Pipeline
// Implements: relevance, content scoring, skill analysis, feedback, skill tagging,
// per-question evaluation and report aggregation, with a deterministic heuristic
// fallback for every model-derived value.
// All model calls go through llm_client::TextGenerator.

use thiserror::Error;

use crate::evaluation::evaluator::EvaluationStage;

pub mod content;
pub mod evaluator;
pub mod fallback;
pub mod feedback;
pub mod handlers;
pub mod heuristics;
pub mod parse;
pub mod prompts;
pub mod relevance;
pub mod report;
pub mod skill_tag;
pub mod skills;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Invalid evaluation transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: EvaluationStage,
        to: EvaluationStage,
    },

    #[error("Evaluation task failed: {0}")]
    TaskFailed(String),

    #[error("Evaluation could not complete: {0}")]
    AggregateFailure(String),
}

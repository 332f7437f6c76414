use sqlx::PgPool;

use crate::evaluation::report::InterviewEvaluator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Evaluation pipeline with its injected text-generation gateway.
    pub evaluator: InterviewEvaluator,
}

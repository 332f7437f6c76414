//! The single try-model-then-heuristic combinator shared by every sub-score.

use std::future::Future;

use tracing::warn;

use crate::llm_client::GenerationError;
use crate::models::interview::ScoreSource;

/// A sub-score value together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub value: T,
    pub source: ScoreSource,
}

impl<T> Scored<T> {
    pub fn rule(value: T) -> Self {
        Self {
            value,
            source: ScoreSource::Rule,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Scored<U> {
        Scored {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Awaits the model path; on any `GenerationError` (transport, exhausted retries
/// or unparseable output) substitutes the heuristic. Errors never escape.
pub async fn with_fallback<T, F, H>(dimension: &'static str, model: F, heuristic: H) -> Scored<T>
where
    F: Future<Output = Result<T, GenerationError>>,
    H: FnOnce() -> T,
{
    match model.await {
        Ok(value) => Scored {
            value,
            source: ScoreSource::Model,
        },
        Err(e) => {
            warn!(dimension, error = %e, "Model evaluation failed, using heuristic");
            Scored {
                value: heuristic(),
                source: ScoreSource::Heuristic,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_model_value_kept_on_success() {
        let scored = with_fallback("relevance", async { Ok::<u8, GenerationError>(8) }, || 3).await;
        assert_eq!(scored.value, 8);
        assert_eq!(scored.source, ScoreSource::Model);
    }

    #[tokio::test]
    async fn test_heuristic_substituted_on_error() {
        let scored = with_fallback(
            "relevance",
            async { Err::<u8, _>(GenerationError::EmptyContent) },
            || 3,
        )
        .await;
        assert_eq!(scored.value, 3);
        assert_eq!(scored.source, ScoreSource::Heuristic);
    }

    #[tokio::test]
    async fn test_heuristic_not_run_when_model_succeeds() {
        let mut ran = false;
        with_fallback("content", async { Ok::<u8, GenerationError>(5) }, || {
            ran = true;
            0
        })
        .await;
        assert!(!ran);
    }

    #[test]
    fn test_scored_map_keeps_source() {
        let scored = Scored::rule(2u8).map(|v| v + 1);
        assert_eq!(scored.value, 3);
        assert_eq!(scored.source, ScoreSource::Rule);
    }
}

//! Parsing of free-text model responses into bounded integer scores.

use crate::llm_client::GenerationError;
use crate::models::interview::{SkillScores, NEUTRAL_SKILL_SCORE};

const MAX_SCORE: u64 = 10;

/// First run of ASCII digits in `text`, saturating on overflow.
pub fn first_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// First integer in the response clamped to [0, 10]; no integer is a parse failure.
pub fn parse_score(response: &str, expected: &'static str) -> Result<u8, GenerationError> {
    first_integer(response)
        .map(|n| n.min(MAX_SCORE) as u8)
        .ok_or_else(|| GenerationError::Parse {
            expected,
            response: response.to_string(),
        })
}

/// Four comma-separated scores in fixed order. Each field is parsed and clamped
/// independently; a missing or unparseable field defaults to neutral.
pub fn parse_skill_scores(response: &str) -> SkillScores {
    let mut fields = response.split(',').map(|field| {
        first_integer(field)
            .map(|n| n.min(MAX_SCORE) as u8)
            .unwrap_or(NEUTRAL_SKILL_SCORE)
    });
    let mut next = || fields.next().unwrap_or(NEUTRAL_SKILL_SCORE);

    SkillScores {
        communication: next(),
        grammar: next(),
        attitude: next(),
        soft_skills: next(),
    }
}

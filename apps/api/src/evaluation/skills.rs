//! Skill Analyzer: communication, grammar, attitude and soft skills, each 0–10.
//!
//! The relevance downgrade runs exactly once, after the model-or-heuristic result
//! has been selected.

use crate::evaluation::fallback::{with_fallback, Scored};
use crate::evaluation::heuristics;
use crate::evaluation::parse::parse_skill_scores;
use crate::evaluation::prompts::{MEDIA_NOTE, SKILLS_PROMPT_TEMPLATE};
use crate::llm_client::prompts::FOUR_SCORES_INSTRUCTION;
use crate::llm_client::{GenerationError, TextGenerator};
use crate::models::interview::SkillScores;

fn build_prompt(question: &str, answer: &str, has_audio: bool) -> String {
    SKILLS_PROMPT_TEMPLATE
        .replace("{output_instruction}", FOUR_SCORES_INSTRUCTION)
        .replace("{media_note}", if has_audio { MEDIA_NOTE } else { "" })
        .replace("{question}", question)
        .replace("{answer}", answer)
}

async fn analyze_with_model(
    llm: &dyn TextGenerator,
    question: &str,
    answer: &str,
    has_audio: bool,
) -> Result<SkillScores, GenerationError> {
    let response = llm
        .generate(&build_prompt(question, answer, has_audio))
        .await?;
    Ok(parse_skill_scores(&response))
}

fn reduce(score: u8, by: u8, floor: u8) -> u8 {
    score.saturating_sub(by).max(floor)
}

/// Lowers communication and soft skills for off-topic answers.
/// relevance ≤ 2: −3 with floor 1; relevance in [3, 5): −2 with floor 2.
pub fn downgrade_for_relevance(scores: SkillScores, relevance: u8) -> SkillScores {
    let (by, floor) = match relevance {
        0..=2 => (3, 1),
        3..=4 => (2, 2),
        _ => return scores,
    };
    SkillScores {
        communication: reduce(scores.communication, by, floor),
        soft_skills: reduce(scores.soft_skills, by, floor),
        ..scores
    }
}

pub async fn analyze_skills(
    llm: &dyn TextGenerator,
    question: &str,
    answer: &str,
    relevance: u8,
    has_audio: bool,
) -> Scored<SkillScores> {
    let selected = if heuristics::is_blank(answer) {
        Scored::rule(heuristics::skills(answer))
    } else {
        with_fallback(
            "skills",
            analyze_with_model(llm, question, answer, has_audio),
            || heuristics::skills(answer),
        )
        .await
    };

    selected.map(|scores| downgrade_for_relevance(scores.clamped(), relevance))
}

/// Network-free skill scores under the same downgrade.
pub fn offline_skill_scores(answer: &str, relevance: u8) -> SkillScores {
    downgrade_for_relevance(heuristics::skills(answer), relevance)
}

//! Content Scorer: correctness and completeness against a generated ideal answer.
//!
//! Relevance policy (applied whichever path produced the score):
//! - relevance ≤ 2: the content score is the relevance score; the model is not asked.
//! - relevance in [3, 5): the content score is capped at relevance + 1.

use crate::evaluation::fallback::{with_fallback, Scored};
use crate::evaluation::heuristics;
use crate::evaluation::parse::parse_score;
use crate::evaluation::prompts::{
    CONTENT_PROMPT_TEMPLATE, IDEAL_ANSWER_PROMPT_TEMPLATE, IDEAL_ANSWER_UNAVAILABLE,
};
use crate::llm_client::prompts::{PLAIN_TEXT_INSTRUCTION, SINGLE_SCORE_INSTRUCTION};
use crate::llm_client::{GenerationError, TextGenerator};

/// Highest relevance at which an answer is treated as irrelevant.
pub const IRRELEVANT_MAX: u8 = 2;
/// Relevance below this caps the content score.
const CAP_BELOW_RELEVANCE: u8 = 5;

/// One unscored model call. Failure substitutes a placeholder and never aborts scoring.
pub async fn generate_ideal_answer(llm: &dyn TextGenerator, question: &str) -> Scored<String> {
    let prompt = IDEAL_ANSWER_PROMPT_TEMPLATE
        .replace("{output_instruction}", PLAIN_TEXT_INSTRUCTION)
        .replace("{question}", question);
    with_fallback("ideal_answer", llm.generate(&prompt), || {
        IDEAL_ANSWER_UNAVAILABLE.to_string()
    })
    .await
}

fn build_prompt(question: &str, ideal_answer: &str, answer: &str) -> String {
    CONTENT_PROMPT_TEMPLATE
        .replace("{output_instruction}", SINGLE_SCORE_INSTRUCTION)
        .replace("{question}", question)
        .replace("{ideal_answer}", ideal_answer)
        .replace("{answer}", answer)
}

async fn score_with_model(
    llm: &dyn TextGenerator,
    question: &str,
    ideal_answer: &str,
    answer: &str,
) -> Result<u8, GenerationError> {
    let response = llm
        .generate(&build_prompt(question, ideal_answer, answer))
        .await?;
    parse_score(&response, "content score")
}

/// Caps a content score when relevance is low.
pub fn cap_for_relevance(score: u8, relevance: u8) -> u8 {
    if relevance < CAP_BELOW_RELEVANCE {
        score.min(relevance + 1)
    } else {
        score
    }
}

pub async fn score_content(
    llm: &dyn TextGenerator,
    question: &str,
    ideal_answer: &str,
    answer: &str,
    relevance: u8,
) -> Scored<u8> {
    if heuristics::is_blank(answer) {
        return Scored::rule(0);
    }
    if relevance <= IRRELEVANT_MAX {
        return Scored::rule(relevance);
    }

    with_fallback(
        "content",
        score_with_model(llm, question, ideal_answer, answer),
        || heuristics::content(question, answer),
    )
    .await
    .map(|score| cap_for_relevance(score, relevance))
}

/// Network-free content score under the same relevance policy.
pub fn offline_content_score(question: &str, answer: &str, relevance: u8) -> u8 {
    if relevance <= IRRELEVANT_MAX {
        return relevance;
    }
    cap_for_relevance(heuristics::content(question, answer), relevance)
}

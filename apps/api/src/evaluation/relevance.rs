//! Relevance Assessor: how on-topic an answer is, 0–10.

use crate::evaluation::fallback::{with_fallback, Scored};
use crate::evaluation::heuristics;
use crate::evaluation::parse::parse_score;
use crate::evaluation::prompts::RELEVANCE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::SINGLE_SCORE_INSTRUCTION;
use crate::llm_client::{GenerationError, TextGenerator};

fn build_prompt(question: &str, answer: &str) -> String {
    RELEVANCE_PROMPT_TEMPLATE
        .replace("{output_instruction}", SINGLE_SCORE_INSTRUCTION)
        .replace("{question}", question)
        .replace("{answer}", answer)
}

async fn assess_with_model(
    llm: &dyn TextGenerator,
    question: &str,
    answer: &str,
) -> Result<u8, GenerationError> {
    let response = llm.generate(&build_prompt(question, answer)).await?;
    parse_score(&response, "relevance score")
}

/// Blank answers score 0 without a model call.
pub async fn assess_relevance(llm: &dyn TextGenerator, question: &str, answer: &str) -> Scored<u8> {
    if heuristics::is_blank(answer) {
        return Scored::rule(0);
    }
    with_fallback(
        "relevance",
        assess_with_model(llm, question, answer),
        || heuristics::relevance(question, answer),
    )
    .await
}

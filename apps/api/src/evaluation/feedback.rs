//! Feedback Synthesizer: prose feedback for one answer.

use crate::evaluation::fallback::{with_fallback, Scored};
use crate::evaluation::heuristics;
use crate::evaluation::prompts::FEEDBACK_PROMPT_TEMPLATE;
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::TextGenerator;

/// Scores the feedback is written against.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackScores {
    pub content: u8,
    pub relevance: u8,
}

fn build_prompt(question: &str, answer: &str, ideal_answer: &str, scores: FeedbackScores) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{output_instruction}", PLAIN_TEXT_INSTRUCTION)
        .replace("{content_score}", &scores.content.to_string())
        .replace("{relevance_score}", &scores.relevance.to_string())
        .replace("{question}", question)
        .replace("{ideal_answer}", ideal_answer)
        .replace("{answer}", answer)
}

/// Model text is returned verbatim; the fallback is a score-banded template.
pub async fn synthesize_feedback(
    llm: &dyn TextGenerator,
    question: &str,
    answer: &str,
    ideal_answer: &str,
    scores: FeedbackScores,
) -> Scored<String> {
    if heuristics::is_blank(answer) {
        return Scored::rule(heuristics::feedback(scores.content).to_string());
    }
    let prompt = build_prompt(question, answer, ideal_answer, scores);
    with_fallback("feedback", llm.generate(&prompt), || {
        heuristics::feedback(scores.content).to_string()
    })
    .await
}

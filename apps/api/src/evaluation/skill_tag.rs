//! Skill-tag assignment: which skill a question assesses.
//!
//! Precedence: the question's own tag, then a dedicated classification call
//! constrained to the interview's skill list, then keyword categorization.

use crate::evaluation::fallback::{with_fallback, Scored};
use crate::evaluation::heuristics;
use crate::evaluation::prompts::SKILL_TAG_PROMPT_TEMPLATE;
use crate::llm_client::{GenerationError, TextGenerator};

fn build_prompt(question: &str, skills: &[String]) -> String {
    SKILL_TAG_PROMPT_TEMPLATE
        .replace("{skills}", &skills.join(", "))
        .replace("{question}", question)
}

/// Matches the first response line against the list, case-insensitively.
fn match_skill(response: &str, skills: &[String]) -> Result<String, GenerationError> {
    let line = response
        .lines()
        .map(|l| l.trim().trim_matches(|c: char| c == '"' || c == '.' || c == '*'))
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    skills
        .iter()
        .find(|s| s.trim().eq_ignore_ascii_case(line))
        .cloned()
        .ok_or_else(|| GenerationError::Parse {
            expected: "skill from list",
            response: response.to_string(),
        })
}

async fn classify_with_model(
    llm: &dyn TextGenerator,
    question: &str,
    skills: &[String],
) -> Result<String, GenerationError> {
    let response = llm.generate(&build_prompt(question, skills)).await?;
    match_skill(&response, skills)
}

pub async fn assign_skill_tag(
    llm: &dyn TextGenerator,
    question: &str,
    explicit_tag: Option<&str>,
    skills: &[String],
) -> Scored<String> {
    if let Some(tag) = explicit_tag.map(str::trim).filter(|t| !t.is_empty()) {
        return Scored::rule(tag.to_string());
    }
    if skills.is_empty() {
        return Scored::rule(heuristics::categorize_skill(question).to_string());
    }
    with_fallback(
        "skill_tag",
        classify_with_model(llm, question, skills),
        || heuristics::categorize_skill(question).to_string(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::testing::ConstantGenerator;
    use crate::models::interview::ScoreSource;

    fn skills() -> Vec<String> {
        vec!["Rust".to_string(), "System Design".to_string()]
    }

    #[test]
    fn test_match_skill_is_case_insensitive() {
        assert_eq!(match_skill("system design\n", &skills()).unwrap(), "System Design");
        assert_eq!(match_skill("\"Rust\".", &skills()).unwrap(), "Rust");
    }

    #[test]
    fn test_match_skill_rejects_unlisted() {
        assert!(match_skill("Kubernetes", &skills()).is_err());
    }

    #[tokio::test]
    async fn test_explicit_tag_wins() {
        let llm = ConstantGenerator::new("Rust");
        let tag = assign_skill_tag(&llm, "Q?", Some("Leadership"), &skills()).await;
        assert_eq!(tag.value, "Leadership");
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_classification_call_when_list_given() {
        let llm = ConstantGenerator::new("System Design");
        let tag = assign_skill_tag(&llm, "How would you shard a database?", None, &skills()).await;
        assert_eq!(tag.value, "System Design");
        assert_eq!(tag.source, ScoreSource::Model);
    }

    #[tokio::test]
    async fn test_unlisted_answer_falls_back_to_keywords() {
        let llm = ConstantGenerator::new("Here is some feedback about your answer...");
        let tag = assign_skill_tag(&llm, "Describe a difficult bug", None, &skills()).await;
        assert_eq!(tag.value, "Problem Solving");
        assert_eq!(tag.source, ScoreSource::Heuristic);
    }

    #[tokio::test]
    async fn test_no_list_uses_keywords_without_model() {
        let llm = ConstantGenerator::new("Rust");
        let tag = assign_skill_tag(&llm, "Tell me about your background", None, &[]).await;
        assert_eq!(tag.value, "Experience");
        assert_eq!(tag.source, ScoreSource::Rule);
        assert_eq!(llm.calls(), 0);
    }
}

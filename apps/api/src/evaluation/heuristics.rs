//! Fallback Heuristic Engine: deterministic, network-free stand-ins for every
//! model-derived sub-score.
//!
//! Every function here is a pure function of its string inputs: same input,
//! same output, no clock, no randomness, no I/O. The heuristics never claim the
//! top content bands (8–10) because they cannot verify factual correctness.

use crate::models::interview::SkillScores;

/// Words of this many characters or fewer are ignored for overlap.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lower bounds of relevance bands 2..=10; a non-zero ratio always scores at least 1.
const RELEVANCE_BAND_FLOORS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

const CONTENT_OVERLAP_CAP: u8 = 6;
const CONTENT_HEURISTIC_CEILING: u8 = 7;

const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "helpful",
    "improve",
    "learn",
    "understand",
];
const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad", "terrible", "hate", "difficult", "problem", "issue", "wrong",
];

pub const FEEDBACK_POOR: &str = "This answer does not address the question. \
    Focus on responding directly to what was asked before adding detail.";
pub const FEEDBACK_NEEDS_WORK: &str = "The answer is on the right track but thin. \
    Be more specific and add detail that ties back to the question.";
pub const FEEDBACK_GOOD: &str = "Good effort. \
    Strengthen the answer with a concrete example or measurable result.";

pub const GENERAL_SKILL: &str = "General";

/// Checked in order; the first category with a matching keyword wins.
const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Experience", &["experience", "background", "work"]),
    ("Technical Skills", &["skill", "technology", "tool"]),
    ("Problem Solving", &["challenge", "problem", "difficult"]),
    ("Teamwork", &["team", "collaboration"]),
    ("Career Goals", &["goal", "future", "plan"]),
    ("Self Assessment", &["strength", "weakness", "improve"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Tokenization
// ────────────────────────────────────────────────────────────────────────────

pub fn is_blank(answer: &str) -> bool {
    answer.trim().is_empty()
}

/// Lowercased words longer than three characters, surrounding punctuation stripped.
fn keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
        .collect()
}

/// Returns (question keywords found in the answer, total question keywords).
/// Repeated question keywords count once per occurrence.
fn keyword_overlap(question: &str, answer: &str) -> (usize, usize) {
    let question_words = keywords(question);
    let answer_words = keywords(answer);
    let common = question_words
        .iter()
        .filter(|w| answer_words.contains(*w))
        .count();
    (common, question_words.len())
}

// ────────────────────────────────────────────────────────────────────────────
// Relevance
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-overlap relevance in [0, 10].
///
/// ratio = |common| / |question keywords|, mapped onto ten equal-width bands:
/// 0 → 0, (0, 0.1) → 1, [0.1, 0.2) → 2, … , [0.9, 1] → 10.
pub fn relevance(question: &str, answer: &str) -> u8 {
    if is_blank(answer) {
        return 0;
    }
    let (common, total) = keyword_overlap(question, answer);
    if total == 0 || common == 0 {
        return 0;
    }
    let ratio = common as f64 / total as f64;
    1 + RELEVANCE_BAND_FLOORS
        .iter()
        .filter(|&&floor| ratio >= floor)
        .count() as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

/// Overlap component plus saturating length component, clamped to [0, 7].
pub fn content(question: &str, answer: &str) -> u8 {
    if is_blank(answer) {
        return 0;
    }
    let (common, _) = keyword_overlap(question, answer);
    let overlap_component = if common > 0 {
        (common.min(usize::from(CONTENT_OVERLAP_CAP)) as u8 * 2).min(CONTENT_OVERLAP_CAP)
    } else {
        1
    };

    let length = answer.trim().chars().count();
    let length_component = match length {
        l if l > 50 => 3,
        l if l > 20 => 2,
        _ => 1,
    };

    (overlap_component + length_component).min(CONTENT_HEURISTIC_CEILING)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Sentence-statistics and sentiment-keyword skill scores. Depends on the answer only.
pub fn skills(answer: &str) -> SkillScores {
    if is_blank(answer) {
        return SkillScores::uniform(1);
    }

    let text = answer.trim().to_lowercase();
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();
    let sentence_count = sentences.len() as f64;
    let avg_sentence_len = if sentences.is_empty() {
        0.0
    } else {
        sentences.iter().map(|s| s.chars().count()).sum::<usize>() as f64 / sentence_count
    };

    let structured = sentences.len() > 1 && avg_sentence_len > 10.0;

    let communication =
        (0.5 * sentence_count + if avg_sentence_len > 20.0 { 2.0 } else { 1.0 }).clamp(2.0, 8.0);
    let grammar = if structured { 6.0 } else { 4.0 };

    let positive = POSITIVE_KEYWORDS.iter().filter(|k| text.contains(*k)).count() as f64;
    let negative = NEGATIVE_KEYWORDS.iter().filter(|k| text.contains(*k)).count() as f64;
    let attitude = (5.0 + positive - negative).clamp(3.0, 8.0);

    let soft_skills =
        (0.8 * communication + if structured { 1.0 } else { 0.0 }).clamp(3.0, 7.0);

    SkillScores {
        communication: communication.round() as u8,
        grammar: grammar as u8,
        attitude: attitude.round() as u8,
        soft_skills: soft_skills.round() as u8,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback and skill tag
// ────────────────────────────────────────────────────────────────────────────

/// Score-banded template feedback. Deliberately ignores relevance.
pub fn feedback(content_score: u8) -> &'static str {
    match content_score {
        0..=2 => FEEDBACK_POOR,
        3..=5 => FEEDBACK_NEEDS_WORK,
        _ => FEEDBACK_GOOD,
    }
}

/// Keyword categorization of what a question assesses.
pub fn categorize_skill(question: &str) -> &'static str {
    let q = question.to_lowercase();
    SKILL_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| q.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(GENERAL_SKILL)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION: &str = "What motivates your career choices?";

    #[test]
    fn test_keywords_strip_punctuation_and_short_words() {
        assert_eq!(
            keywords("Why do you want THIS role, really?"),
            vec!["want", "this", "role", "really"]
        );
    }

    #[test]
    fn test_relevance_empty_answer_is_zero() {
        assert_eq!(relevance(QUESTION, ""), 0);
        assert_eq!(relevance(QUESTION, "   \n\t"), 0);
    }

    #[test]
    fn test_relevance_no_overlap_is_zero() {
        assert_eq!(relevance(QUESTION, "I enjoy hiking in the mountains"), 0);
    }

    #[test]
    fn test_relevance_question_without_keywords_is_zero() {
        assert_eq!(relevance("Why?", "Because I want to grow"), 0);
    }

    #[test]
    fn test_relevance_partial_overlap_band() {
        // 2 of 5 question keywords (career, choices) → ratio 0.4 → band 5
        let answer = "My career choices are motivated by curiosity";
        assert_eq!(relevance(QUESTION, answer), 5);
    }

    #[test]
    fn test_relevance_full_overlap_is_ten() {
        let answer = "What motivates your career choices? Curiosity does.";
        assert_eq!(relevance(QUESTION, answer), 10);
    }

    #[test]
    fn test_relevance_small_ratio_is_one() {
        let question = "Describe eleven distinct cloud services: compute storage networking \
                        databases queues caches search analytics monitoring logging";
        // 1 of 15 keywords → ratio < 0.1
        assert_eq!(relevance(question, "I mostly used compute"), 1);
    }

    #[test]
    fn test_relevance_is_monotonic_in_overlap() {
        let question = "Explain how caching improves latency throughput and reliability";
        let answers = [
            "Something entirely unrelated here friend",
            "Caching entirely unrelated here friend",
            "Caching improves unrelated here friend",
            "Caching improves latency here friend",
            "Caching improves latency throughput friend",
            "Caching improves latency throughput reliability",
        ];
        let scores: Vec<u8> = answers.iter().map(|a| relevance(question, a)).collect();
        assert!(
            scores.windows(2).all(|w| w[0] <= w[1]),
            "scores not monotonic: {scores:?}"
        );
    }

    #[test]
    fn test_content_empty_answer_is_zero() {
        assert_eq!(content(QUESTION, ""), 0);
    }

    #[test]
    fn test_content_short_off_topic_answer() {
        // overlap 1 (no common words) + length 1
        assert_eq!(content(QUESTION, "I like turtles"), 2);
    }

    #[test]
    fn test_content_long_off_topic_answer_is_limited() {
        let answer = "Yesterday I baked bread and walked the dog around the lake twice";
        assert_eq!(content(QUESTION, answer), 4);
    }

    #[test]
    fn test_content_overlap_and_length() {
        // 2 common words → 4, 44 chars → 2
        let answer = "My career choices are motivated by curiosity";
        assert_eq!(content(QUESTION, answer), 6);
    }

    #[test]
    fn test_content_never_exceeds_seven() {
        let answer = "What motivates your career choices is a long story about growth, \
                      mentorship and the chance to build things that matter.";
        assert_eq!(content(QUESTION, answer), 7);
    }

    #[test]
    fn test_skills_empty_answer_is_all_ones() {
        assert_eq!(skills(""), SkillScores::uniform(1));
    }

    #[test]
    fn test_skills_single_short_sentence() {
        let scores = skills("ok");
        assert_eq!(
            scores,
            SkillScores {
                communication: 2,
                grammar: 4,
                attitude: 5,
                soft_skills: 3,
            }
        );
    }

    #[test]
    fn test_skills_structured_answer_with_sentiment() {
        let answer = "I love to learn new things. Teamwork is great! \
                      I solved a difficult problem last year.";
        let scores = skills(answer);
        assert_eq!(scores.communication, 4);
        assert_eq!(scores.grammar, 6);
        // +great +learn −difficult −problem
        assert_eq!(scores.attitude, 5);
        assert_eq!(scores.soft_skills, 4);
    }

    #[test]
    fn test_skills_attitude_bounds() {
        let upbeat = "Great team, good manager, excellent and helpful peers. \
                      I learn, improve and understand a lot in a positive place.";
        assert_eq!(skills(upbeat).attitude, 8);

        let gloomy = "Bad code, terrible process, wrong priorities. I hate every issue and problem.";
        assert_eq!(skills(gloomy).attitude, 3);
    }

    #[test]
    fn test_heuristics_are_deterministic() {
        let answer = "I led a migration to Kubernetes. It cut deploy times in half!";
        assert_eq!(relevance(QUESTION, answer), relevance(QUESTION, answer));
        assert_eq!(content(QUESTION, answer), content(QUESTION, answer));
        assert_eq!(skills(answer), skills(answer));
    }

    #[test]
    fn test_feedback_bands() {
        assert_eq!(feedback(0), FEEDBACK_POOR);
        assert_eq!(feedback(2), FEEDBACK_POOR);
        assert_eq!(feedback(3), FEEDBACK_NEEDS_WORK);
        assert_eq!(feedback(5), FEEDBACK_NEEDS_WORK);
        assert_eq!(feedback(6), FEEDBACK_GOOD);
        assert_eq!(feedback(10), FEEDBACK_GOOD);
    }

    #[test]
    fn test_categorize_skill() {
        assert_eq!(categorize_skill("Tell me about your background"), "Experience");
        assert_eq!(categorize_skill("Which tools do you use daily?"), "Technical Skills");
        assert_eq!(categorize_skill("Describe a difficult bug you fixed"), "Problem Solving");
        assert_eq!(categorize_skill("How do you handle team conflict?"), "Teamwork");
        assert_eq!(categorize_skill("Where do you see yourself in five years? Any goals?"), "Career Goals");
        assert_eq!(categorize_skill("What is your greatest strength?"), "Self Assessment");
        assert_eq!(categorize_skill("Why should we hire you?"), GENERAL_SKILL);
    }
}

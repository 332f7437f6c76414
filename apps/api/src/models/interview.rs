use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Neutral value used whenever a skill dimension cannot be determined.
pub const NEUTRAL_SKILL_SCORE: u8 = 5;
const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub skill_tag: Option<String>,
}

/// A candidate's response. Media references are opaque and only passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub transcribed_text: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Answer {
    /// The text that gets evaluated: transcription when present, else the typed text.
    pub fn evaluated_text(&self) -> &str {
        self.transcribed_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.text.as_deref())
            .unwrap_or("")
    }
}

/// One completed interview attempt: answers align with questions by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewSubmission {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Skills the interview targets, used to tag untagged questions.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScores {
    pub communication: u8,
    pub grammar: u8,
    pub attitude: u8,
    pub soft_skills: u8,
}

impl Default for SkillScores {
    fn default() -> Self {
        Self::uniform(NEUTRAL_SKILL_SCORE)
    }
}

impl SkillScores {
    pub fn uniform(score: u8) -> Self {
        Self {
            communication: score,
            grammar: score,
            attitude: score,
            soft_skills: score,
        }
    }

    /// Clamps every dimension into [0, 10] independently.
    pub fn clamped(self) -> Self {
        Self {
            communication: self.communication.min(MAX_SCORE),
            grammar: self.grammar.min(MAX_SCORE),
            attitude: self.attitude.min(MAX_SCORE),
            soft_skills: self.soft_skills.min(MAX_SCORE),
        }
    }
}

/// Which path produced a sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// The model answered and the response parsed.
    Model,
    /// The model call failed and the lexical heuristic was substituted.
    Heuristic,
    /// A deterministic rule decided the value without calling the model.
    Rule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSources {
    pub relevance: ScoreSource,
    pub ideal_answer: ScoreSource,
    pub content: ScoreSource,
    pub skills: ScoreSource,
    pub feedback: ScoreSource,
    pub skill_tag: ScoreSource,
}

impl ScoreSources {
    pub fn all(source: ScoreSource) -> Self {
        Self {
            relevance: source,
            ideal_answer: source,
            content: source,
            skills: source,
            feedback: source,
            skill_tag: source,
        }
    }
}

/// Evaluation of one (question, answer) pair. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEvaluation {
    pub question: String,
    pub answer: String,
    pub ideal_answer: String,
    pub content_score: u8,
    pub relevance_score: u8,
    pub skill_scores: SkillScores,
    pub feedback: String,
    pub skill_tag: String,
    pub transcribed_text: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub sources: ScoreSources,
}

/// Per-dimension means across an interview, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSkillScores {
    pub communication: f64,
    pub grammar: f64,
    pub attitude: f64,
    pub soft_skills: f64,
}

/// Raw per-dimension sums handed to persistence alongside the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTotals {
    pub communication: u32,
    pub grammar: u32,
    pub attitude: u32,
    pub soft_skills: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub per_question: Vec<QuestionEvaluation>,
    pub overall_score: f64,
    pub aggregate_skill_scores: AggregateSkillScores,
    pub question_count: usize,
    /// True when the report was built offline because no question could be evaluated.
    pub offline_fallback: bool,
}

impl InterviewReport {
    /// A report with fewer evaluations than questions is partial and must not be treated as final.
    pub fn is_complete(&self) -> bool {
        self.per_question.len() == self.question_count
    }

    pub fn skill_totals(&self) -> SkillTotals {
        self.per_question
            .iter()
            .fold(SkillTotals::default(), |mut acc, e| {
                acc.communication += u32::from(e.skill_scores.communication);
                acc.grammar += u32::from(e.skill_scores.grammar);
                acc.attitude += u32::from(e.skill_scores.attitude);
                acc.soft_skills += u32::from(e.skill_scores.soft_skills);
                acc
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewReportRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub status: String,
    pub overall_score: f64,
    pub report: Value,
    pub skill_totals: Value,
    pub created_at: DateTime<Utc>,
}

//! Per-Question Evaluator: composes relevance, content, skills and feedback for
//! one (question, answer) pair.
//!
//! Stages advance strictly in order:
//! Pending → RelevanceComputed → ContentScored → SkillsAnalyzed → FeedbackReady → Complete.
//! A failing model call demotes only its own sub-score to the heuristic; it never
//! aborts the question.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::evaluation::content::{generate_ideal_answer, score_content};
use crate::evaluation::feedback::{synthesize_feedback, FeedbackScores};
use crate::evaluation::relevance::assess_relevance;
use crate::evaluation::skill_tag::assign_skill_tag;
use crate::evaluation::skills::analyze_skills;
use crate::evaluation::EvaluationError;
use crate::llm_client::TextGenerator;
use crate::models::interview::{Answer, Question, QuestionEvaluation, ScoreSources};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvaluationStage {
    Pending,
    RelevanceComputed,
    ContentScored,
    SkillsAnalyzed,
    FeedbackReady,
    Complete,
}

impl EvaluationStage {
    fn next(self) -> Option<Self> {
        use EvaluationStage::*;
        match self {
            Pending => Some(RelevanceComputed),
            RelevanceComputed => Some(ContentScored),
            ContentScored => Some(SkillsAnalyzed),
            SkillsAnalyzed => Some(FeedbackReady),
            FeedbackReady => Some(Complete),
            Complete => None,
        }
    }
}

/// Tracks one question's stage; rejects regressions and skips.
#[derive(Debug)]
struct Progress {
    question_index: usize,
    stage: EvaluationStage,
}

impl Progress {
    fn new(question_index: usize) -> Self {
        Self {
            question_index,
            stage: EvaluationStage::Pending,
        }
    }

    fn advance(&mut self, to: EvaluationStage) -> Result<(), EvaluationError> {
        if self.stage.next() != Some(to) {
            return Err(EvaluationError::InvalidTransition {
                from: self.stage,
                to,
            });
        }
        debug!(question_index = self.question_index, stage = ?to, "Question evaluation advanced");
        self.stage = to;
        Ok(())
    }
}

/// Owned input for one question so evaluation can run on its own task.
#[derive(Debug, Clone)]
pub struct QuestionInput {
    pub index: usize,
    pub question: Question,
    pub answer: Answer,
    pub skills: Arc<[String]>,
}

#[derive(Clone)]
pub struct QuestionEvaluator {
    llm: Arc<dyn TextGenerator>,
}

impl QuestionEvaluator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    pub async fn evaluate(&self, input: QuestionInput) -> Result<QuestionEvaluation, EvaluationError> {
        let llm = self.llm.as_ref();
        let mut progress = Progress::new(input.index);
        let question = input.question.text.as_str();
        let answer = input.answer.evaluated_text();

        let relevance = assess_relevance(llm, question, answer).await;
        progress.advance(EvaluationStage::RelevanceComputed)?;

        let ideal_answer = generate_ideal_answer(llm, question).await;
        let content = score_content(llm, question, &ideal_answer.value, answer, relevance.value).await;
        progress.advance(EvaluationStage::ContentScored)?;

        let has_audio = input.answer.audio_url.is_some();
        let skills = analyze_skills(llm, question, answer, relevance.value, has_audio).await;
        progress.advance(EvaluationStage::SkillsAnalyzed)?;

        let scores = FeedbackScores {
            content: content.value,
            relevance: relevance.value,
        };
        let feedback = synthesize_feedback(llm, question, answer, &ideal_answer.value, scores).await;
        progress.advance(EvaluationStage::FeedbackReady)?;

        let skill_tag = assign_skill_tag(
            llm,
            question,
            input.question.skill_tag.as_deref(),
            &input.skills,
        )
        .await;
        progress.advance(EvaluationStage::Complete)?;

        Ok(QuestionEvaluation {
            question: input.question.text.clone(),
            answer: answer.to_string(),
            ideal_answer: ideal_answer.value,
            content_score: content.value,
            relevance_score: relevance.value,
            skill_scores: skills.value,
            feedback: feedback.value,
            skill_tag: skill_tag.value,
            transcribed_text: input.answer.transcribed_text.clone(),
            audio_url: input.answer.audio_url.clone(),
            video_url: input.answer.video_url.clone(),
            sources: ScoreSources {
                relevance: relevance.source,
                ideal_answer: ideal_answer.source,
                content: content.source,
                skills: skills.source,
                feedback: feedback.source,
                skill_tag: skill_tag.source,
            },
        })
    }
}

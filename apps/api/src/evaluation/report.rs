//! Report Aggregator: evaluates every question in order and folds the results
//! into one `InterviewReport`.
//!
//! Questions run one at a time. Each runs on its own task so a panic is contained
//! to that question; the next question starts only after the previous finishes.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::evaluation::content::offline_content_score;
use crate::evaluation::evaluator::{QuestionEvaluator, QuestionInput};
use crate::evaluation::heuristics;
use crate::evaluation::prompts::IDEAL_ANSWER_OFFLINE;
use crate::evaluation::skills::offline_skill_scores;
use crate::evaluation::EvaluationError;
use crate::llm_client::TextGenerator;
use crate::models::interview::{
    AggregateSkillScores, Answer, InterviewReport, InterviewSubmission, Question,
    QuestionEvaluation, ScoreSource, ScoreSources,
};

/// Round half up to one decimal. Inputs are never negative.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = u8>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round1(values.map(f64::from).sum::<f64>() / count as f64)
}

/// Aggregates evaluations. An empty slice yields zero scores, not an error.
pub fn build_report(
    per_question: Vec<QuestionEvaluation>,
    question_count: usize,
    offline_fallback: bool,
) -> InterviewReport {
    let n = per_question.len();
    let overall_score = mean(per_question.iter().map(|e| e.content_score), n);
    let aggregate_skill_scores = AggregateSkillScores {
        communication: mean(per_question.iter().map(|e| e.skill_scores.communication), n),
        grammar: mean(per_question.iter().map(|e| e.skill_scores.grammar), n),
        attitude: mean(per_question.iter().map(|e| e.skill_scores.attitude), n),
        soft_skills: mean(per_question.iter().map(|e| e.skill_scores.soft_skills), n),
    };

    InterviewReport {
        per_question,
        overall_score,
        aggregate_skill_scores,
        question_count,
        offline_fallback,
    }
}

/// Evaluation of one question from lexical heuristics alone; never touches the gateway.
pub fn offline_evaluation(question: &Question, answer: &Answer) -> QuestionEvaluation {
    let text = answer.evaluated_text();
    let relevance_score = heuristics::relevance(&question.text, text);
    let content_score = offline_content_score(&question.text, text, relevance_score);
    let skill_tag = question
        .skill_tag
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| heuristics::categorize_skill(&question.text).to_string());

    QuestionEvaluation {
        question: question.text.clone(),
        answer: text.to_string(),
        ideal_answer: IDEAL_ANSWER_OFFLINE.to_string(),
        content_score,
        relevance_score,
        skill_scores: offline_skill_scores(text, relevance_score),
        feedback: heuristics::feedback(content_score).to_string(),
        skill_tag,
        transcribed_text: answer.transcribed_text.clone(),
        audio_url: answer.audio_url.clone(),
        video_url: answer.video_url.clone(),
        sources: ScoreSources::all(ScoreSource::Heuristic),
    }
}

/// Whole-interview fallback built directly from the raw answers.
pub fn offline_report(questions: &[Question], answers: &[Answer]) -> InterviewReport {
    let blank = Answer::default();
    let per_question = questions
        .iter()
        .enumerate()
        .map(|(i, q)| offline_evaluation(q, answers.get(i).unwrap_or(&blank)))
        .collect();
    build_report(per_question, questions.len(), true)
}

#[derive(Clone)]
pub struct InterviewEvaluator {
    questions: QuestionEvaluator,
}

impl InterviewEvaluator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            questions: QuestionEvaluator::new(llm),
        }
    }

    /// Evaluates a full submission. Missing answers are treated as blank.
    ///
    /// Fails only when there is nothing to evaluate; if every question fails
    /// catastrophically the offline report is returned instead.
    pub async fn evaluate_interview(
        &self,
        submission: InterviewSubmission,
    ) -> Result<InterviewReport, EvaluationError> {
        let InterviewSubmission {
            questions,
            answers,
            skills,
        } = submission;

        if questions.is_empty() {
            return Err(EvaluationError::AggregateFailure(
                "interview has no questions".to_string(),
            ));
        }

        let question_count = questions.len();
        let skills: Arc<[String]> = Arc::from(skills);
        let mut per_question = Vec::with_capacity(question_count);

        for (index, question) in questions.iter().enumerate() {
            let input = QuestionInput {
                index,
                question: question.clone(),
                answer: answers.get(index).cloned().unwrap_or_default(),
                skills: Arc::clone(&skills),
            };
            let evaluator = self.questions.clone();
            let outcome = tokio::spawn(async move { evaluator.evaluate(input).await })
                .await
                .unwrap_or_else(|e| Err(EvaluationError::TaskFailed(e.to_string())));

            match outcome {
                Ok(evaluation) => {
                    info!(
                        question_index = index,
                        content_score = evaluation.content_score,
                        relevance_score = evaluation.relevance_score,
                        "Question evaluated"
                    );
                    per_question.push(evaluation);
                }
                Err(e) => {
                    error!(question_index = index, error = %e, "Question evaluation failed");
                }
            }
        }

        if per_question.is_empty() {
            warn!(
                question_count,
                "No question could be evaluated, building offline report"
            );
            return Ok(offline_report(&questions, &answers));
        }

        let report = build_report(per_question, question_count, false);
        if !report.is_complete() {
            warn!(
                evaluated = report.per_question.len(),
                question_count, "Interview report is partial"
            );
        }
        Ok(report)
    }
}

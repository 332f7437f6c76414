//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::store::{latest_report, save_report};
use crate::models::interview::{InterviewReport, InterviewReportRow, InterviewSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub report_id: Option<Uuid>,
    pub persisted: bool,
    pub complete: bool,
    pub report: InterviewReport,
}

fn validate_submission(submission: &InterviewSubmission) -> Result<(), AppError> {
    if submission.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }
    if let Some(i) = submission
        .questions
        .iter()
        .position(|q| q.text.trim().is_empty())
    {
        return Err(AppError::Validation(format!(
            "question {i} has empty text"
        )));
    }
    if submission.answers.len() > submission.questions.len() {
        return Err(AppError::Validation(format!(
            "{} answers given for {} questions",
            submission.answers.len(),
            submission.questions.len()
        )));
    }
    Ok(())
}

/// POST /api/v1/interviews/:id/evaluate
///
/// Scores every answer and returns the full report. The report is written once;
/// a failed write is logged and the report is still returned.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Json(submission): Json<InterviewSubmission>,
) -> Result<Json<EvaluateResponse>, AppError> {
    validate_submission(&submission)?;

    info!(
        "Evaluating interview {} ({} questions)",
        interview_id,
        submission.questions.len()
    );
    let report = state.evaluator.evaluate_interview(submission).await?;

    let report_id = match save_report(&state.db, interview_id, &report).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Report for interview {interview_id} not persisted: {e:#}");
            None
        }
    };

    Ok(Json(EvaluateResponse {
        report_id,
        persisted: report_id.is_some(),
        complete: report.is_complete(),
        report,
    }))
}

/// GET /api/v1/interviews/:id/report
///
/// Returns the most recent stored report for the interview.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<InterviewReportRow>, AppError> {
    let row = latest_report(&state.db, interview_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No report for interview {interview_id}")))?;
    Ok(Json(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview::{Answer, Question};

    fn question(text: &str) -> Question {
        Question {
            text: text.to_string(),
            skill_tag: None,
        }
    }

    #[test]
    fn test_validate_rejects_empty_questions() {
        let result = validate_submission(&InterviewSubmission::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_blank_question_text() {
        let submission = InterviewSubmission {
            questions: vec![question("Why Rust?"), question("  ")],
            ..Default::default()
        };
        assert!(matches!(
            validate_submission(&submission),
            Err(AppError::Validation(msg)) if msg.contains("question 1")
        ));
    }

    #[test]
    fn test_validate_rejects_extra_answers() {
        let submission = InterviewSubmission {
            questions: vec![question("Why Rust?")],
            answers: vec![Answer::default(), Answer::default()],
            skills: vec![],
        };
        assert!(validate_submission(&submission).is_err());
    }

    #[test]
    fn test_validate_accepts_fewer_answers() {
        let submission = InterviewSubmission {
            questions: vec![question("Why Rust?"), question("Why not Go?")],
            answers: vec![Answer::default()],
            skills: vec![],
        };
        assert!(validate_submission(&submission).is_ok());
    }
}

//! Report persistence. One append-only INSERT per completed evaluation; never retried.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::interview::{InterviewReport, InterviewReportRow};

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_PARTIAL: &str = "partial";

pub fn report_status(report: &InterviewReport) -> &'static str {
    if report.is_complete() {
        STATUS_COMPLETED
    } else {
        STATUS_PARTIAL
    }
}

/// Writes the report together with raw per-dimension skill sums.
pub async fn save_report(
    pool: &PgPool,
    interview_id: Uuid,
    report: &InterviewReport,
) -> Result<Uuid> {
    let report_id = Uuid::new_v4();
    let report_json = serde_json::to_value(report).context("Failed to serialize report")?;
    let totals_json =
        serde_json::to_value(report.skill_totals()).context("Failed to serialize skill totals")?;

    sqlx::query(
        r#"
        INSERT INTO interview_reports
            (id, interview_id, status, overall_score, report, skill_totals)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(report_id)
    .bind(interview_id)
    .bind(report_status(report))
    .bind(report.overall_score)
    .bind(&report_json)
    .bind(&totals_json)
    .execute(pool)
    .await
    .context("Failed to insert interview report")?;

    info!(
        "Saved report {} for interview {} (overall {})",
        report_id, interview_id, report.overall_score
    );
    Ok(report_id)
}

/// Most recent report for an interview. A retake adds a row; it never edits one.
pub async fn latest_report(
    pool: &PgPool,
    interview_id: Uuid,
) -> Result<Option<InterviewReportRow>, sqlx::Error> {
    sqlx::query_as::<_, InterviewReportRow>(
        "SELECT * FROM interview_reports WHERE interview_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(interview_id)
    .fetch_optional(pool)
    .await
}

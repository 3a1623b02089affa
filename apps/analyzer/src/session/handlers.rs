//! Axum route handlers for the session API.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::{run_analysis, AnalysisReport};
use crate::errors::AppError;
use crate::extraction::{extract_pdf_text, is_pdf};
use crate::session::{FormError, SessionStatus};
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const REPORT_FILE_NAME: &str = "ai_resume_analysis_report.txt";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub session: SessionStatus,
    /// Present when the PDF could not be read and placeholder text was stored instead.
    pub extraction_warning: Option<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionStatus>) {
    let ttl = chrono::Duration::minutes(state.config.session_ttl_minutes);
    state.sessions.purge_expired(ttl).await;

    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session.status()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStatus>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(session.status()))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/submit
///
/// Multipart form with a `resume` PDF and a `job_description` text field.
/// Both are required; a failed extraction still submits, with placeholder text.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    if state.sessions.get(id).await?.is_submitted() {
        return Err(FormError::AlreadySubmitted.into());
    }

    let mut resume: Option<Bytes> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                if data.is_empty() {
                    continue;
                }
                if !is_pdf(content_type.as_deref(), &data) {
                    return Err(AppError::Validation(
                        "Resume must be uploaded in PDF format".to_string(),
                    ));
                }
                resume = Some(data);
            }
            Some(JOB_DESCRIPTION_FIELD) => job_description = field.text().await?,
            _ => {}
        }
    }

    let resume = match resume {
        Some(bytes) if !job_description.trim().is_empty() => bytes,
        _ => return Err(FormError::MissingInput.into()),
    };

    info!("Session {id}: extracting resume ({} bytes)", resume.len());
    let extracted = extract_pdf_text(resume).await;

    let session = state
        .sessions
        .update(id, |session| {
            session.submit(extracted.text, job_description)?;
            Ok(session.status())
        })
        .await?;

    Ok(Json(SubmitResponse {
        session,
        extraction_warning: extracted.warning,
    }))
}

/// POST /api/v1/sessions/:id/analysis
///
/// Runs similarity scoring and report generation for a submitted session.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, AppError> {
    let session = state.sessions.get(id).await?;
    let (resume_text, job_description) = session.inputs()?;

    info!("Session {id}: generating scores");
    let analysis = run_analysis(
        resume_text,
        job_description,
        state.scorer.as_ref(),
        state.report_generator.as_ref(),
    )
    .await?;

    state
        .sessions
        .update(id, |session| {
            session.record_analysis(analysis.clone());
            Ok(())
        })
        .await?;

    Ok(Json(analysis))
}

/// GET /api/v1/sessions/:id/report
pub async fn handle_report_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(id).await?;
    let analysis = session.analysis().ok_or_else(|| report_not_ready(id))?;
    Ok(Html(analysis.report_html.clone()))
}

/// GET /api/v1/sessions/:id/report/download
pub async fn handle_report_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.get(id).await?;
    let analysis = session.analysis().ok_or_else(|| report_not_ready(id))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        analysis.report.clone(),
    ))
}

fn report_not_ready(id: Uuid) -> AppError {
    AppError::NotFound(format!("No report has been generated for session {id}"))
}

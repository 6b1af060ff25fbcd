use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::response::AnalysisResponse;
use crate::errors::AppError;
use crate::extraction::validation::{ensure_resume_content, validate_upload};
use crate::extraction::extract;
use crate::models::analysis::AnalysisRequest;
use crate::state::AppState;

/// Multipart form of `POST /api/analyze`.
#[derive(Debug, Default)]
struct UploadForm {
    file_name: Option<String>,
    file: Option<Bytes>,
    job_title: Option<String>,
    job_description: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    form.file_name = field.file_name().map(str::to_string);
                    form.file = Some(field.bytes().await?);
                }
                "job_title" => form.job_title = Some(field.text().await?),
                "job_description" => form.job_description = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }
}

/// GET /api/
pub async fn handle_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "ATS Resume Checker API - Comprehensive Analysis"
    }))
}

/// POST /api/analyze
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let bytes = form.file.unwrap_or_default();
    let kind = validate_upload(
        form.file_name.as_deref(),
        bytes.len(),
        state.config.max_upload_bytes,
    )?;
    info!(
        file_name = form.file_name.as_deref().unwrap_or_default(),
        size = bytes.len(),
        ?kind,
        "resume upload received"
    );

    let file_name = form.file_name;
    let (job_title, job_description) = (form.job_title, form.job_description);
    let response = run_blocking(move || {
        let document = extract(kind, &bytes)?;
        if state.config.require_resume_content {
            ensure_resume_content(&document.text)?;
        }
        let request = AnalysisRequest {
            raw_text: document.text,
            job_title,
            job_description,
            formatting_info: document.formatting,
        };
        let report = state.engine.analyze(&request)?;
        Ok(AnalysisResponse::new(report, file_name, &request.raw_text))
    })
    .await?;

    Ok(Json(response))
}

/// POST /api/analyze/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let response = run_blocking(move || {
        if state.config.require_resume_content {
            ensure_resume_content(&request.raw_text)?;
        }
        let report = state.engine.analyze(&request)?;
        Ok(AnalysisResponse::new(report, None, &request.raw_text))
    })
    .await?;

    Ok(Json(response))
}

/// Runs CPU-bound extraction and scoring off the async executor.
async fn run_blocking<F>(work: F) -> Result<AnalysisResponse, AppError>
where
    F: FnOnce() -> Result<AnalysisResponse, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))?
}

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::document::{extract_document_text, MediaType};
use crate::errors::AppError;
use crate::extract::{extract, normalize::collapse_whitespace};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// POST /api/v1/ingest
///
/// Multipart upload with a `file` field. The declared content type picks the
/// text-extraction collaborator; unsupported types are rejected before the
/// core ever runs.
pub async fn handle_ingest(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("File field has no content type".to_string()))?;
        let media_type = MediaType::from_mime(&content_type)
            .ok_or(AppError::UnsupportedMediaType(content_type))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed reading upload: {e}")))?;
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Upload exceeds {} bytes",
                state.config.max_upload_bytes
            )));
        }

        let text = extract_document_text(&data, media_type)
            .map_err(|e| AppError::Extraction(e.to_string()))?;
        info!(
            upload_bytes = data.len(),
            text_chars = collapse_whitespace(&text).chars().count(),
            "Document text extracted"
        );

        return Ok(Json(extract(&text, &state.extract_options)));
    }

    Err(AppError::Validation("No file provided".to_string()))
}

/// POST /api/v1/extract
///
/// Raw-text path for clients that already hold plain text. Input size is
/// bounded here; the heuristic core itself accepts anything.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    if req.text.len() > state.config.max_text_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Text exceeds {} bytes",
            state.config.max_text_bytes
        )));
    }
    Ok(Json(extract(&req.text, &state.extract_options)))
}

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, FileLoaderError, ModelGateway};
use crate::application::services::DocumentError;
use crate::domain::{ContentType, RedactionReport};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadDocumentResponse {
    pub document_id: String,
    pub filename: String,
    /// Sanitized text the client passes back as `context` on chat calls.
    pub context: String,
    pub redactions: RedactionReport,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler<F, G>(
    State(state): State<AppState<F, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: ModelGateway + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field.content_type().unwrap_or("application/octet-stream");

    tracing::debug!(filename = %filename, content_type = %content_type_str, "Processing file upload");

    let content_type = match ContentType::from_mime(content_type_str) {
        Some(ct) => ct,
        None => {
            tracing::warn!(content_type = %content_type_str, "Unsupported content type");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported content type: {}", content_type_str),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .document_service
        .ingest(&data, filename.clone(), content_type)
        .await
    {
        Ok(scrubbed) => {
            tracing::info!(
                document_id = %scrubbed.document_id.as_uuid(),
                filename = %scrubbed.filename,
                redactions = scrubbed.redactions.total(),
                "Document scrubbed"
            );
            (
                StatusCode::OK,
                Json(UploadDocumentResponse {
                    document_id: scrubbed.document_id.as_uuid().to_string(),
                    filename: scrubbed.filename,
                    context: scrubbed.context,
                    redactions: scrubbed.redactions,
                }),
            )
                .into_response()
        }
        Err(e) => {
            let status = match &e {
                DocumentError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                DocumentError::Extraction(FileLoaderError::UnsupportedContentType(_)) => {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE
                }
                DocumentError::Extraction(FileLoaderError::InvalidEncoding(_)) => {
                    StatusCode::BAD_REQUEST
                }
                DocumentError::Extraction(FileLoaderError::ExtractionFailed(_)) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            tracing::warn!(error = %e, "Document ingestion failed");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{AdmissionControl, Operation};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Consults the admission-control collaborator before a request reaches a
/// handler. Paths without a mapped operation (health checks) pass through
/// unthrottled.
pub async fn admission_middleware(
    State(admission): State<Arc<dyn AdmissionControl>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(operation) = operation_for(request.method(), request.uri().path()) else {
        return next.run(request).await;
    };

    let caller = caller_identity(request.headers());

    if admission.allow(&caller, operation).await {
        next.run(request).await
    } else {
        tracing::warn!(operation = %operation, "Request rejected by admission control");
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Rate limit exceeded".to_string(),
            }),
        )
            .into_response()
    }
}

fn operation_for(method: &Method, path: &str) -> Option<Operation> {
    if method != Method::POST {
        return None;
    }

    match path {
        "/api/agents" => Some(Operation::CreateAgent),
        "/api/chat" => Some(Operation::Chat),
        "/api/documents" => Some(Operation::UploadDocument),
        _ => None,
    }
}

/// Caller identity for rate keying: API key if presented, otherwise the
/// first forwarded address, otherwise a shared anonymous bucket.
fn caller_identity(headers: &HeaderMap) -> String {
    if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        return key.to_string();
    }

    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

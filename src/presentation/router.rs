use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, ModelGateway};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::admission::admission_middleware;
use crate::presentation::handlers::{
    chat_handler, create_agent_handler, health_handler, upload_document_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, G>(state: AppState<F, G>) -> Router
where
    F: FileLoader + 'static,
    G: ModelGateway + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let admission = Arc::clone(&state.admission);
    let body_limit = state.settings.extraction.max_file_size_bytes() as usize;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/agents", post(create_agent_handler::<F, G>))
        .route("/api/chat", post(chat_handler::<F, G>))
        .route("/api/documents", post(upload_document_handler::<F, G>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(
            admission,
            admission_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

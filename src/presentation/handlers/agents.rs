use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, ModelGateway};
use crate::domain::AgentProfile;
use crate::presentation::state::AppState;

const WELCOME_FALLBACK: &str =
    "Sorry, I'm having connection trouble. Shall we try again in a moment?";

#[derive(Deserialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub persona: String,
}

#[derive(Serialize)]
pub struct CreateAgentResponse {
    pub welcome_msg: String,
}

#[tracing::instrument(skip(state, request), fields(agent = %request.name))]
pub async fn create_agent_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<CreateAgentRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: ModelGateway + 'static,
{
    let profile = AgentProfile::new(request.name, request.persona);

    match state.chat_service.welcome(&profile).await {
        Ok(welcome_msg) => {
            tracing::info!("Agent welcome generated");
            (StatusCode::OK, Json(CreateAgentResponse { welcome_msg })).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Welcome generation failed, returning fallback");
            (
                StatusCode::OK,
                Json(CreateAgentResponse {
                    welcome_msg: WELCOME_FALLBACK.to_string(),
                }),
            )
                .into_response()
        }
    }
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, ModelGateway};
use crate::domain::{AgentProfile, ConversationTurn, Sender};
use crate::presentation::state::AppState;

const CHAT_FALLBACK: &str =
    "I'm having technical difficulties right now. Please try again in a moment.";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub name: String,
    pub persona: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub history: Vec<TurnDto>,
    pub message: String,
}

#[derive(Deserialize)]
pub struct TurnDto {
    pub sender: SenderDto,
    pub text: String,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SenderDto {
    User,
    Agent,
}

impl From<SenderDto> for Sender {
    fn from(dto: SenderDto) -> Self {
        match dto {
            SenderDto::User => Sender::User,
            SenderDto::Agent => Sender::Agent,
        }
    }
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(agent = %request.name, history_len = request.history.len())
)]
pub async fn chat_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: ModelGateway + 'static,
{
    if request.message.trim().is_empty() {
        tracing::warn!("Chat request with empty message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No message provided".to_string(),
            }),
        )
            .into_response();
    }

    // Log surface sizes only; message text never reaches the log sink.
    tracing::debug!(
        message_chars = request.message.chars().count(),
        context_chars = request.context.chars().count(),
        "Processing chat turn"
    );

    let profile = AgentProfile::new(request.name, request.persona);
    let history: Vec<ConversationTurn> = request
        .history
        .into_iter()
        .map(|t| ConversationTurn::new(t.sender.into(), t.text))
        .collect();

    match state
        .chat_service
        .chat(&profile, &request.context, &history, &request.message)
        .await
    {
        Ok(reply) => {
            if !reply.redactions.is_empty() {
                tracing::info!(
                    redactions = reply.redactions.total(),
                    "PII redacted from chat surfaces"
                );
            }
            (
                StatusCode::OK,
                Json(ChatResponse {
                    response: reply.text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Generation failed, returning fallback");
            (
                StatusCode::OK,
                Json(ChatResponse {
                    response: CHAT_FALLBACK.to_string(),
                }),
            )
                .into_response()
        }
    }
}

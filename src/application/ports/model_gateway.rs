use async_trait::async_trait;

use crate::domain::AssembledPrompt;

/// External generative-text collaborator. The core never retries on its
/// behalf; failures propagate as typed errors the orchestrator maps to
/// user-facing behavior.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, ModelGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelGatewayError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

use std::sync::Arc;

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::domain::{AgentProfile, ConversationTurn, RedactionReport};

use super::prompt_assembler::PromptAssembler;

/// Request the assembler injects as the first user message when a new agent
/// is created, mirroring the welcome flow of the chat endpoint.
const WELCOME_REQUEST: &str =
    "Introduce yourself briefly to the user, in character. Be engaging.";

pub struct ChatService<G>
where
    G: ModelGateway,
{
    gateway: Arc<G>,
    assembler: Arc<PromptAssembler>,
}

impl<G> ChatService<G>
where
    G: ModelGateway,
{
    pub fn new(gateway: Arc<G>, assembler: Arc<PromptAssembler>) -> Self {
        Self { gateway, assembler }
    }

    /// Generates the in-character introduction for a freshly created agent.
    pub async fn welcome(&self, profile: &AgentProfile) -> Result<String, ChatError> {
        let assembly = self.assembler.assemble(profile, "", &[], WELCOME_REQUEST);

        let text = self
            .gateway
            .generate(&assembly.prompt)
            .await
            .map_err(ChatError::Generation)?;

        Ok(text)
    }

    /// One chat turn: scrub and assemble every untrusted surface, then ask
    /// the gateway for a reply. A failure anywhere is a typed error; no
    /// path hands unsanitized text to the gateway.
    pub async fn chat(
        &self,
        profile: &AgentProfile,
        document_context: &str,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let assembly = self
            .assembler
            .assemble(profile, document_context, history, message);

        let text = self
            .gateway
            .generate(&assembly.prompt)
            .await
            .map_err(ChatError::Generation)?;

        Ok(ChatReply {
            text,
            redactions: assembly.redactions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub redactions: RedactionReport,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("generation: {0}")]
    Generation(#[from] ModelGatewayError),
}

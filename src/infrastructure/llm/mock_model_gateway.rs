use async_trait::async_trait;

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::domain::AssembledPrompt;

/// Canned gateway used when no API key is configured and in tests.
pub struct MockModelGateway {
    reply: String,
}

impl MockModelGateway {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockModelGateway {
    fn default() -> Self {
        Self::new("Mock reply")
    }
}

#[async_trait]
impl ModelGateway for MockModelGateway {
    async fn generate(&self, _prompt: &AssembledPrompt) -> Result<String, ModelGatewayError> {
        Ok(self.reply.clone())
    }
}

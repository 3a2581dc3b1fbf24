use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use veilgate::application::ports::{ModelGateway, ModelGatewayError};
use veilgate::application::services::{ChatError, ChatService, PromptAssembler};
use veilgate::domain::{
    AgentProfile, AssembledPrompt, ConversationTurn, PatternRegistry, Scrubber, Sender,
};

struct RecordingGateway {
    prompts: Mutex<Vec<AssembledPrompt>>,
}

impl RecordingGateway {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> AssembledPrompt {
        self.prompts.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ModelGateway for RecordingGateway {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, ModelGatewayError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok("recorded reply".to_string())
    }
}

struct FailingGateway;

#[async_trait]
impl ModelGateway for FailingGateway {
    async fn generate(&self, _prompt: &AssembledPrompt) -> Result<String, ModelGatewayError> {
        Err(ModelGatewayError::ApiRequestFailed("boom".to_string()))
    }
}

fn service<G: ModelGateway>(gateway: Arc<G>) -> ChatService<G> {
    let scrubber = Arc::new(Scrubber::new(PatternRegistry::new()));
    ChatService::new(gateway, Arc::new(PromptAssembler::new(scrubber, 20_000)))
}

fn profile() -> AgentProfile {
    AgentProfile::new("Ada".to_string(), "a meticulous librarian".to_string())
}

#[tokio::test]
async fn given_pii_in_message_when_chatting_then_gateway_only_sees_placeholders() {
    let gateway = Arc::new(RecordingGateway::new());
    let service = service(Arc::clone(&gateway));

    let history = vec![ConversationTurn::new(
        Sender::User,
        "my email is jane.doe@example.com".to_string(),
    )];

    let reply = service
        .chat(&profile(), "", &history, "card: 4111-1111-1111-1111")
        .await
        .unwrap();

    assert_eq!(reply.text, "recorded reply");
    assert_eq!(reply.redactions.total(), 2);

    let prompt = gateway.last_prompt();
    assert!(prompt.turns[0].text.contains("[EMAIL_REDACTED]"));
    assert!(!prompt.turns[0].text.contains("jane.doe@example.com"));
    assert!(prompt.user_message.contains("[CARD_REDACTED]"));
    assert!(!prompt.user_message.contains("4111-1111-1111-1111"));
}

#[tokio::test]
async fn given_failing_gateway_when_chatting_then_error_is_typed_not_swallowed() {
    let service = service(Arc::new(FailingGateway));

    let result = service.chat(&profile(), "", &[], "hello").await;

    assert!(matches!(
        result,
        Err(ChatError::Generation(ModelGatewayError::ApiRequestFailed(_)))
    ));
}

#[tokio::test]
async fn given_new_agent_when_requesting_welcome_then_gateway_reply_is_returned() {
    let gateway = Arc::new(RecordingGateway::new());
    let service = service(Arc::clone(&gateway));

    let welcome = service.welcome(&profile()).await.unwrap();

    assert_eq!(welcome, "recorded reply");

    let prompt = gateway.last_prompt();
    assert!(prompt.system_instruction.contains("Ada"));
    assert!(prompt.turns.is_empty());
}

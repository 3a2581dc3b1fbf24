mod gemini_client;
mod mock_model_gateway;

pub use gemini_client::GeminiClient;
pub use mock_model_gateway::MockModelGateway;

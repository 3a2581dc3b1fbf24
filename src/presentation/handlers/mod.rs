mod agents;
mod chat;
mod documents;
mod health;

pub use agents::create_agent_handler;
pub use chat::chat_handler;
pub use documents::upload_document_handler;
pub use health::health_handler;

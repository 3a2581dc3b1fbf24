mod chat_service;
mod document_service;
mod prompt_assembler;

pub use chat_service::{ChatError, ChatReply, ChatService};
pub use document_service::{DocumentError, DocumentService, ScrubbedDocument};
pub use prompt_assembler::{Assembly, PromptAssembler};

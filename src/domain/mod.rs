mod agent_profile;
mod assembled_prompt;
mod conversation_turn;
mod document;
mod pattern_registry;
mod pii_category;
mod redaction_rule;
mod scrub_result;
mod scrubber;

pub use agent_profile::AgentProfile;
pub use assembled_prompt::AssembledPrompt;
pub use conversation_turn::{ConversationTurn, Sender};
pub use document::{ContentType, Document, DocumentId};
pub use pattern_registry::PatternRegistry;
pub use pii_category::PiiCategory;
pub use redaction_rule::RedactionRule;
pub use scrub_result::{RedactionReport, ScrubResult};
pub use scrubber::{Scrubber, truncate_to_chars};

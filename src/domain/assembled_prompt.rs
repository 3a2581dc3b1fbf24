use super::ConversationTurn;

/// The outbound payload handed to the model gateway.
///
/// Every field except the system instruction's persona text has passed
/// through the scrubber exactly once; the assembler is the only place that
/// constructs this type. Building it is deterministic: identical inputs
/// produce byte-identical prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub system_instruction: String,
    pub turns: Vec<ConversationTurn>,
    pub user_message: String,
}

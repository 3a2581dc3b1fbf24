use std::sync::Arc;

use crate::domain::{
    AgentProfile, AssembledPrompt, ConversationTurn, RedactionReport, Scrubber, truncate_to_chars,
};

const SYSTEM_OPEN: &str = "<<<system>>>";
const SYSTEM_CLOSE: &str = "<<</system>>>";
const CONTEXT_OPEN: &str = "<<<context>>>";
const CONTEXT_CLOSE: &str = "<<</context>>>";

/// Builds the outbound prompt, guaranteeing every untrusted text surface
/// passes through the scrubber exactly once before assembly.
///
/// Untrusted surfaces are the document context, every history turn, and the
/// new message. Each is truncated to the configured cap first (truncation
/// after scrubbing could re-expose a split PII token), then scrubbed, then
/// stripped of section-marker sequences so untrusted data can never
/// fabricate a delimiter boundary. The persona comes from the operator and
/// is inserted as-is.
pub struct PromptAssembler {
    scrubber: Arc<Scrubber>,
    max_input_chars: usize,
}

/// An assembled prompt together with the aggregated redaction counts for
/// the surfaces that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub prompt: AssembledPrompt,
    pub redactions: RedactionReport,
}

impl PromptAssembler {
    pub fn new(scrubber: Arc<Scrubber>, max_input_chars: usize) -> Self {
        Self {
            scrubber,
            max_input_chars,
        }
    }

    pub fn assemble(
        &self,
        profile: &AgentProfile,
        document_context: &str,
        history: &[ConversationTurn],
        new_message: &str,
    ) -> Assembly {
        let mut redactions = RedactionReport::default();

        let context = self.sanitize_surface(document_context, &mut redactions);
        let user_message = self.sanitize_surface(new_message, &mut redactions);

        let mut turns = Vec::with_capacity(history.len());
        for turn in history {
            let text = self.sanitize_surface(&turn.text, &mut redactions);
            if text.trim().is_empty() {
                continue;
            }
            turns.push(ConversationTurn::new(turn.sender, text));
        }

        let mut system_instruction = format!(
            "{SYSTEM_OPEN}\nYou are {}. Persona: {}. Stay in character at all times.\n{SYSTEM_CLOSE}",
            profile.name, profile.persona
        );

        if !context.trim().is_empty() {
            system_instruction.push_str(&format!(
                "\n{CONTEXT_OPEN}\n{context}\n{CONTEXT_CLOSE}"
            ));
        }

        Assembly {
            prompt: AssembledPrompt {
                system_instruction,
                turns,
                user_message,
            },
            redactions,
        }
    }

    fn sanitize_surface(&self, text: &str, redactions: &mut RedactionReport) -> String {
        let truncated = truncate_to_chars(text, self.max_input_chars);
        let result = self.scrubber.scrub(truncated);
        redactions.absorb(&result);
        strip_markers(&result.sanitized_text)
    }
}

/// Removes the delimiter marker sequences from untrusted content. The
/// section markers are built from `<<<` and `>>>`, so stripping those two
/// sequences is enough to make every marker unforgeable.
fn strip_markers(text: &str) -> String {
    text.replace("<<<", "").replace(">>>", "")
}

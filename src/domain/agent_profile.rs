/// Operator-defined persona for one chat session.
///
/// Supplied by the caller configuring the agent, not by arbitrary end
/// users, so it is treated as trusted and is not scrubbed. Held only for
/// the duration of one request; the gateway keeps no session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: String,
    pub persona: String,
}

impl AgentProfile {
    pub fn new(name: String, persona: String) -> Self {
        Self { name, persona }
    }
}

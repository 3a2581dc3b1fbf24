use std::fmt;
use std::str::FromStr;

/// Originator of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Agent,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Agent => "agent",
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "agent" => Ok(Sender::Agent),
            _ => Err(format!("Invalid sender: {}", s)),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One chronological turn of a conversation. Turn text is untrusted and is
/// sanitized before it enters any sequence that crosses into prompt
/// assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(sender: Sender, text: String) -> Self {
        Self { sender, text }
    }
}

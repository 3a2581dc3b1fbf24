use std::fmt;

use async_trait::async_trait;

/// Gateway operations subject to admission control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAgent,
    Chat,
    UploadDocument,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateAgent => "create_agent",
            Operation::Chat => "chat",
            Operation::UploadDocument => "upload_document",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admission-control collaborator consulted by the HTTP layer before a
/// request reaches the core. The scrubbing core itself has no awareness of
/// rate limits.
#[async_trait]
pub trait AdmissionControl: Send + Sync {
    async fn allow(&self, caller: &str, operation: Operation) -> bool;
}

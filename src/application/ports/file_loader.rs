use async_trait::async_trait;

use crate::domain::Document;

/// External document-ingestion collaborator: given file bytes, returns
/// extracted plain text. Whatever text comes back is always passed through
/// the scrubber before any further use.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    /// Bytes that are not text-representable fail fast here; silently
    /// garbled output could hide un-redacted PII downstream.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}

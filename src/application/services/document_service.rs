use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{
    ContentType, Document, DocumentId, RedactionReport, Scrubber, truncate_to_chars,
};

/// Upload pipeline: size cap, byte-to-text extraction through the loader
/// port, truncation at a character boundary, then scrubbing. The sanitized
/// context goes back to the client, which supplies it on later chat calls;
/// the gateway itself stays stateless.
pub struct DocumentService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    scrubber: Arc<Scrubber>,
    max_file_size_bytes: u64,
    max_context_chars: usize,
}

impl<F> DocumentService<F>
where
    F: FileLoader,
{
    pub fn new(
        file_loader: Arc<F>,
        scrubber: Arc<Scrubber>,
        max_file_size_bytes: u64,
        max_context_chars: usize,
    ) -> Self {
        Self {
            file_loader,
            scrubber,
            max_file_size_bytes,
            max_context_chars,
        }
    }

    pub async fn ingest(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<ScrubbedDocument, DocumentError> {
        let size_bytes = data.len() as u64;
        if size_bytes > self.max_file_size_bytes {
            return Err(DocumentError::FileTooLarge {
                size_bytes,
                limit_bytes: self.max_file_size_bytes,
            });
        }

        let document = Document::new(filename, content_type, size_bytes);

        let raw = self.file_loader.extract_text(data, &document).await?;

        let truncated = truncate_to_chars(&raw, self.max_context_chars);
        let result = self.scrubber.scrub(truncated);

        let mut redactions = RedactionReport::default();
        redactions.absorb(&result);

        Ok(ScrubbedDocument {
            document_id: document.id,
            filename: document.filename,
            context: result.sanitized_text,
            redactions,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrubbedDocument {
    pub document_id: DocumentId,
    pub filename: String,
    pub context: String,
    pub redactions: RedactionReport,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("file of {size_bytes} bytes exceeds the {limit_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
}

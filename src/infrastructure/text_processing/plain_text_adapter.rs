use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

/// Strict UTF-8 text extraction. Bytes that do not decode fail fast as
/// `InvalidEncoding` rather than being lossily repaired, since mangled text
/// could slip PII past the scrubber's patterns.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let text = std::str::from_utf8(data)
            .map_err(|e| FileLoaderError::InvalidEncoding(e.to_string()))?;

        Ok(sanitize_extracted_text(text))
    }
}

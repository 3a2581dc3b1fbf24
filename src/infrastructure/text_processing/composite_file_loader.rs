use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Dispatches extraction to the adapter registered for a document's content
/// type. PDF extraction is an external collaborator: the operator registers
/// an adapter for `ContentType::Pdf` here, or PDF uploads are rejected as
/// unsupported.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    pub fn with_adapter(mut self, content_type: ContentType, adapter: Arc<dyn FileLoader>) -> Self {
        self.adapters.insert(content_type, adapter);
        self
    }
}

impl Default for CompositeFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}

use std::sync::Arc;

use crate::application::ports::{AdmissionControl, FileLoader, ModelGateway};
use crate::application::services::{ChatService, DocumentService};
use crate::presentation::config::Settings;

pub struct AppState<F, G>
where
    F: FileLoader,
    G: ModelGateway,
{
    pub chat_service: Arc<ChatService<G>>,
    pub document_service: Arc<DocumentService<F>>,
    pub admission: Arc<dyn AdmissionControl>,
    pub settings: Settings,
}

impl<F, G> Clone for AppState<F, G>
where
    F: FileLoader,
    G: ModelGateway,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            document_service: Arc::clone(&self.document_service),
            admission: Arc::clone(&self.admission),
            settings: self.settings.clone(),
        }
    }
}

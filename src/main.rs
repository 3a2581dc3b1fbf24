use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use veilgate::application::ports::{AdmissionControl, ModelGateway};
use veilgate::application::services::{ChatService, DocumentService, PromptAssembler};
use veilgate::domain::{ContentType, PatternRegistry, Scrubber};
use veilgate::infrastructure::admission::{FixedWindowLimiter, UnlimitedAdmission};
use veilgate::infrastructure::llm::{GeminiClient, MockModelGateway};
use veilgate::infrastructure::observability::{TracingConfig, init_tracing};
use veilgate::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};
use veilgate::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let mut tracing_config = TracingConfig::from_env();
    tracing_config.environment = settings.environment.to_string();
    init_tracing(tracing_config, settings.server.port);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set, running with the mock model gateway");
        let gateway = Arc::new(MockModelGateway::default());
        serve(gateway, settings).await
    } else {
        let gateway = Arc::new(GeminiClient::new(
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            settings.llm.base_url.clone(),
        ));
        serve(gateway, settings).await
    }
}

async fn serve<G>(gateway: Arc<G>, settings: Settings) -> anyhow::Result<()>
where
    G: ModelGateway + 'static,
{
    let scrubber = Arc::new(Scrubber::new(PatternRegistry::new()));
    let assembler = Arc::new(PromptAssembler::new(
        Arc::clone(&scrubber),
        settings.scrubbing.max_input_chars,
    ));

    let file_loader = Arc::new(
        CompositeFileLoader::new().with_adapter(ContentType::Text, Arc::new(PlainTextAdapter)),
    );

    let admission: Arc<dyn AdmissionControl> = if settings.admission.enabled {
        Arc::new(FixedWindowLimiter::per_minute(
            settings.admission.requests_per_minute,
        ))
    } else {
        Arc::new(UnlimitedAdmission)
    };

    let chat_service = Arc::new(ChatService::new(gateway, Arc::clone(&assembler)));
    let document_service = Arc::new(DocumentService::new(
        file_loader,
        Arc::clone(&scrubber),
        settings.extraction.max_file_size_bytes(),
        settings.scrubbing.max_input_chars,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        chat_service,
        document_service,
        admission,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

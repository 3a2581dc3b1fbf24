mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AdmissionSettings, ExtractionSettings, LlmSettings, ScrubbingSettings, ServerSettings,
    Settings,
};

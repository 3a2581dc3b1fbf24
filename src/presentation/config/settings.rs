use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub scrubbing: ScrubbingSettings,
    pub admission: AdmissionSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScrubbingSettings {
    /// Per-surface cap applied before scrubbing; see PromptAssembler.
    pub max_input_chars: usize,
}

#[derive(Debug, Clone)]
pub struct AdmissionSettings {
    pub enabled: bool,
    pub requests_per_minute: u32,
}

#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb as u64 * 1024 * 1024
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: env_or("GEMINI_MODEL", "gemini-flash-latest"),
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
            },
            scrubbing: ScrubbingSettings {
                max_input_chars: env_parsed("SCRUB_MAX_INPUT_CHARS", 20_000),
            },
            admission: AdmissionSettings {
                enabled: env_or("ADMISSION_ENABLED", "true").to_lowercase() != "false",
                requests_per_minute: env_parsed("ADMISSION_REQUESTS_PER_MINUTE", 30),
            },
            extraction: ExtractionSettings {
                max_file_size_mb: env_parsed("MAX_FILE_SIZE_MB", 10),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

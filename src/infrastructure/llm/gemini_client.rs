use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::domain::{AssembledPrompt, Sender};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// ModelGateway over the Gemini `generateContent` REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn request_body(prompt: &AssembledPrompt) -> GenerateContentRequest {
        let mut contents: Vec<Content> = prompt
            .turns
            .iter()
            .map(|turn| Content {
                role: match turn.sender {
                    Sender::User => "user",
                    Sender::Agent => "model",
                },
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: prompt.user_message.clone(),
            }],
        });

        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: prompt.system_instruction.clone(),
                }],
            },
            contents,
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, ModelGatewayError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| ModelGatewayError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelGatewayError::RateLimited);
        }

        if !response.status().is_success() {
            return Err(ModelGatewayError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelGatewayError::InvalidResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ModelGatewayError::InvalidResponse(
                "no candidates in response".to_string(),
            ));
        }

        Ok(text)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "system_instruction")]
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

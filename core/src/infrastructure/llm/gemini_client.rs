use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, llm::ports::LlmClient};

/// Gemini REST client. The request future runs on the async runtime, so the
/// calling task is never blocked on network latency; concurrent requests
/// share nothing but the connection pool. No timeout and no retries: a
/// failed call surfaces immediately and the caller decides whether to retry
/// the whole request.
#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    api_key: Option<String>,
    model_name: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLlmClient {
    pub fn new(api_key: Option<String>, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    /// Missing credentials are a misconfiguration, reported per request
    /// rather than crashing at startup. Only the vision model may legally
    /// be unset; the text model always has a default.
    fn credentials(&self) -> Result<(&str, &str), CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(CoreError::MissingConfig("GEMINI_API_KEY"))?;
        let model_name = self
            .model_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(CoreError::MissingConfig("GEMINI_VISION_MODEL"))?;
        Ok((api_key, model_name))
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let (api_key, model_name) = self.credentials()?;
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            model_name, api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Gemini API request failed: {}", err);
                CoreError::ModelUnavailable(err.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ModelUnavailable(format!(
                "Gemini API returned {status}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|err| {
            tracing::error!("failed to decode Gemini response body: {}", err);
            CoreError::ModelUnavailable(err.to_string())
        })?;

        // A response with no text part means the completion was blocked or
        // empty; distinct from transport failure so callers can tell the
        // difference in logs.
        gemini_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or(CoreError::EmptyModelResponse)
    }
}

impl LlmClient for GeminiLlmClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        self.call_gemini_api(request).await
    }
}

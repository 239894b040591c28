use crate::{
    error::{Result, StoryboardError},
    models::{GeminiGenerateResponse, GeneratedText, GenerativeRequest},
    services::GenerativeTextService,
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct TextClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for TextClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TextClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_request_payload(request: &GenerativeRequest) -> Value {
        let mut payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.user_content }]
                }
            ]
        });

        if let Some(instruction) = &request.system_instruction {
            payload["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }
        if let Some(schema) = &request.response_schema {
            payload["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema
            });
        }

        payload
    }

    pub async fn generate(&self, api_key: &str, request: &GenerativeRequest) -> Result<GeneratedText> {
        let payload = Self::build_request_payload(request);

        log::info!("Invoking model: {}", request.model);
        log::debug!("Text generation request payload: {}", payload);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini transport error details: {:?}", e);
                StoryboardError::Service(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoryboardError::Service(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            log::error!("Gemini service error ({}): {}", status.as_u16(), message);
            return Err(StoryboardError::Service(message));
        }

        let parsed: GeminiGenerateResponse = serde_json::from_str(&body)
            .map_err(|e| StoryboardError::Service(format!("Malformed Gemini response: {}", e)))?;

        if let Some(usage) = &parsed.usage_metadata {
            log::debug!(
                "Token usage: prompt={:?} candidates={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count
            );
        }

        extract_text(parsed, &request.model)
    }
}

fn extract_text(response: GeminiGenerateResponse, model: &str) -> Result<GeneratedText> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        StoryboardError::Service(match &block_reason {
            Some(reason) => format!("No candidates returned (blocked: {})", reason),
            None => "No candidates returned by the model".to_string(),
        })
    })?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(GeneratedText {
        text,
        model: model.to_string(),
        finish_reason: candidate.finish_reason,
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<Value>(body).ok().and_then(|parsed| {
        parsed
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(|message| message.as_str())
            .map(ToOwned::to_owned)
    }) {
        return message;
    }

    if !body.trim().is_empty() {
        body.trim().to_string()
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        "Rate limited".to_string()
    } else if status.is_server_error() {
        format!("Server error ({})", status.as_u16())
    } else {
        format!("Gemini request failed ({})", status.as_u16())
    }
}

#[async_trait]
impl GenerativeTextService for TextClient {
    async fn generate(&self, api_key: &str, request: &GenerativeRequest) -> Result<GeneratedText> {
        TextClient::generate(self, api_key, request).await
    }
}

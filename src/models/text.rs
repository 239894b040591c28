use serde::{Deserialize, Serialize};

/// Structured-output constraint attached to a generative call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ResponseSchema {
    String,
    Array { items: Box<ResponseSchema> },
}

impl ResponseSchema {
    /// An ordered sequence of strings.
    pub fn string_list() -> Self {
        ResponseSchema::Array {
            items: Box::new(ResponseSchema::String),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeRequest {
    pub model: String,
    pub user_content: String,
    pub system_instruction: Option<String>,
    pub response_schema: Option<ResponseSchema>,
}

impl GenerativeRequest {
    pub fn new(model: impl Into<String>, user_content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            user_content: user_content.into(),
            system_instruction: None,
            response_schema: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    pub model: String,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_schema_wire_shape() {
        let value = serde_json::to_value(ResponseSchema::string_list()).unwrap();
        assert_eq!(value, json!({"type": "ARRAY", "items": {"type": "STRING"}}));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let parsed: GeminiGenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
        assert!(parsed.prompt_feedback.is_none());
    }
}

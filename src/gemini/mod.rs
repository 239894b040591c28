pub mod text_client;

use crate::{
    config::GeminiConfig,
    error::{Result, StoryboardError},
};
use reqwest::Client;
use std::time::Duration;

pub use text_client::TextClient;

/// Entry point for the Gemini REST API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    text_client: TextClient,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| StoryboardError::Config(format!("Failed to create HTTP client: {}", e)))?;

        log::debug!(
            "Gemini client ready (base_url={}, model={}, timeout={}s)",
            config.base_url(),
            config.model(),
            config.timeout_secs()
        );

        Ok(Self {
            text_client: TextClient::new(client, config.base_url()),
            model: config.model().to_string(),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    /// Text model used for planning and key checks.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_model() {
        let client = GeminiClient::new(&GeminiConfig::new().with_model("gemini-2.0-flash-lite")).unwrap();
        assert_eq!(client.model(), "gemini-2.0-flash-lite");

        let default = GeminiClient::new(&GeminiConfig::new()).unwrap();
        assert_eq!(default.model(), "gemini-2.5-flash");
    }
}

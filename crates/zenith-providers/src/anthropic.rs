//! Anthropic messages API client.

use crate::error::ProviderError;
use crate::text::TextGenerator;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.7;

/// Text generation via the Anthropic messages endpoint.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    /// Creates a client. An empty `api_key` marks it unconfigured;
    /// calls then fail fast with [`ProviderError::Config`].
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests against a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::Config(
                "anthropic API key is not set".to_string(),
            ));
        }

        let body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "system": system,
            "messages": [
                { "role": "user", "content": user }
            ]
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "anthropic returned {}",
                status
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::Malformed(
                "anthropic returned an empty message".to_string(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_client_fails_fast_with_config_error() {
        let client = AnthropicClient::new(reqwest::Client::new(), String::new(), "m".to_string());
        assert!(!client.is_configured());
        match client.generate("sys", "user").await {
            Err(ProviderError::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn response_parsing_extracts_first_text_block() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"Breathe in."},{"type":"text","text":"extra"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.content[0].text, "Breathe in.");
    }

    #[test]
    fn response_parsing_tolerates_missing_content() {
        let parsed: MessagesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.content.is_empty());
    }
}

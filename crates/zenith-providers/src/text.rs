//! The text-generation capability trait.

use crate::config::{ProviderSettings, TextProviderKind};
use crate::error::ProviderError;
use crate::{AnthropicClient, GeminiClient};
use async_trait::async_trait;
use std::sync::Arc;

/// A provider that turns a system/user instruction pair into text.
///
/// The orchestrator holds a `dyn TextGenerator`, so the concrete
/// provider is a deployment decision, not a pipeline concern.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Returns true when the provider has a usable credential.
    fn is_configured(&self) -> bool;

    /// Generates text for the instruction pair.
    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// Builds the configured text generator.
pub fn build_text_generator(
    client: reqwest::Client,
    settings: &ProviderSettings,
) -> Arc<dyn TextGenerator> {
    match settings.text_provider {
        TextProviderKind::Anthropic => Arc::new(AnthropicClient::new(
            client,
            settings.anthropic_api_key.clone(),
            settings.anthropic_model.clone(),
        )),
        TextProviderKind::Gemini => Arc::new(GeminiClient::new(
            client,
            settings.gemini_api_key.clone(),
            settings.gemini_model.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_honors_provider_kind() {
        let client = reqwest::Client::new();
        let anthropic = build_text_generator(client.clone(), &ProviderSettings::default());
        assert_eq!(anthropic.name(), "anthropic");

        let gemini = build_text_generator(
            client,
            &ProviderSettings {
                text_provider: TextProviderKind::Gemini,
                ..Default::default()
            },
        );
        assert_eq!(gemini.name(), "gemini");
    }
}

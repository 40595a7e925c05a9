use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::error::ProviderError;
use crate::llm::openrouter::{OpenRouterClient, OPENAI_ENDPOINT, OPENROUTER_ENDPOINT};
use crate::report::MeetingRequest;

/// A language model that turns a meeting request into one raw completion.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Model identifier used for requests
    fn model(&self) -> &str;

    /// Run a single request/response exchange, without retries.
    async fn complete(&self, request: &MeetingRequest) -> Result<String, ProviderError>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(
    settings: &Settings,
    model_override: Option<&str>,
) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openrouter" => Ok(Box::new(OpenRouterClient::from_settings(
            settings,
            OPENROUTER_ENDPOINT,
            model_override,
        )?)),
        "openai" => Ok(Box::new(OpenRouterClient::from_settings(
            settings,
            OPENAI_ENDPOINT,
            model_override,
        )?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openrouter, openai",
            other
        ),
    }
}

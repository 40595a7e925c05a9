use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::LlmProvider;
use crate::llm::error::ProviderError;
use crate::llm::prompts::{build_user_prompt, SYSTEM_PROMPT};
use crate::report::MeetingRequest;

pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1";
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Models offered to users. The first entry is the default.
pub const MODEL_CATALOG: [&str; 6] = [
    "z-ai/glm-4.5-air:free",
    "openrouter/auto",
    "deepseek/deepseek-r1:free",
    "deepseek/deepseek-chat-v3-0324:free",
    "google/gemini-2.0-flash-exp:free",
    "meta-llama/llama-3.3-70b-instruct:free",
];

/// Client for OpenAI-compatible chat completion endpoints (OpenRouter, OpenAI)
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    timeout_secs: u64,
    max_tokens: u32,
    temperature: f32,
}

impl OpenRouterClient {
    pub fn from_settings(
        settings: &Settings,
        default_endpoint: &str,
        model_override: Option<&str>,
    ) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "API key is missing. Set llm.api_key in config or OPENROUTER_API_KEY."
            );
        }

        let model = model_override
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or_else(|| Some(settings.llm.model.trim()).filter(|m| !m.is_empty()))
            .unwrap_or(MODEL_CATALOG[0])
            .to_string();

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            default_endpoint.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let timeout_secs = settings.llm.timeout_secs.max(1);

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .context("Failed to build HTTP client")?,
            api_key,
            model,
            endpoint,
            timeout_secs,
            max_tokens: settings.llm.max_tokens,
            temperature: settings.llm.temperature,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn transport_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Unknown(format!(
                "Request timed out after {} seconds",
                self.timeout_secs
            ))
        } else {
            ProviderError::Unknown(err.to_string())
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &MeetingRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_user_prompt(request),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .header("X-Title", crate::APP_NAME)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %message, "Provider returned an error status");
            return Err(ProviderError::from_status(
                status.as_u16(),
                &self.model,
                &message,
            ));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unknown(format!("Failed to parse response: {}", e)))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                ProviderError::Unknown("Response did not contain a completion".to_string())
            })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

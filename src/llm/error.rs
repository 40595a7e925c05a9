//! Categorized failures of the model call

use thiserror::Error;

/// Default model suggested when the requested one cannot be found
pub const FALLBACK_MODEL: &str = "openrouter/auto";

/// Why no completion is available. Raw provider errors never escape the
/// requester; they are folded into one of these kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Model provider is rate limiting requests")]
    RateLimited,

    #[error("Model provider rejected the API key")]
    Unauthorized,

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Model request failed: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// Map a non-success HTTP status to an error kind.
    pub fn from_status(status: u16, model: &str, body: &str) -> Self {
        match status {
            429 => Self::RateLimited,
            401 | 403 => Self::Unauthorized,
            404 => Self::ModelNotFound {
                model: model.to_string(),
            },
            _ => {
                let body = body.trim();
                if body.is_empty() {
                    Self::Unknown(format!("HTTP {}", status))
                } else {
                    Self::Unknown(format!("HTTP {}: {}", status, body))
                }
            }
        }
    }

    /// Message shown to the person running the analysis.
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited => {
                "Model busy! Switch to another model with --model (see `debrief models`).".to_string()
            }
            Self::Unauthorized => {
                "API key error. Contact the administrator of this installation.".to_string()
            }
            Self::ModelNotFound { model } => format!(
                "Model not found: {}. Switch to {} with --model {}.",
                model, FALLBACK_MODEL, FALLBACK_MODEL
            ),
            Self::Unknown(message) => format!("Error: {}", message),
        }
    }
}

//! LLM module for debrief
//!
//! Requests one constrained-format completion per meeting from an
//! OpenAI-compatible chat completions API.

mod client;
mod error;
mod openrouter;
pub mod prompts;

pub use client::{build_provider, LlmProvider};
pub use error::{ProviderError, FALLBACK_MODEL};
pub use openrouter::{OpenRouterClient, MODEL_CATALOG, OPENAI_ENDPOINT, OPENROUTER_ENDPOINT};

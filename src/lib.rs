//! debrief - Turn meeting transcripts into structured executive reports
//!
//! A language model is asked for a rigidly formatted answer, and the answer is
//! parsed into an [`report::ExecutiveReport`] that survives whatever the model
//! actually wrote.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod render;
pub mod report;

use thiserror::Error;

use crate::llm::ProviderError;

/// Main error type for debrief
#[derive(Error, Debug)]
pub enum DebriefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript is empty. Paste a meeting transcript to analyze.")]
    EmptyTranscript,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DebriefError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "debrief";

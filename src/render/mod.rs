//! Presentation module for debrief
//!
//! Terminal view, export serializers, and the display heuristics (sentiment
//! glyphs, risk severity, owner highlighting). Nothing here feeds back into
//! parsing.

mod export;
mod glyphs;
mod view;

pub use export::{default_file_stem, render_actions_csv, render_json, render_text_report};
pub use glyphs::{is_focus_owner, priority_marker, sentiment_glyph, RiskLevel, Sentiment};
pub use view::render_view;

use anyhow::Result;

use crate::report::{ExecutiveReport, MeetingRequest};

/// Output format for a finished report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal view with glyphs and highlighted tasks
    #[default]
    View,
    /// Plain text report document
    Txt,
    /// JSON document with meeting metadata and report
    Json,
    /// Action items only, as CSV
    Csv,
}

impl OutputFormat {
    /// File extension used for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::View | Self::Txt => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Render a report in the requested format.
pub fn render(
    format: OutputFormat,
    request: &MeetingRequest,
    report: &ExecutiveReport,
) -> Result<String> {
    match format {
        OutputFormat::View => Ok(render_view(request, report)),
        OutputFormat::Txt => Ok(render_text_report(request, report)),
        OutputFormat::Json => render_json(request, report),
        OutputFormat::Csv => Ok(render_actions_csv(report)),
    }
}

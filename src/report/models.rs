//! Data models for meeting analysis

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Value substituted for any labeled field the model did not produce
pub const FALLBACK: &str = "TBD";

/// A single analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Meeting name shown in the report header
    pub name: String,

    /// Free-form meeting date (not parsed)
    pub date: String,

    /// Person whose tasks are highlighted by the presentation layer
    pub focus_owner: String,

    /// Raw transcript text
    #[serde(skip_serializing)]
    #[serde(default)]
    pub transcript: String,
}

impl MeetingRequest {
    /// Create a new request, filling in a generated name and date when absent
    pub fn new(
        name: Option<String>,
        date: Option<String>,
        focus_owner: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        let date = date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M").to_string());
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Meeting {}", date));

        Self {
            name,
            date,
            focus_owner: focus_owner.into(),
            transcript: transcript.into(),
        }
    }
}

/// A task extracted from the action item table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    pub deadline: String,
    pub priority: String,
}

/// Structured report recovered from a model completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveReport {
    /// One sentence meeting objective
    pub objective: String,

    /// Model-reported sentiment, not validated
    pub sentiment: String,

    /// Model-reported confidence (0-100), kept verbatim
    pub confidence: String,

    /// The three TL;DR slots
    pub summary_points: [String; 3],

    /// Action items in order of appearance
    pub action_items: Vec<ActionItem>,

    /// Decisions in label order, never containing the fallback
    pub decisions: Vec<String>,

    /// Proposed next meeting
    pub next_meeting: String,

    /// Risks or blockers
    pub risks: String,
}

impl Default for ExecutiveReport {
    fn default() -> Self {
        Self {
            objective: FALLBACK.to_string(),
            sentiment: FALLBACK.to_string(),
            confidence: FALLBACK.to_string(),
            summary_points: [
                FALLBACK.to_string(),
                FALLBACK.to_string(),
                FALLBACK.to_string(),
            ],
            action_items: Vec::new(),
            decisions: Vec::new(),
            next_meeting: FALLBACK.to_string(),
            risks: FALLBACK.to_string(),
        }
    }
}

//! Display heuristics over free-form model output
//!
//! These are loose, case-insensitive matches on whatever the model wrote and
//! carry no guarantee. The parser never validates against them.

const UNKNOWN_SENTIMENT_GLYPH: &str = "⚪";

/// Sentiments the system prompt asks the model to choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Productive,
    Neutral,
    Tense,
    Unresolved,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "productive" => Some(Self::Productive),
            "neutral" => Some(Self::Neutral),
            "tense" => Some(Self::Tense),
            "unresolved" => Some(Self::Unresolved),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Productive => "🟢",
            Self::Neutral => "🟡",
            Self::Tense => "🔴",
            Self::Unresolved => "🟠",
        }
    }
}

/// Glyph for a sentiment string, with a neutral marker for anything unknown.
pub fn sentiment_glyph(sentiment: &str) -> &'static str {
    Sentiment::from_label(sentiment)
        .map(|s| s.glyph())
        .unwrap_or(UNKNOWN_SENTIMENT_GLYPH)
}

/// Rough severity of the risks text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Clear,
    Flagged,
}

impl RiskLevel {
    pub fn assess(risks: &str) -> Self {
        if risks.to_lowercase().contains("no blockers") {
            Self::Clear
        } else {
            Self::Flagged
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "✅",
            Self::Flagged => "🚨",
        }
    }
}

/// Marker for High/Medium/Low priorities; empty for anything else.
pub fn priority_marker(priority: &str) -> &'static str {
    match priority.trim().to_lowercase().as_str() {
        "high" => "🔴",
        "medium" => "🟡",
        "low" => "🟢",
        _ => "",
    }
}

/// Whether an action item owner refers to the person being briefed.
pub fn is_focus_owner(owner: &str, focus: &str) -> bool {
    let focus = focus.trim();
    !focus.is_empty() && owner.to_lowercase().contains(&focus.to_lowercase())
}

//! Terminal view of an executive report

use crate::render::glyphs::{is_focus_owner, priority_marker, sentiment_glyph, RiskLevel};
use crate::report::{ExecutiveReport, MeetingRequest};

const TASK_WIDTH: usize = 40;
const OWNER_WIDTH: usize = 14;
const DEADLINE_WIDTH: usize = 14;

/// Render the report for reading in a terminal.
pub fn render_view(request: &MeetingRequest, report: &ExecutiveReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("📊 Executive Report: {}\n", request.name));
    output.push_str(&format!("   {}\n\n", request.date));

    output.push_str(&format!(
        "Sentiment: {} {}   Confidence: {}%   Action items: 📋 {}\n\n",
        sentiment_glyph(&report.sentiment),
        report.sentiment,
        report.confidence,
        report.action_items.len()
    ));

    output.push_str(&format!("🎯 Objective: {}\n\n", report.objective));

    output.push_str("📝 30-Second TL;DR\n");
    for point in &report.summary_points {
        output.push_str(&format!("  • {}\n", point));
    }

    if !report.action_items.is_empty() {
        output.push_str("\n✅ Action Item Tracker\n");
        output.push_str(&format!(
            "  {:<task$} {:<owner$} {:<deadline$} {}\n",
            "Task",
            "Owner",
            "Deadline",
            "Priority",
            task = TASK_WIDTH,
            owner = OWNER_WIDTH,
            deadline = DEADLINE_WIDTH,
        ));
        output.push_str(&format!(
            "  {}\n",
            "-".repeat(TASK_WIDTH + OWNER_WIDTH + DEADLINE_WIDTH + 12)
        ));

        let mut highlighted = false;
        for item in &report.action_items {
            let mine = is_focus_owner(&item.owner, &request.focus_owner);
            highlighted |= mine;
            output.push_str(&format!(
                "{} {:<task$} {:<owner$} {:<deadline$} {} {}\n",
                if mine { "*" } else { " " },
                truncate(&item.task, TASK_WIDTH),
                truncate(&item.owner, OWNER_WIDTH),
                truncate(&item.deadline, DEADLINE_WIDTH),
                priority_marker(&item.priority),
                item.priority,
                task = TASK_WIDTH,
                owner = OWNER_WIDTH,
                deadline = DEADLINE_WIDTH,
            ));
        }

        if highlighted {
            output.push_str(&format!(
                "  💡 Rows marked * are {}'s tasks\n",
                request.focus_owner.trim()
            ));
        }
    }

    if !report.decisions.is_empty() {
        output.push_str("\n🎯 Key Decisions Made\n");
        for decision in &report.decisions {
            output.push_str(&format!("  ✅ {}\n", decision));
        }
    }

    output.push_str(&format!("\n⏱️ Next Meeting\n  📅 {}\n", report.next_meeting));

    let risk = RiskLevel::assess(&report.risks);
    output.push_str(&format!(
        "\n⚠️ Risks & Blockers\n  {} {}\n",
        risk.glyph(),
        report.risks
    ));

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

//! Export serializers for finished reports

use anyhow::Result;
use serde::Serialize;

use crate::report::{ExecutiveReport, MeetingRequest};

const CSV_HEADER: [&str; 4] = ["Task", "Owner", "Deadline", "Priority"];

/// Flat, human-readable report document.
pub fn render_text_report(request: &MeetingRequest, report: &ExecutiveReport) -> String {
    let action_text = if report.action_items.is_empty() {
        "No action items found".to_string()
    } else {
        report
            .action_items
            .iter()
            .map(|item| {
                format!(
                    "• {} | {} | {} | {}",
                    item.task, item.owner, item.deadline, item.priority
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let decisions_text = if report.decisions.is_empty() {
        "No decisions recorded".to_string()
    } else {
        report
            .decisions
            .iter()
            .map(|d| format!("• {}", d))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut output = String::new();
    output.push_str("EXECUTIVE MEETING INTELLIGENCE REPORT\n");
    output.push_str("======================================\n");
    output.push_str(&format!("Meeting   : {}\n", request.name));
    output.push_str(&format!("Date      : {}\n", request.date));
    output.push_str(&format!("Sentiment : {}\n", report.sentiment));
    output.push_str(&format!("Confidence: {}%\n", report.confidence));

    push_section(&mut output, "OBJECTIVE", &report.objective);
    push_section(
        &mut output,
        "TL;DR SUMMARY",
        &report
            .summary_points
            .iter()
            .map(|p| format!("- {}", p))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    push_section(&mut output, "ACTION ITEMS", &action_text);
    push_section(&mut output, "KEY DECISIONS", &decisions_text);
    push_section(&mut output, "NEXT MEETING", &report.next_meeting);
    push_section(&mut output, "RISKS & BLOCKERS", &report.risks);

    output.push_str("\n======================================\n");
    output.push_str(&format!("Generated by {} {}\n", crate::APP_NAME, crate::VERSION));
    output
}

fn push_section(output: &mut String, heading: &str, body: &str) {
    output.push('\n');
    output.push_str(heading);
    output.push('\n');
    output.push_str(&"-".repeat(heading.chars().count()));
    output.push('\n');
    output.push_str(body);
    output.push('\n');
}

/// Action items as CSV with a `Task,Owner,Deadline,Priority` header.
pub fn render_actions_csv(report: &ExecutiveReport) -> String {
    let mut output = CSV_HEADER.join(",");
    output.push('\n');

    for item in &report.action_items {
        let row = [&item.task, &item.owner, &item.deadline, &item.priority]
            .map(|field| csv_field(field))
            .join(",");
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty JSON document with meeting metadata and the report.
pub fn render_json(request: &MeetingRequest, report: &ExecutiveReport) -> Result<String> {
    #[derive(Serialize)]
    struct ExportData<'a> {
        meeting: &'a MeetingRequest,
        report: &'a ExecutiveReport,
    }

    let data = ExportData {
        meeting: request,
        report,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// File stem derived from a meeting name, e.g. `Q3_Product_Planning_report`.
pub fn default_file_stem(meeting_name: &str, suffix: &str) -> String {
    let cleaned: String = meeting_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        format!("meeting_{}", suffix)
    } else {
        format!("{}_{}", cleaned, suffix)
    }
}

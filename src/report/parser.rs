//! Structured report parser
//!
//! Turns a raw model completion into an [`ExecutiveReport`]. Parsing is total:
//! every input string, including the empty string, yields a complete report.
//! Absent labels fall back to [`FALLBACK`] and malformed action rows are
//! dropped one at a time.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::models::{ActionItem, ExecutiveReport, FALLBACK};

pub const OBJECTIVE_LABEL: &str = "MEETING_OBJECTIVE";
pub const SENTIMENT_LABEL: &str = "SENTIMENT";
pub const CONFIDENCE_LABEL: &str = "CONFIDENCE";
pub const NEXT_MEETING_LABEL: &str = "NEXT_MEETING";
pub const RISKS_LABEL: &str = "RISKS";
pub const SUMMARY_LABELS: [&str; 3] = ["TLDR_1", "TLDR_2", "TLDR_3"];

/// The protocol numbers decisions 1 through 5 and nothing beyond.
pub const DECISION_LABELS: [&str; 5] = [
    "DECISION_1",
    "DECISION_2",
    "DECISION_3",
    "DECISION_4",
    "DECISION_5",
];

pub const ACTION_ITEM_START: &str = "ACTION_ITEM_START";
pub const ACTION_ITEM_END: &str = "ACTION_ITEM_END";

const ROW_MARKER: &str = "Task:";
const ROW_DELIMITER: char = '|';

static LABEL_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    [
        OBJECTIVE_LABEL,
        SENTIMENT_LABEL,
        CONFIDENCE_LABEL,
        NEXT_MEETING_LABEL,
        RISKS_LABEL,
    ]
    .into_iter()
    .chain(SUMMARY_LABELS)
    .chain(DECISION_LABELS)
    .filter_map(|label| label_pattern(label).ok().map(|re| (label, re)))
    .collect()
});

/// `<LABEL>:` at the start of a line (after optional blanks), capturing the
/// rest of that line.
fn label_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?m)^[ \t]*{}:(.*)$", regex::escape(label)))
}

/// Extract the value following `<label>:` on its own line.
///
/// The label is matched case-sensitively and only at the start of a line.
/// Only the first occurrence counts; its value is trimmed, and a blank value
/// is treated like an absent label. Returns `None` when the label is absent.
pub fn extract_field(label: &str, text: &str) -> Option<String> {
    match LABEL_PATTERNS.get(label) {
        Some(re) => first_value(re, text),
        None => first_value(&label_pattern(label).ok()?, text),
    }
}

fn first_value(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn field_or_fallback(label: &str, text: &str) -> String {
    extract_field(label, text).unwrap_or_else(|| FALLBACK.to_string())
}

/// Collect `DECISION_1`..`DECISION_5` in label order, skipping absent ones.
pub fn extract_decisions(text: &str) -> Vec<String> {
    DECISION_LABELS
        .iter()
        .map(|label| field_or_fallback(label, text))
        .filter(|decision| decision != FALLBACK)
        .collect()
}

/// Position of the line walker relative to the action item block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    Outside,
    Inside,
}

/// What a single line meant to the action item table
#[derive(Debug, PartialEq, Eq)]
enum TableLine {
    Start,
    End,
    Row(ActionItem),
    Ignored,
}

impl TableState {
    /// Classify `line` and return the state for the next line.
    ///
    /// Marker lines are consumed, never treated as data. START is checked
    /// before END.
    fn step(self, line: &str) -> (Self, TableLine) {
        if line.contains(ACTION_ITEM_START) {
            return (Self::Inside, TableLine::Start);
        }
        if line.contains(ACTION_ITEM_END) {
            return (Self::Outside, TableLine::End);
        }

        match self {
            Self::Inside if line.contains(ROW_MARKER) => match parse_action_row(line) {
                Some(item) => (self, TableLine::Row(item)),
                None => {
                    tracing::debug!(
                        segments = line.split(ROW_DELIMITER).count(),
                        "Dropping malformed action item row"
                    );
                    (self, TableLine::Ignored)
                }
            },
            _ => (self, TableLine::Ignored),
        }
    }
}

/// Split a `Task: .. | Owner: .. | Deadline: .. | Priority: ..` row.
///
/// Needs at least four pipe-separated segments; extra segments are ignored.
pub fn parse_action_row(line: &str) -> Option<ActionItem> {
    let mut segments = line.split(ROW_DELIMITER);
    let mut next_field = |prefix: &str| {
        segments
            .next()
            .map(|segment| segment.replace(prefix, "").trim().to_string())
    };

    let task = next_field("Task:")?;
    let owner = next_field("Owner:")?;
    let deadline = next_field("Deadline:")?;
    let priority = next_field("Priority:")?;

    Some(ActionItem {
        task,
        owner,
        deadline,
        priority,
    })
}

/// Walk the text line by line and collect rows found between the
/// `ACTION_ITEM_START` and `ACTION_ITEM_END` markers.
pub fn extract_action_items(text: &str) -> Vec<ActionItem> {
    let mut state = TableState::Outside;
    let mut items = Vec::new();

    for line in text.lines() {
        let (next, kind) = state.step(line);
        if let TableLine::Row(item) = kind {
            items.push(item);
        }
        state = next;
    }

    items
}

/// Parse a raw completion into a fully populated report.
pub fn parse_report(raw: &str) -> ExecutiveReport {
    let report = ExecutiveReport {
        objective: field_or_fallback(OBJECTIVE_LABEL, raw),
        sentiment: field_or_fallback(SENTIMENT_LABEL, raw),
        confidence: field_or_fallback(CONFIDENCE_LABEL, raw),
        summary_points: SUMMARY_LABELS.map(|label| field_or_fallback(label, raw)),
        action_items: extract_action_items(raw),
        decisions: extract_decisions(raw),
        next_meeting: field_or_fallback(NEXT_MEETING_LABEL, raw),
        risks: field_or_fallback(RISKS_LABEL, raw),
    };

    tracing::debug!(
        action_items = report.action_items.len(),
        decisions = report.decisions.len(),
        "Parsed completion"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_field_trims_value() {
        let text = "SENTIMENT:    Productive   \n";
        assert_eq!(extract_field("SENTIMENT", text).as_deref(), Some("Productive"));
    }

    #[test]
    fn extract_field_is_case_sensitive() {
        assert_eq!(extract_field("SENTIMENT", "sentiment: Tense"), None);
    }

    #[test]
    fn extract_field_requires_line_start() {
        let text = "The PREVIOUS_RISKS: none\nnote RISKS: hidden";
        assert_eq!(extract_field("RISKS", text), None);
    }

    #[test]
    fn extract_field_allows_leading_blanks() {
        let text = "  \tRISKS: Budget overrun";
        assert_eq!(extract_field("RISKS", text).as_deref(), Some("Budget overrun"));
    }

    #[test]
    fn extract_field_stays_on_its_line() {
        let text = "RISKS:\nMEETING_OBJECTIVE: Plan";
        assert_eq!(extract_field("RISKS", text), None);
        assert_eq!(extract_field("MEETING_OBJECTIVE", text).as_deref(), Some("Plan"));
    }

    #[test]
    fn extract_field_uses_first_occurrence() {
        let text = "CONFIDENCE: 70\nCONFIDENCE: 90";
        assert_eq!(extract_field("CONFIDENCE", text).as_deref(), Some("70"));
    }

    #[test]
    fn extract_field_blank_first_occurrence_is_absent() {
        let text = "RISKS:   \nRISKS: Vendor delay";
        assert_eq!(extract_field("RISKS", text), None);

        let report = parse_report(text);
        assert_eq!(report.risks, FALLBACK);
    }

    #[test]
    fn extract_field_handles_crlf() {
        let text = "SENTIMENT: Neutral\r\nCONFIDENCE: 55\r\n";
        assert_eq!(extract_field("SENTIMENT", text).as_deref(), Some("Neutral"));
        assert_eq!(extract_field("CONFIDENCE", text).as_deref(), Some("55"));
    }

    #[test]
    fn extract_field_accepts_uncached_labels() {
        let text = "OWNER_NOTE: call back (urgent)";
        assert_eq!(
            extract_field("OWNER_NOTE", text).as_deref(),
            Some("call back (urgent)")
        );
        assert_eq!(extract_field("(.*)", text), None);
    }

    #[test]
    fn numbered_labels_do_not_bleed() {
        let text = "DECISION_10: not a real slot\nDECISION_1: Ship";
        assert_eq!(extract_field("DECISION_1", text).as_deref(), Some("Ship"));
    }

    #[test]
    fn explicit_tbd_decision_is_skipped() {
        let text = "DECISION_1: TBD\nDECISION_2: Hire";
        assert_eq!(extract_decisions(text), vec!["Hire".to_string()]);
    }

    #[test]
    fn decisions_follow_label_order() {
        let text = "DECISION_3: Third\nDECISION_1: First";
        assert_eq!(extract_decisions(text), vec!["First", "Third"]);
    }

    #[test]
    fn sixth_decision_is_ignored() {
        let text = (1..=6)
            .map(|i| format!("DECISION_{i}: D{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_decisions(&text).len(), 5);
    }

    #[test]
    fn step_consumes_marker_lines() {
        let (state, kind) = TableState::Outside.step("ACTION_ITEM_START");
        assert_eq!(state, TableState::Inside);
        assert_eq!(kind, TableLine::Start);

        let (state, kind) = TableState::Inside.step("  ACTION_ITEM_END  ");
        assert_eq!(state, TableState::Outside);
        assert_eq!(kind, TableLine::End);
    }

    #[test]
    fn step_ignores_rows_outside_block() {
        let row = "Task: A | Owner: B | Deadline: C | Priority: D";
        let (state, kind) = TableState::Outside.step(row);
        assert_eq!(state, TableState::Outside);
        assert_eq!(kind, TableLine::Ignored);
    }

    #[test]
    fn step_ignores_lines_without_task_marker() {
        let (state, kind) = TableState::Inside.step("A | B | C | D");
        assert_eq!(state, TableState::Inside);
        assert_eq!(kind, TableLine::Ignored);
    }

    #[test]
    fn step_drops_short_rows_and_stays_inside() {
        let (state, kind) = TableState::Inside.step("Task: Fix bug | Owner: Alice");
        assert_eq!(state, TableState::Inside);
        assert_eq!(kind, TableLine::Ignored);
    }

    #[test]
    fn start_marker_wins_over_end_marker() {
        let (state, _) = TableState::Outside.step("ACTION_ITEM_START ACTION_ITEM_END");
        assert_eq!(state, TableState::Inside);
    }

    #[test]
    fn action_row_ignores_extra_segments() {
        let item = parse_action_row("Task: A | Owner: B | Deadline: C | Priority: D | extra")
            .expect("row should parse");
        assert_eq!(item.priority, "D");
    }

    #[test]
    fn action_row_tolerates_missing_prefixes() {
        let item = parse_action_row("Task: Ship | Sarah | Friday | High").expect("row should parse");
        assert_eq!(item.owner, "Sarah");
        assert_eq!(item.deadline, "Friday");
        assert_eq!(item.priority, "High");
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let text = "ACTION_ITEM_START\nTask: A | Owner: B | Deadline: C | Priority: D";
        assert_eq!(extract_action_items(text).len(), 1);
    }

    #[test]
    fn repeated_blocks_are_handled_alike() {
        let text = "\
ACTION_ITEM_START
Task: One | Owner: A | Deadline: Mon | Priority: High
ACTION_ITEM_END
Task: Outside | Owner: X | Deadline: Y | Priority: Z
ACTION_ITEM_START
Task: Two | Owner: B | Deadline: Tue | Priority: Low
ACTION_ITEM_END";
        let tasks: Vec<_> = extract_action_items(text)
            .into_iter()
            .map(|item| item.task)
            .collect();
        assert_eq!(tasks, vec!["One", "Two"]);
    }
}

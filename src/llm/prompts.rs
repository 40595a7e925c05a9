//! Prompt construction for executive report generation

use crate::report::MeetingRequest;

/// Fixed system instruction. The labels and markers here are exactly what
/// [`crate::report::parse_report`] looks for.
pub const SYSTEM_PROMPT: &str = "\
# ROLE
You are the Principal Strategy Analyst. Transform meeting transcripts
into high-signal executive intelligence.

# OUTPUT FORMAT (MANDATORY - follow exactly)
MEETING_OBJECTIVE: (One sentence summary)
SENTIMENT: (Productive / Neutral / Tense / Unresolved)
CONFIDENCE: (0-100)

TLDR_1: (Key insight 1)
TLDR_2: (Key insight 2)
TLDR_3: (Key insight 3)

ACTION_ITEM_START
Task: (description) | Owner: (name) | Deadline: (date or TBD) | Priority: (High/Medium/Low)
Task: (description) | Owner: (name) | Deadline: (date or TBD) | Priority: (High/Medium/Low)
ACTION_ITEM_END

DECISION_1: (Decision name): (Explanation)
DECISION_2: (Decision name): (Explanation)
DECISION_3: (Decision name): (Explanation)

NEXT_MEETING: (Proposed date and agenda)
RISKS: (Risks or blockers. If none write: No blockers identified)

# RULES
- NO conversational filler
- TBD if deadline unknown
- Professional corporate English
- Active verbs only
";

/// Build the per-request user message carrying metadata and transcript.
pub fn build_user_prompt(request: &MeetingRequest) -> String {
    format!(
        "Meeting Name: {name}\n\
Meeting Date: {date}\n\
Highlight tasks for: {owner}\n\
\n\
Transcript:\n\
---\n\
{transcript}\n\
---\n",
        name = request.name,
        date = request.date,
        owner = request.focus_owner,
        transcript = request.transcript.trim(),
    )
}

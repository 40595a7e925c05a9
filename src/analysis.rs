//! Analysis pipeline orchestration
//!
//! `MeetingRequest` in, `ExecutiveReport` out. The provider is injected so the
//! pipeline runs against canned completions in tests.

use std::io::Read;
use std::path::Path;

use crate::llm::LlmProvider;
use crate::report::{parse_report, ExecutiveReport, MeetingRequest};
use crate::{DebriefError, Result};

/// Sample transcript bundled for trying the tool out
pub const SAMPLE_TRANSCRIPT: &str = "\
Meeting: Q3 Product Planning
Date: Monday 10 AM
Attendees: Sarah (PM), John (Dev Lead), Lisa (Designer), Mike (Marketing)

Sarah: Okay let's get started. We need to finalize the Q3 roadmap today.
John: The backend for the new dashboard is 80% done. Ready to test by next Friday.
Lisa: I finished the mockups for the mobile app. I'll send them to John by tomorrow.
Sarah: Great. Mike, what's the status on the marketing campaign?
Mike: We're behind schedule. Need the final product screenshots first. Can Lisa send those by Wednesday?
Lisa: Yes I can do Wednesday for the screenshots.
Sarah: John, can you make sure the demo environment is ready by Thursday?
John: Thursday works. I'll also need someone to review the API documentation. Can Sarah do that by Friday?
Sarah: I'll review the API docs by Friday. We've decided to push the mobile app launch to August 15th.
Mike: That works for marketing.
Sarah: Let's meet again next Monday at 10 AM. Any blockers?
John: No blockers from dev side.
Lisa: No blockers.
Mike: Just need those screenshots by Wednesday.
Sarah: Alright, we're done. Thanks everyone.
";

/// Read a transcript or saved completion from a file, or from stdin when
/// `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Request a completion for `request` and parse it into a report.
///
/// Provider failures abort before any report exists. Once a completion is
/// available, parsing cannot fail.
pub async fn analyze(
    provider: &dyn LlmProvider,
    request: &MeetingRequest,
) -> Result<ExecutiveReport> {
    if request.transcript.trim().is_empty() {
        return Err(DebriefError::EmptyTranscript);
    }

    tracing::info!(
        meeting = %request.name,
        model = provider.model(),
        "Generating executive report"
    );

    let completion = provider
        .complete(request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Model request failed"))?;

    tracing::debug!(chars = completion.len(), "Received completion");

    let report = parse_report(&completion);

    tracing::info!(
        action_items = report.action_items.len(),
        decisions = report.decisions.len(),
        "Executive report ready"
    );

    Ok(report)
}

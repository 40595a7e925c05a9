//! Report module for debrief
//!
//! Holds the report data model and the parser that recovers it from a raw
//! model completion.

mod models;
pub mod parser;

pub use models::{ActionItem, ExecutiveReport, MeetingRequest, FALLBACK};
pub use parser::{extract_action_items, extract_decisions, extract_field, parse_report};

//! Splits a free-form model response into an analysis and an enhanced prompt.
//!
//! Models do not always follow the requested output format, so several marker
//! conventions are tried in order and the first one that matches wins:
//!
//! 1. `## Analysis` ... `## Enhanced Prompt` markdown headers
//! 2. an inline `ENHANCED PROMPT:` label
//! 3. a bare `ROLE:` ... `TASK:` block ending at the first blank line
//!
//! When nothing matches, the whole response becomes the analysis and the
//! prompt section carries [`FALLBACK_PROMPT`]. Splitting never fails.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ParsedResult;

pub const ANALYSIS_MARKER: &str = "## Analysis";
pub const ENHANCED_PROMPT_MARKER: &str = "## Enhanced Prompt";
pub const INLINE_PROMPT_MARKER: &str = "ENHANCED PROMPT:";

const ROLE_LABEL: &str = "ROLE:";
const TASK_LABEL: &str = "TASK:";

pub const FALLBACK_PROMPT: &str =
    "Could not identify a clear prompt section. Please see the analysis tab.";

/// Leftmost `ROLE:` through the next `TASK:`, ending lazily at a blank line or end of text.
static ROLE_TASK_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(ROLE:.*?TASK:.*?)(?:\n\n|\z)").expect("ROLE/TASK span pattern is valid")
});

pub fn split_sections(raw_text: &str) -> ParsedResult {
    if let Some(parsed) = split_markdown_headers(raw_text) {
        debug!("Split response on markdown section headers");
        return parsed;
    }

    if let Some(parsed) = split_inline_marker(raw_text) {
        debug!("Split response on inline {} marker", INLINE_PROMPT_MARKER);
        return parsed;
    }

    if raw_text.contains(ROLE_LABEL) && raw_text.contains(TASK_LABEL) {
        if let Some(parsed) = split_role_task_span(raw_text) {
            debug!("Split response on ROLE/TASK block");
            return parsed;
        }
    }

    debug!("No section markers found in response ({} chars)", raw_text.len());
    ParsedResult::new(raw_text, FALLBACK_PROMPT)
}

/// Keeps everything after the first `## Enhanced Prompt`, later headers included.
fn split_markdown_headers(raw_text: &str) -> Option<ParsedResult> {
    if !raw_text.contains(ANALYSIS_MARKER) {
        return None;
    }
    let (before, after) = raw_text.split_once(ENHANCED_PROMPT_MARKER)?;
    Some(ParsedResult::new(
        before.replace(ANALYSIS_MARKER, "").trim(),
        after.trim(),
    ))
}

/// Keeps everything after the first inline marker, later markers included.
fn split_inline_marker(raw_text: &str) -> Option<ParsedResult> {
    let (before, after) = raw_text.split_once(INLINE_PROMPT_MARKER)?;
    let prompt = format!("{} {}", INLINE_PROMPT_MARKER, after.trim());
    Some(ParsedResult::new(before.trim(), prompt.trim_end()))
}

fn split_role_task_span(raw_text: &str) -> Option<ParsedResult> {
    let span = ROLE_TASK_SPAN.captures(raw_text)?.get(1)?;
    Some(ParsedResult::new(
        raw_text[..span.start()].trim(),
        span.as_str().trim(),
    ))
}

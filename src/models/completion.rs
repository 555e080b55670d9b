use serde::{Deserialize, Serialize};

use super::ModelChoice;

/// One chat completion call, built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: ModelChoice,
    pub system_instruction: String,
    pub user_message: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text returned by the provider, before any section splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub raw_text: String,
}

impl CompletionResult {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// The two display sections derived from a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub analysis: String,
    pub enhanced_prompt: String,
}

impl ParsedResult {
    pub fn new(analysis: impl Into<String>, enhanced_prompt: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            enhanced_prompt: enhanced_prompt.into(),
        }
    }

    /// Results are only shown when both sections have content.
    pub fn is_displayable(&self) -> bool {
        !self.analysis.is_empty() && !self.enhanced_prompt.is_empty()
    }
}

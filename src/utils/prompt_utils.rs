//! Prompt Building Utilities
//!
//! Fixed system instruction and the user message template sent with every
//! enhancement request.

use crate::config::CompletionConfig;
use crate::models::{CompletionRequest, ModelChoice, PromptComponents};

pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert prompt engineer who helps improve prompts for AI systems. Your task is to analyze
the user's provided Role, Context, and Task components and generate a more effective prompt.

For each component:
1. Identify missing information or ambiguities
2. Suggest improvements for clarity and specificity
3. Note any assumptions you're making

Then create an enhanced version of the full prompt that combines these components effectively.

IMPORTANT: Format your response exactly as follows:

## Analysis
[Your analysis of the prompt components here]

## Enhanced Prompt
[The complete enhanced prompt here]";

pub fn build_user_message(components: &PromptComponents) -> String {
    format!(
        "Please help me enhance the following prompt components:\n\n\
         ROLE: {}\n\n\
         CONTEXT: {}\n\n\
         TASK: {}",
        components.role, components.context, components.task
    )
}

pub fn build_completion_request(
    model: ModelChoice,
    components: &PromptComponents,
    config: &CompletionConfig,
) -> CompletionRequest {
    CompletionRequest {
        model,
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_message: build_user_message(components),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}

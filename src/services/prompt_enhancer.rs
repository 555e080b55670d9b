use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::clients::{CompletionClient, ProviderError};
use crate::config::CompletionConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ModelChoice, ParsedResult, PromptComponents};
use crate::utils::prompt_utils::build_completion_request;
use crate::utils::section_splitter::split_sections;

/// Everything a single form submission carries.
#[derive(Debug, Clone, Default)]
pub struct EnhancementSubmission {
    pub api_key: String,
    pub model: ModelChoice,
    pub components: PromptComponents,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhancementOutcome {
    pub request_id: Uuid,
    pub model: ModelChoice,
    pub components: PromptComponents,
    pub result: ParsedResult,
}

/// Runs one enhancement cycle: validate, call the provider once, split the reply.
pub struct PromptEnhancerService {
    client: Arc<dyn CompletionClient>,
    completion_config: CompletionConfig,
}

impl PromptEnhancerService {
    pub fn new(client: Arc<dyn CompletionClient>, completion_config: CompletionConfig) -> Self {
        Self {
            client,
            completion_config,
        }
    }

    #[instrument(skip(self, submission), fields(model = %submission.model))]
    pub async fn enhance(&self, submission: &EnhancementSubmission) -> AppResult<EnhancementOutcome> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();

        submission.components.validate()?;

        if submission.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey.into());
        }

        info!(
            request_id = %request_id,
            role_length = submission.components.role.len(),
            context_length = submission.components.context.len(),
            task_length = submission.components.task.len(),
            "Processing prompt enhancement request"
        );

        let request = build_completion_request(
            submission.model,
            &submission.components,
            &self.completion_config,
        );

        let completion = self
            .client
            .complete(&submission.api_key, &request)
            .await
            .map_err(|e| {
                warn!(
                    request_id = %request_id,
                    kind = e.kind(),
                    "Completion provider call failed: {}",
                    e
                );
                AppError::from(e)
            })?;

        let result = split_sections(&completion.raw_text);

        info!(
            request_id = %request_id,
            response_length = completion.raw_text.len(),
            displayable = result.is_displayable(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Prompt enhancement completed"
        );

        Ok(EnhancementOutcome {
            request_id,
            model: submission.model,
            components: submission.components.clone(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock_client::MockCompletionClient;
    use crate::utils::prompt_utils::SYSTEM_INSTRUCTION;
    use crate::utils::section_splitter::FALLBACK_PROMPT;
    use pretty_assertions::assert_eq;

    fn submission(api_key: &str, role: &str, context: &str, task: &str) -> EnhancementSubmission {
        EnhancementSubmission {
            api_key: api_key.to_string(),
            model: ModelChoice::default(),
            components: PromptComponents::new(role, context, task),
        }
    }

    fn service(client: Arc<MockCompletionClient>) -> PromptEnhancerService {
        PromptEnhancerService::new(client, CompletionConfig::default())
    }

    #[tokio::test]
    async fn test_enhance_splits_provider_reply() {
        let client = Arc::new(MockCompletionClient::replying(
            "## Analysis\nRole is vague\n## Enhanced Prompt\nYou are a senior editor.",
        ));
        let outcome = service(client.clone())
            .enhance(&submission("sk-test", "editor", "blog", "edit"))
            .await
            .unwrap();

        assert_eq!(outcome.result.analysis, "Role is vague");
        assert_eq!(outcome.result.enhanced_prompt, "You are a senior editor.");
        assert_eq!(outcome.model, ModelChoice::Gpt35Turbo);
        assert_eq!(client.calls(), 1);

        let request = client.last_request().unwrap();
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert!(request.user_message.contains("ROLE: editor"));
        assert!(request.user_message.contains("CONTEXT: blog"));
        assert!(request.user_message.contains("TASK: edit"));
    }

    #[tokio::test]
    async fn test_blank_field_never_calls_provider() {
        let client = Arc::new(MockCompletionClient::replying("unused"));
        let svc = service(client.clone());

        for sub in [
            submission("sk-test", "", "blog", "edit"),
            submission("sk-test", "editor", "   ", "edit"),
            submission("sk-test", "editor", "blog", ""),
        ] {
            let err = svc.enhance(&sub).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_never_calls_provider() {
        let client = Arc::new(MockCompletionClient::replying("unused"));
        let err = service(client.clone())
            .enhance(&submission("", "editor", "blog", "edit"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_yields_no_result() {
        let client = Arc::new(MockCompletionClient::failing(ProviderError::Authentication(
            "Incorrect API key provided".to_string(),
        )));
        let err = service(client.clone())
            .enhance(&submission("sk-bad", "editor", "blog", "edit"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(
            err.user_message(),
            "Error calling OpenAI API: authentication failed: Incorrect API key provided"
        );
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let client = Arc::new(MockCompletionClient::replying(""));
        let outcome = service(client)
            .enhance(&submission("sk-test", "editor", "blog", "edit"))
            .await
            .unwrap();

        assert_eq!(outcome.result.analysis, "");
        assert_eq!(outcome.result.enhanced_prompt, FALLBACK_PROMPT);
        assert!(!outcome.result.is_displayable());
    }
}

use crate::clients::{CompletionClient, ProviderError};
use crate::config::settings::{AppSettings, CompletionConfig};
use crate::error::AppError;
use crate::models::{CompletionRequest, CompletionResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{error, info, instrument, warn};

use super::structs::*;

// OpenAI API base URL
const OPENAI_BASE_URL: &str = "https://api.openai.com";

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        Self::new_with_base_url(
            app_settings.completion.base_url.clone(),
            &app_settings.completion,
        )
    }

    pub fn new_with_base_url(base_url: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = crate::utils::http_client::new_api_client(config)?;
        let base_url = if base_url.trim().is_empty() {
            OPENAI_BASE_URL.to_string()
        } else {
            base_url.trim_end_matches('/').to_string()
        };

        Ok(Self { client, base_url })
    }

    fn endpoint_url(&self) -> String {
        // Accept base URLs configured with or without the /v1 suffix
        format!("{}{}", self.base_url.trim_end_matches("/v1"), CHAT_COMPLETIONS_PATH)
    }

    // Chat Completions
    #[instrument(skip(self, api_key, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        api_key: &str,
        request: &OpenAIChatRequest,
    ) -> Result<OpenAIChatResponse, ProviderError> {
        let url = self.endpoint_url();
        info!("OpenAI endpoint URL: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed - Model: {}, Error: {}", request.model, e);
                if e.is_timeout() {
                    ProviderError::Network(format!("request to OpenAI timed out: {}", e))
                } else if e.is_connect() {
                    ProviderError::Network(format!("could not connect to OpenAI: {}", e))
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response".to_string());
            warn!("OpenAI request failed with status {}", status);
            return Err(error_for_status(status, &error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("failed to read body: {}", e)))?;

        serde_json::from_str::<OpenAIChatResponse>(&body)
            .map_err(|e| ProviderError::MalformedResponse(format!("OpenAI deserialization failed: {}", e)))
    }
}

/// Maps a non-success status to a provider error, preferring the provider's own message.
fn error_for_status(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<OpenAIError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

fn to_chat_request(request: &CompletionRequest) -> OpenAIChatRequest {
    OpenAIChatRequest {
        model: request.model.id().to_string(),
        messages: vec![
            OpenAIMessage::system(request.system_instruction.clone()),
            OpenAIMessage::user(request.user_message.clone()),
        ],
        temperature: Some(request.temperature),
        max_tokens: Some(request.max_tokens),
        stream: None,
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, ProviderError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let response = self.chat_completion(api_key, &to_chat_request(request)).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("response contained no message content".to_string())
            })?;

        Ok(CompletionResult::new(content))
    }
}

use async_trait::async_trait;

use crate::models::{CompletionRequest, CompletionResult};

/// Failure of a single completion call, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("no API key provided")]
    MissingApiKey,
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::MissingApiKey => "missing_api_key",
            ProviderError::Authentication(_) => "authentication",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::Network(_) => "network",
            ProviderError::Api { .. } => "api",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Anything that can turn a [`CompletionRequest`] into model output.
///
/// Implementations make exactly one attempt per call and never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, ProviderError>;
}

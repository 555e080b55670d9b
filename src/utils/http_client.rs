use reqwest::Client;
use std::time::Duration;

use crate::config::CompletionConfig;
use crate::error::AppError;

pub fn new_api_client(config: &CompletionConfig) -> Result<Client, AppError> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        // Shorter than typical upstream keep-alive so stale connections are not reused
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

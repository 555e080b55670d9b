use std::env;
use std::str::FromStr;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub completion: CompletionConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Settings for the outbound chat completion call. The API key is not part
/// of this: it arrives with every submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            request_timeout_secs: 120,
            connect_timeout_secs: 30,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: &str, expected: &str) -> Result<T, AppError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::Configuration(format!("{} must be {}", name, expected)))
}

impl AppSettings {
    pub fn from_env() -> Result<Self, AppError> {
        // App config
        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "prompt-enhancer".to_string());
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Server config
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port: u16 = parse_var("SERVER_PORT", "8080", "a valid port number")?;

        // CORS origins
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Completion provider
        let defaults = CompletionConfig::default();
        let base_url = env::var("OPENAI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let temperature: f32 = parse_var("COMPLETION_TEMPERATURE", "0.7", "a valid number")?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AppError::Configuration(
                "COMPLETION_TEMPERATURE must be between 0.0 and 2.0".to_string(),
            ));
        }

        let max_tokens: u32 = parse_var("COMPLETION_MAX_TOKENS", "1500", "a valid number")?;
        let request_timeout_secs: u64 =
            parse_var("COMPLETION_TIMEOUT_SECS", "120", "a valid number of seconds")?;
        let connect_timeout_secs: u64 =
            parse_var("COMPLETION_CONNECT_TIMEOUT_SECS", "30", "a valid number of seconds")?;

        Ok(Self {
            app: AppConfig {
                name: app_name,
                environment,
            },
            server: ServerConfig {
                host: server_host,
                port: server_port,
                cors_origins,
            },
            completion: CompletionConfig {
                base_url,
                temperature,
                max_tokens,
                request_timeout_secs,
                connect_timeout_secs,
            },
        })
    }
}

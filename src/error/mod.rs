use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

use crate::clients::ProviderError;

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    Auth(String),
    BadRequest(String),
    Configuration(String),
    Validation(String),
    External(String),
    TooManyRequests(String),
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    pub error_type: String,
}

impl AppError {
    /// Message shown to the person filling in the form, without the variant prefix.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Internal(m)
            | AppError::Auth(m)
            | AppError::BadRequest(m)
            | AppError::Configuration(m)
            | AppError::Validation(m)
            | AppError::External(m)
            | AppError::TooManyRequests(m) => m,
        }
    }

    /// Validation problems are shown as warnings, everything else as errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::Internal(_) => "internal_error",
            AppError::Auth(_) => "authentication_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::Configuration(_) => "configuration_error",
            AppError::Validation(_) => "validation_error",
            AppError::External(_) => "external_service_error",
            AppError::TooManyRequests(_) => "too_many_requests",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::External(e) => write!(f, "External service error: {}", e),
            AppError::TooManyRequests(e) => write!(f, "Too many requests: {}", e),
        }
    }
}

impl StdError for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let error_response = ErrorResponse {
            code: status_code.as_u16(),
            message: self.to_string(),
            error_type: self.error_type().to_string(),
        };

        HttpResponse::build(status_code).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::External(_) => StatusCode::BAD_GATEWAY,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(error: tera::Error) -> Self {
        AppError::Internal(format!("Template rendering error: {}", error))
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let message = format!("Error calling OpenAI API: {}", error);
        match error {
            ProviderError::MissingApiKey => {
                AppError::Configuration("Please enter your OpenAI API key".to_string())
            }
            ProviderError::Authentication(_) => AppError::Auth(message),
            ProviderError::RateLimited(_) => AppError::TooManyRequests(message),
            ProviderError::Network(_)
            | ProviderError::Api { .. }
            | ProviderError::MalformedResponse(_) => AppError::External(message),
        }
    }
}

// Define AppResult type alias for Result<T, AppError>
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_map_to_app_errors() {
        let err: AppError = ProviderError::Authentication("bad key".to_string()).into();
        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(err.user_message().starts_with("Error calling OpenAI API:"));

        let err: AppError = ProviderError::RateLimited("slow down".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);

        let err: AppError = ProviderError::Network("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_missing_api_key_message() {
        let err: AppError = ProviderError::MissingApiKey.into();
        assert_eq!(err.user_message(), "Please enter your OpenAI API key");
        assert!(!err.is_warning());
    }

    #[test]
    fn test_validation_is_warning() {
        let err = AppError::Validation("Please fill in all three prompt components".to_string());
        assert!(err.is_warning());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}

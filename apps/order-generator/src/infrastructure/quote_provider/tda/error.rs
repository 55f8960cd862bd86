//! TD Ameritrade-specific error types.

use thiserror::Error;

use crate::application::ports::ProviderError;

/// Errors from the TD Ameritrade adapter.
#[derive(Debug, Error, Clone)]
pub enum TdaError {
    /// No API key configured.
    #[error("TD Ameritrade API key is not defined")]
    MissingApiKey,

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Network error (retryable).
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Max retries exceeded.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

impl From<TdaError> for ProviderError {
    fn from(err: TdaError) -> Self {
        match err {
            TdaError::MissingApiKey => Self::MissingApiKey,
            TdaError::Api { status, message } => Self::Status { status, message },
            TdaError::AuthenticationFailed => Self::Status {
                status: 401,
                message: "Authentication failed".to_string(),
            },
            TdaError::RateLimited { .. } => Self::RateLimited,
            TdaError::Network(message) => Self::Connection { message },
            TdaError::JsonParse(message) => Self::Decode { message },
            TdaError::MaxRetriesExceeded { attempts } => Self::Connection {
                message: format!("Max retries exceeded after {attempts} attempts"),
            },
        }
    }
}

use serde_json::Value;
use thiserror::Error;

use crate::auth::TokenStoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Login rejected or unusable login response
    #[error("{message}")]
    Authentication { message: String },

    #[error("Not authorized ({status}): {message}")]
    Authorization {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    /// Payload rejected by the server, or caught before sending (`status` is `None`)
    #[error("Validation failed: {message}")]
    Validation {
        status: Option<u16>,
        message: String,
        payload: Option<Value>,
    },

    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        payload: Option<Value>,
    },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Store(#[from] TokenStoreError),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// Pull a human-readable message out of a JSON error body
    pub fn server_message(payload: &Value) -> Option<String> {
        ["message", "error", "msg"]
            .iter()
            .filter_map(|key| payload.get(*key))
            .find_map(|v| v.as_str())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    /// Map a non-2xx response to an error.
    ///
    /// The message is the server's own when the body carries one, otherwise a
    /// generic description naming `operation`.
    pub fn from_status(operation: &str, status: reqwest::StatusCode, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(Self::server_message)
            .unwrap_or_else(|| {
                let truncated = Self::truncate_body(body.trim());
                if truncated.is_empty() || payload.is_some() {
                    format!("Failed to {}", operation)
                } else {
                    format!("Failed to {}: {}", operation, truncated)
                }
            });

        let code = status.as_u16();
        match code {
            401 | 403 => ApiError::Authorization {
                status: code,
                message,
                payload,
            },
            400 | 409 | 422 => ApiError::Validation {
                status: Some(code),
                message,
                payload,
            },
            404 => ApiError::NotFound { message, payload },
            429 => ApiError::RateLimited { message },
            _ => ApiError::Server {
                status: code,
                message,
                payload,
            },
        }
    }

    /// Client-side validation failure; no request was sent
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::Validation {
            status: None,
            message: message.into(),
            payload: None,
        }
    }

    /// HTTP status carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authorization { status, .. } | ApiError::Server { status, .. } => {
                Some(*status)
            }
            ApiError::Validation { status, .. } => *status,
            ApiError::NotFound { .. } => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for showing to the user
    pub fn message(&self) -> String {
        match self {
            ApiError::Authentication { message }
            | ApiError::Authorization { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::RateLimited { message }
            | ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Server error payload, when the response body was JSON
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Authorization { payload, .. }
            | ApiError::Validation { payload, .. }
            | ApiError::NotFound { payload, .. }
            | ApiError::Server { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// True when the server rejected the bearer token
    pub fn is_authorization(&self) -> bool {
        matches!(self, ApiError::Authorization { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

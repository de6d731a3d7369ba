//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Error status from the API (e.g., INVALID_ARGUMENT).
        status: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response carried no usable candidate text.
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

/// API error response envelope from Gemini.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Numeric error code.
    pub code: u16,
    /// Error message.
    pub message: String,
    /// Error status string (e.g., INVALID_ARGUMENT).
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_error_display() {
        let err = GeminiError::RateLimited(60);
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = GeminiError::Api {
            status: "INVALID_ARGUMENT".to_string(),
            message: "maxOutputTokens is too large".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (INVALID_ARGUMENT): maxOutputTokens is too large"
        );
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.code, 400);
        assert_eq!(response.error.status, "INVALID_ARGUMENT");
        assert_eq!(response.error.message, "API key not valid");
    }
}

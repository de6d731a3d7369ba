//! Gemini API client for the chat assistant.
//!
//! Non-streaming `generateContent` access only: the chat widget fires one
//! request per user turn and awaits the complete reply.

pub mod error;
pub mod types;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

pub use error::GeminiError;
use error::ApiErrorResponse;
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    SystemInstruction};

/// Sampling parameters for the sales assistant.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::Parse` if the API key contains invalid header
    /// characters or the HTTP client fails to build.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(config.api_key.expose_secret())
                .map_err(|e| GeminiError::Parse(format!("Invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
                api_base: config.api_base.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Send a conversation and get the complete reply text.
    ///
    /// # Arguments
    ///
    /// * `contents` - Conversation turns, oldest first, ending with the
    ///   latest user turn
    /// * `system` - System instruction (catalog context and brand voice)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns an error
    /// response, or the response carries no candidate text.
    #[instrument(skip(self, contents, system), fields(model = %self.inner.model))]
    pub async fn generate(
        &self,
        contents: Vec<Content>,
        system: Option<String>,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents,
            system_instruction: system.map(SystemInstruction::text),
            generation_config: Some(GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            }),
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.api_base, self.inner.model
        );

        let response = self.inner.client.post(&url).json(&request).send().await?;
        self.handle_response(response).await
    }

    /// Handle a response, successful or otherwise.
    async fn handle_response(&self, response: reqwest::Response) -> Result<String, GeminiError> {
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                "gemini usage"
            );
        }

        parsed.text().ok_or_else(|| {
            GeminiError::EmptyResponse("response contained no candidate text".to_string())
        })
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return GeminiError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse the API error envelope
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    GeminiError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    GeminiError::Api {
                        status: status.to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => GeminiError::Http(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: SecretString::from("test-key"),
            model: "gemini-3-flash-preview".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
        }
    }

    #[test]
    fn test_client_builds_and_trims_base_url() {
        let client = GeminiClient::new(&test_config()).expect("client builds");
        assert_eq!(
            client.inner.api_base,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
    }
}

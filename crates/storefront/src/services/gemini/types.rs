//! Types for the Gemini API.
//!
//! These types match the `generateContent` request and response format.

use serde::{Deserialize, Serialize};

use hive_image_core::ChatRole;

/// A single turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The role of the turn ("user" or "model").
    pub role: String,
    /// Content parts. In this storefront there is always exactly one text
    /// part per turn.
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a single-text-part turn.
    #[must_use]
    pub fn text(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role: role.as_wire_str().to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// System instruction wrapper. Unlike conversation turns it carries no role.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Build a single-part system instruction.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Sampling parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, oldest first.
    pub contents: Vec<Content>,
    /// System instruction (catalog context and brand voice).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    /// Sampling parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates. The first candidate carries the reply.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage information.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage counts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::text(ChatRole::User, "Hello")],
            system_instruction: Some(SystemInstruction::text("Be helpful.")),
            generation_config: Some(GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 500,
            }),
        };

        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"maxOutputTokens\":500"));
        assert!(json.contains("\"topK\":40"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "The HiveSmart Kettle is "}, {"text": "£89.99."}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 18}
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            response.text().as_deref(),
            Some("The HiveSmart Kettle is £89.99.")
        );
        let usage = response.usage_metadata.expect("usage present");
        assert_eq!(usage.prompt_token_count, 120);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str("{}").expect("deserialize empty");
        assert!(response.text().is_none());
    }
}

//! The Hive Image AI sales assistant.
//!
//! Wraps the Gemini client with the storefront's system instruction (brand
//! voice plus the product catalog as JSON context) and the single error
//! policy the chat widget has: any failure is logged and replaced with a
//! static apology pointing at the support line.

use serde::{Deserialize, Serialize};

use hive_image_core::ChatRole;

use crate::catalog::{Catalog, brand};
use crate::services::gemini::{GeminiClient, types::Content};

/// A transcript entry rendered in the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub role: ChatRole,
    pub text: String,
}

/// The visitor's chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<TranscriptMessage>,
}

impl Default for ChatTranscript {
    /// A fresh transcript opens with the assistant's greeting.
    fn default() -> Self {
        Self {
            messages: vec![TranscriptMessage {
                role: ChatRole::Model,
                text: greeting(),
            }],
        }
    }
}

impl ChatTranscript {
    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    /// Append a turn.
    pub fn push(&mut self, role: ChatRole, text: impl Into<String>) {
        self.messages.push(TranscriptMessage {
            role,
            text: text.into(),
        });
    }

    /// Wire-format conversation history for the Gemini API.
    #[must_use]
    pub fn to_contents(&self) -> Vec<Content> {
        self.messages
            .iter()
            .map(|message| Content::text(message.role, message.text.clone()))
            .collect()
    }
}

/// Greeting shown at the top of every new transcript.
#[must_use]
pub fn greeting() -> String {
    format!(
        "Hi! I'm your {} assistant. I can help you find premium electronics, \
         home appliances, or answer any technical questions. How can I help you today?",
        brand::NAME
    )
}

/// Fallback reply used whenever the Gemini call fails in any way.
#[must_use]
pub fn fallback_reply() -> String {
    format!(
        "I'm having a bit of trouble connecting to my brain right now. Please try \
         again or contact our UK support team directly at {}.",
        brand::SUPPORT_PHONE
    )
}

/// Build the system instruction: brand voice rules plus the catalog as JSON.
#[must_use]
pub fn system_instruction(catalog: &Catalog) -> String {
    let product_context = serde_json::to_string(
        &catalog
            .products()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "category": p.category.to_string(),
                    "price": format!("£{:.2}", p.price),
                    "desc": p.description,
                })
            })
            .collect::<Vec<_>>(),
    )
    .unwrap_or_default();

    format!(
        "You are {name} AI Sales Assistant. {name} is a premium UK-based electronics \
         and home appliance retailer.\n\
         Use British English. Prices are in GBP (£).\n\
         Product Catalog: {product_context}\n\
         Always be polite, helpful, and try to suggest specific products from the \
         catalog if relevant.\n\
         Keep answers concise and professional.\n\
         If the user needs human help, direct them to our support line at {phone}.",
        name = brand::NAME,
        phone = brand::SUPPORT_PHONE,
    )
}

/// Run one assistant turn: history plus the new user message in, reply out.
///
/// Never fails: any Gemini error is logged and replaced by
/// [`fallback_reply`].
pub async fn respond(
    client: &GeminiClient,
    catalog: &Catalog,
    transcript: &ChatTranscript,
    user_message: &str,
) -> String {
    let mut contents = transcript.to_contents();
    contents.push(Content::text(ChatRole::User, user_message));

    match client
        .generate(contents, Some(system_instruction(catalog)))
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "gemini request failed");
            fallback_reply()
        }
    }
}

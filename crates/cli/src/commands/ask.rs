//! One-shot assistant query.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` - API key for the Gemini chat assistant

use hive_image_storefront::catalog::CATALOG;
use hive_image_storefront::config::GeminiConfig;
use hive_image_storefront::services::assistant::{self, ChatTranscript};
use hive_image_storefront::services::gemini::GeminiClient;

/// Ask the sales assistant one question and print the reply.
///
/// A Gemini failure is absorbed by the assistant's fallback reply, the
/// same way the storefront chat widget behaves.
///
/// # Errors
///
/// Returns an error if configuration is missing or the client cannot be
/// built.
pub async fn ask(question: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = GeminiConfig::from_env()?;
    let client = GeminiClient::new(&config)?;

    let transcript = ChatTranscript::default();
    let reply = assistant::respond(&client, &CATALOG, &transcript, question).await;

    println!("{reply}");
    Ok(())
}

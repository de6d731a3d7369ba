//! Chat assistant route handlers.
//!
//! The widget posts each user turn and swaps in the refreshed transcript
//! fragment. A failed Gemini call never errors the request; the assistant
//! answers with its static fallback instead.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use hive_image_core::ChatRole;

use crate::error::Result;
use crate::models::session::keys;
use crate::services::assistant::{self, ChatTranscript};
use crate::state::AppState;

/// Maximum accepted length of one user message, in characters.
const MAX_MESSAGE_CHARS: usize = 1_000;

/// Chat send form data.
#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub message: String,
}

/// Chat transcript fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_messages.html")]
pub struct ChatMessagesTemplate {
    pub transcript: ChatTranscript,
}

async fn get_transcript(session: &Session) -> Result<ChatTranscript> {
    Ok(session.get(keys::CHAT_TRANSCRIPT).await?.unwrap_or_default())
}

/// Display the transcript fragment (HTMX).
#[instrument(skip(session))]
pub async fn messages(session: Session) -> Result<impl IntoResponse> {
    let transcript = get_transcript(&session).await?;
    Ok(ChatMessagesTemplate { transcript })
}

/// Handle one chat turn (HTMX).
///
/// Appends the user message, asks the assistant, appends its reply, and
/// returns the refreshed transcript. Blank messages are ignored.
#[instrument(skip(state, session, form))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SendForm>,
) -> Result<impl IntoResponse> {
    let mut transcript = get_transcript(&session).await?;

    let message: String = form.message.trim().chars().take(MAX_MESSAGE_CHARS).collect();
    if !message.is_empty() {
        // respond() appends the user turn to the wire request itself
        let reply =
            assistant::respond(state.gemini(), state.catalog(), &transcript, &message).await;
        transcript.push(ChatRole::User, message);
        transcript.push(ChatRole::Model, reply);
        session.insert(keys::CHAT_TRANSCRIPT, &transcript).await?;
    }

    Ok(ChatMessagesTemplate { transcript })
}

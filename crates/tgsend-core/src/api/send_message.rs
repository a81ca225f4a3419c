use async_trait::async_trait;
use serde_json::json;

use crate::{domain::ChatId, errors::Error, session::BotSession, transport::Payload, Result};

use super::ApiRequest;

/// Text message send (`sendMessage`).
#[derive(Debug)]
pub struct SendMessageRequest<'a> {
    session: &'a BotSession,
    chat_id: ChatId,
    text: String,
}

impl<'a> SendMessageRequest<'a> {
    /// Rejects empty text up front; length limits are enforced server-side
    /// and not duplicated here.
    pub fn new(session: &'a BotSession, chat_id: ChatId, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::Validation("message text must not be empty".to_string()));
        }
        Ok(Self {
            session,
            chat_id,
            text,
        })
    }
}

#[async_trait]
impl ApiRequest for SendMessageRequest<'_> {
    fn method(&self) -> &'static str {
        "sendMessage"
    }

    fn session(&self) -> &BotSession {
        self.session
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Json(json!({
            "chat_id": self.chat_id.0,
            "text": self.text,
        })))
    }
}

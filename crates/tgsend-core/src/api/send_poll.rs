use async_trait::async_trait;
use serde_json::json;

use crate::{domain::ChatId, errors::Error, session::BotSession, transport::Payload, Result};

use super::ApiRequest;

const MIN_POLL_OPTIONS: usize = 2;
const MAX_POLL_OPTIONS: usize = 10;

/// Poll send (`sendPoll`).
#[derive(Debug)]
pub struct SendPollRequest<'a> {
    session: &'a BotSession,
    chat_id: ChatId,
    question: String,
    options: Vec<String>,
}

impl<'a> SendPollRequest<'a> {
    /// The platform accepts 2 to 10 answer options; anything else is rejected
    /// here before a call is made.
    pub fn new(
        session: &'a BotSession,
        chat_id: ChatId,
        question: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self> {
        let question = question.into();
        if question.is_empty() {
            return Err(Error::Validation("poll question must not be empty".to_string()));
        }
        if options.len() < MIN_POLL_OPTIONS || options.len() > MAX_POLL_OPTIONS {
            return Err(Error::Validation(format!(
                "a poll needs {MIN_POLL_OPTIONS} to {MAX_POLL_OPTIONS} options, got {}",
                options.len()
            )));
        }
        Ok(Self {
            session,
            chat_id,
            question,
            options,
        })
    }
}

#[async_trait]
impl ApiRequest for SendPollRequest<'_> {
    fn method(&self) -> &'static str {
        "sendPoll"
    }

    fn session(&self) -> &BotSession {
        self.session
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Json(json!({
            "chat_id": self.chat_id.0,
            "question": self.question,
            "options": self.options,
        })))
    }
}

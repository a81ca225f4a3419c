use async_trait::async_trait;

use crate::{session::BotSession, transport::Payload, Result};

use super::ApiRequest;

/// Identity check (`getMe`). No payload beyond the token in the URL; the
/// success result is the bot's own identity record.
#[derive(Debug)]
pub struct GetMeRequest<'a> {
    session: &'a BotSession,
}

impl<'a> GetMeRequest<'a> {
    pub fn new(session: &'a BotSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ApiRequest for GetMeRequest<'_> {
    fn method(&self) -> &'static str {
        "getMe"
    }

    fn session(&self) -> &BotSession {
        self.session
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Json(serde_json::json!({})))
    }
}

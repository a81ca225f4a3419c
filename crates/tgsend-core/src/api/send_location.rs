use async_trait::async_trait;
use serde_json::json;

use crate::{domain::ChatId, session::BotSession, transport::Payload, Result};

use super::ApiRequest;

/// Location send (`sendLocation`). Coordinate range checks are the server's
/// job, none are duplicated here.
#[derive(Debug)]
pub struct SendLocationRequest<'a> {
    session: &'a BotSession,
    chat_id: ChatId,
    latitude: f64,
    longitude: f64,
}

impl<'a> SendLocationRequest<'a> {
    pub fn new(session: &'a BotSession, chat_id: ChatId, latitude: f64, longitude: f64) -> Self {
        Self {
            session,
            chat_id,
            latitude,
            longitude,
        }
    }
}

#[async_trait]
impl ApiRequest for SendLocationRequest<'_> {
    fn method(&self) -> &'static str {
        "sendLocation"
    }

    fn session(&self) -> &BotSession {
        self.session
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Json(json!({
            "chat_id": self.chat_id.0,
            "latitude": self.latitude,
            "longitude": self.longitude,
        })))
    }
}

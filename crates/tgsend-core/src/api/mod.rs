//! Typed requests against the Bot API.
//!
//! One type per remote operation; all of them POST and share the same
//! execute path: compose the endpoint URL, build the payload, hand it to the
//! mounted transport, parse the `ok`/`result` envelope.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    errors::Error,
    session::BotSession,
    transport::{HttpResponse, Payload},
    Result,
};

pub mod get_me;
pub mod send_file;
pub mod send_location;
pub mod send_message;
pub mod send_poll;

pub use get_me::GetMeRequest;
pub use send_file::SendFileRequest;
pub use send_location::SendLocationRequest;
pub use send_message::SendMessageRequest;
pub use send_poll::SendPollRequest;

/// A single call against the Bot API.
///
/// Variants supply the remote method name and a payload; `execute` is shared.
/// Each request dispatches exactly once per call, nothing retries here.
#[async_trait]
pub trait ApiRequest: Send + Sync {
    /// Remote method name, e.g. `sendMessage`.
    fn method(&self) -> &'static str;

    /// Session this request is bound to.
    fn session(&self) -> &BotSession;

    /// Build the request body. Input validation that needs I/O (file reads)
    /// happens here, before any network traffic.
    fn payload(&self) -> Result<Payload>;

    /// Run the request and return the envelope's `result` field.
    async fn execute(&self) -> Result<Value> {
        let url = self.session().endpoint_url(self.method());
        let payload = self.payload()?;
        let transport = self.session().transport_for(&url)?;

        debug!(method = self.method(), "dispatching request");
        let response = transport.post(&url, payload).await?;
        parse_response(&response)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: Option<bool>,
    result: Option<Value>,
    error_code: Option<i64>,
    description: Option<String>,
}

/// Parse the platform's response envelope.
///
/// The platform signals rejection through `ok: false` (usually alongside a
/// 4xx status), so classification reads the body, not the status code. An
/// envelope missing its required fields is a contract mismatch, not an API
/// error.
pub fn parse_response(response: &HttpResponse) -> Result<Value> {
    let envelope: Envelope = serde_json::from_slice(&response.body).map_err(|e| {
        Error::ResponseFormat(format!(
            "body is not valid json (status {status}): {e}",
            status = response.status
        ))
    })?;

    match envelope.ok {
        Some(true) => envelope
            .result
            .ok_or_else(|| Error::ResponseFormat("envelope has ok=true but no 'result'".to_string())),
        Some(false) => match (envelope.error_code, envelope.description) {
            (Some(code), Some(description)) => Err(Error::Api { code, description }),
            _ => Err(Error::ResponseFormat(
                "error envelope is missing 'error_code' or 'description'".to_string(),
            )),
        },
        None => Err(Error::ResponseFormat("envelope has no 'ok' field".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Seek, SeekFrom, Write},
        sync::{Arc, Mutex},
    };

    use serde_json::json;

    use super::*;
    use crate::{
        domain::{ChatId, MediaType},
        transport::{Part, Transport},
    };

    /// Transport double: records every call, answers with a canned body.
    struct RecordingTransport {
        calls: Mutex<Vec<(String, Payload)>>,
        body: Vec<u8>,
    }

    impl RecordingTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                body: body.as_bytes().to_vec(),
            })
        }

        fn calls(&self) -> Vec<(String, Payload)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn post(&self, url: &str, payload: Payload) -> Result<HttpResponse> {
            self.calls.lock().unwrap().push((url.to_string(), payload));
            Ok(HttpResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    fn session_with(transport: Arc<RecordingTransport>) -> BotSession {
        let mut session = BotSession::new("123:abc").unwrap();
        session.mount("https", transport);
        session
    }

    #[test]
    fn parses_success_envelope_verbatim() {
        let resp = HttpResponse {
            status: 200,
            body: br#"{"ok": true, "result": {"id": 42, "is_bot": true}}"#.to_vec(),
        };
        let result = parse_response(&resp).unwrap();
        assert_eq!(result, json!({"id": 42, "is_bot": true}));
    }

    #[test]
    fn parses_error_envelope_with_code_and_description() {
        let resp = HttpResponse {
            status: 400,
            body: br#"{"ok": false, "error_code": 400, "description": "Bad Request"}"#.to_vec(),
        };
        match parse_response(&resp) {
            Err(Error::Api { code, description }) => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_a_format_error() {
        let resp = HttpResponse {
            status: 502,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert!(matches!(parse_response(&resp), Err(Error::ResponseFormat(_))));
    }

    #[test]
    fn missing_ok_field_is_a_format_error() {
        let resp = HttpResponse {
            status: 200,
            body: br#"{"result": 1}"#.to_vec(),
        };
        assert!(matches!(parse_response(&resp), Err(Error::ResponseFormat(_))));
    }

    #[test]
    fn error_envelope_without_code_is_a_format_error() {
        let resp = HttpResponse {
            status: 400,
            body: br#"{"ok": false}"#.to_vec(),
        };
        assert!(matches!(parse_response(&resp), Err(Error::ResponseFormat(_))));
    }

    #[tokio::test]
    async fn get_me_returns_identity_record() {
        let transport = RecordingTransport::replying(r#"{"ok": true, "result": {"id": 42}}"#);
        let session = session_with(transport.clone());

        let result = GetMeRequest::new(&session).execute().await.unwrap();
        assert_eq!(result, json!({"id": 42}));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.telegram.org/bot123:abc/getMe");
        assert_eq!(calls[0].1, Payload::Json(json!({})));
    }

    #[tokio::test]
    async fn send_message_posts_exact_json_body() {
        let transport = RecordingTransport::replying(r#"{"ok": true, "result": {"message_id": 7}}"#);
        let session = session_with(transport.clone());

        SendMessageRequest::new(&session, ChatId(1), "foo")
            .unwrap()
            .execute()
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.telegram.org/bot123:abc/sendMessage");
        assert_eq!(calls[0].1, Payload::Json(json!({"chat_id": 1, "text": "foo"})));
    }

    #[tokio::test]
    async fn send_file_posts_multipart_with_document_part() {
        let transport = RecordingTransport::replying(r#"{"ok": true, "result": {"message_id": 8}}"#);
        let session = session_with(transport.clone());

        let mut file = tempfile();
        file.write_all(b"the document body").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        SendFileRequest::new(&session, ChatId(1), &file, "lorem ipsum", MediaType::Document)
            .execute()
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.telegram.org/bot123:abc/sendDocument");

        let parts = match &calls[0].1 {
            Payload::Multipart(parts) => parts.clone(),
            other => panic!("expected multipart payload, got {other:?}"),
        };
        assert!(parts.contains(&Part::text("chat_id", "1")));
        assert!(parts.contains(&Part::text("caption", "lorem ipsum")));
        assert!(parts.iter().any(|p| matches!(
            p,
            Part::File { name, bytes, .. } if name == "document" && bytes == b"the document body"
        )));
    }

    #[tokio::test]
    async fn empty_text_never_reaches_the_transport() {
        let transport = RecordingTransport::replying(r#"{"ok": true, "result": {}}"#);
        let session = session_with(transport.clone());

        let err = SendMessageRequest::new(&session, ChatId(1), "").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        struct FailingTransport;

        #[async_trait]
        impl Transport for FailingTransport {
            async fn post(&self, _url: &str, _payload: Payload) -> Result<HttpResponse> {
                Err(Error::Transport("connection refused".to_string()))
            }
        }

        let mut session = BotSession::new("123:abc").unwrap();
        session.mount("https", Arc::new(FailingTransport));

        let err = GetMeRequest::new(&session).execute().await.unwrap_err();
        match err {
            Error::Transport(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_rejection_surfaces_through_execute() {
        let transport = RecordingTransport::replying(
            r#"{"ok": false, "error_code": 403, "description": "Forbidden: bot was blocked"}"#,
        );
        let session = session_with(transport);

        let err = SendMessageRequest::new(&session, ChatId(1), "hi")
            .unwrap()
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { code: 403, .. }));
    }

    fn tempfile() -> std::fs::File {
        let path = std::env::temp_dir().join(format!(
            "tgsend-api-test-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let file = std::fs::OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();
        std::fs::remove_file(&path).ok();
        file
    }
}

use async_trait::async_trait;

use crate::Result;

/// One part of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Part {
    Text { name: String, value: String },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Part::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Part::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

/// Body of an outbound call, as a plain description.
///
/// Adapters turn this into their client's body type; test doubles inspect it
/// directly without any HTTP machinery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(Vec<Part>),
}

/// Raw response from the transport, before envelope parsing.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Port for HTTP execution.
///
/// The reqwest implementation lives in `tgsend-http`; sessions resolve an
/// adapter per URL scheme so tests can mount a double instead. Implementations
/// must be safe for concurrent use, the session layer adds no locking.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single POST. Network-level failures map to `Error::Transport`;
    /// the platform's own rejections come back as a normal response body.
    async fn post(&self, url: &str, payload: Payload) -> Result<HttpResponse>;
}

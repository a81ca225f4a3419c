//! HTTP adapter (reqwest).
//!
//! Implements the `tgsend-core` transport port over a shared reqwest client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use tgsend_core::{
    errors::Error,
    transport::{HttpResponse, Part, Payload, Transport},
    Result,
};

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;
        Ok(Self { http })
    }

    fn form_from(parts: Vec<Part>) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                Part::Text { name, value } => form.text(name, value),
                Part::File {
                    name,
                    file_name,
                    bytes,
                } => form.part(name, reqwest::multipart::Part::bytes(bytes).file_name(file_name)),
            };
        }
        form
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, payload: Payload) -> Result<HttpResponse> {
        let request = self.http.post(url);
        let request = match payload {
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(parts) => request.multipart(Self::form_from(parts)),
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("reading response body failed: {e}")))?
            .to_vec();
        trace!(status, len = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

use std::{fs::File, io::Read};

use async_trait::async_trait;

use crate::{
    domain::{ChatId, MediaType},
    errors::Error,
    session::BotSession,
    transport::{Part, Payload},
    Result,
};

use super::ApiRequest;

const DEFAULT_FILE_NAME: &str = "file";

/// File upload (`sendDocument`/`sendPhoto`/`sendVideo`/`sendAudio`, selected
/// by the media type).
///
/// The file handle is borrowed: the request reads from the current position
/// to end-of-stream and never closes it. Opening, positioning and closing
/// stay with the caller.
#[derive(Debug)]
pub struct SendFileRequest<'a> {
    session: &'a BotSession,
    chat_id: ChatId,
    file: &'a File,
    caption: String,
    media_type: MediaType,
    file_name: String,
}

impl<'a> SendFileRequest<'a> {
    pub fn new(
        session: &'a BotSession,
        chat_id: ChatId,
        file: &'a File,
        caption: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            session,
            chat_id,
            file,
            caption: caption.into(),
            media_type,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Filename reported in the multipart part. The platform shows it to the
    /// receiver for documents.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

#[async_trait]
impl ApiRequest for SendFileRequest<'_> {
    fn method(&self) -> &'static str {
        self.media_type.method()
    }

    fn session(&self) -> &BotSession {
        self.session
    }

    fn payload(&self) -> Result<Payload> {
        let mut bytes = Vec::new();
        let mut reader = self.file;
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Validation(format!("file is not readable: {e}")))?;

        let mut parts = vec![Part::text("chat_id", self.chat_id.to_string())];
        if !self.caption.is_empty() {
            parts.push(Part::text("caption", self.caption.clone()));
        }
        parts.push(Part::file(
            self.media_type.field_name(),
            self.file_name.clone(),
            bytes,
        ));

        Ok(Payload::Multipart(parts))
    }
}

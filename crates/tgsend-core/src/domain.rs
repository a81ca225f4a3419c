/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of media carried by a file upload.
///
/// Each variant maps 1:1 to the multipart field name the platform expects and
/// to the remote method that accepts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Document,
    Photo,
    Video,
    Audio,
}

impl MediaType {
    /// Name of the multipart field that carries the file bytes.
    pub fn field_name(self) -> &'static str {
        match self {
            MediaType::Document => "document",
            MediaType::Photo => "photo",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    /// Remote method that accepts this media type.
    pub fn method(self) -> &'static str {
        match self {
            MediaType::Document => "sendDocument",
            MediaType::Photo => "sendPhoto",
            MediaType::Video => "sendVideo",
            MediaType::Audio => "sendAudio",
        }
    }
}

/// Core error type for the sender.
///
/// Adapter crates map their specific failures into this type so callers can
/// tell a rejected call apart from a broken connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad session or environment setup. Fails fast, never mid-call.
    #[error("config error: {0}")]
    Config(String),

    /// Bad request inputs, detected before any network traffic.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure, propagated unchanged from the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// The platform accepted the request and rejected it. A normal outcome.
    #[error("api error {code}: {description}")]
    Api { code: i64, description: String },

    /// Response body did not match the `ok`/`result` envelope contract.
    #[error("response format error: {0}")]
    ResponseFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

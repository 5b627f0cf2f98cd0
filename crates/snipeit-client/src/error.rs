//! Errors returned by the Snipe-IT client.
//!
//! Every failure is returned to the caller; nothing is retried or logged.
//! When the server was reached, the [`Response`] handle travels with the
//! error so status and headers remain inspectable.

use crate::response::Response;

/// Errors that can occur with the Snipe-IT client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid base URL or token at construction time
    #[error("configuration error: {0}")]
    Configuration(String),
    /// List options could not be rendered as query parameters
    #[error("encoding error: {0}")]
    Encoding(String),
    /// The request could not be built; nothing was sent
    #[error("request build error: {0}")]
    RequestBuild(#[from] RequestBuildError),
    /// Network-level failure (connect, TLS, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// A successful response body did not match the expected shape
    #[error("decode error (status {}): {source}", .response.status())]
    Decode {
        /// The response whose body failed to decode
        response: Box<Response>,
        /// What went wrong
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// The response handle, if the request reached the server.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Decode { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }
}

/// Reasons a request could not be built.
#[derive(Debug, thiserror::Error)]
pub enum RequestBuildError {
    /// The path did not resolve against the base URL
    #[error("invalid URL: {0}")]
    Url(#[source] url::ParseError),
    /// The body could not be serialized to JSON
    #[error("body serialization failed: {0}")]
    Body(#[source] serde_json::Error),
}

/// Reasons a successful response could not be decoded.
///
/// A timestamp that fails [`snipeit_model::TimestampError`] checks fails the
/// whole record and arrives here as [`DecodeError::Json`] with
/// [`serde_json::error::Category::Data`]. Its message starts with
/// `invalid timestamp` (bad layout, the raw string is quoted) or
/// `malformed timestamp` (wrong JSON shape); use
/// [`DecodeError::is_timestamp`] to tell it apart from other data errors.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Reading the body from the connection failed
    #[error("reading body failed: {0}")]
    Body(#[source] reqwest::Error),
    /// The body is not the expected JSON shape (including bad timestamps)
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// Copying the body into the caller's sink failed
    #[error("writing body failed: {0}")]
    Sink(#[source] std::io::Error),
}

impl DecodeError {
    /// Whether a timestamp field failed to decode.
    #[must_use]
    pub fn is_timestamp(&self) -> bool {
        match self {
            Self::Json(e) if e.is_data() => {
                let msg = e.to_string();
                msg.starts_with("invalid timestamp") || msg.starts_with("malformed timestamp")
            }
            _ => false,
        }
    }
}

//! Response handle and decode targets.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::io::Write;
use url::Url;

/// Metadata of a completed HTTP exchange.
///
/// The body has always been read to the end by the time a `Response` is
/// handed out. For non-2xx statuses the body is not decoded and is kept in
/// [`Response::unread_body`] instead.
#[derive(Debug, Clone)]
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) url: Url,
    pub(crate) unread_body: Vec<u8>,
}

impl Response {
    /// HTTP status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL, after any redirects.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether the status is in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body of a non-2xx response. Empty for successful responses.
    #[must_use]
    pub fn unread_body(&self) -> &[u8] {
        &self.unread_body
    }
}

/// Where a successful response body goes.
pub enum DecodeTarget<'a, T> {
    /// Drop the body
    Discard,
    /// Copy the raw bytes, no JSON decoding
    Sink(&'a mut (dyn Write + Send)),
    /// Decode JSON into the record; an empty body leaves it untouched
    Json(&'a mut T),
}

//! HTTP client for the Snipe-IT API.
//!
//! Requests go through two steps. [`Client::new_request`] resolves a path
//! against the base URL and attaches the JSON and bearer headers.
//! [`Client::execute`] sends it and routes a successful body into a
//! [`DecodeTarget`]. Responses outside `200..=299` are handed back without
//! touching the body, so callers must check [`Response::status`].

use crate::config::ClientConfig;
use crate::error::{DecodeError, Error, RequestBuildError};
use crate::resources::{CategoriesService, HardwareService, LocationsService};
use crate::response::{DecodeTarget, Response};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

const JSON: &str = "application/json";

/// Client for the Snipe-IT REST API.
///
/// Immutable once built. Cloning is cheap and clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    authorization: HeaderValue,
}

impl Client {
    /// Create a client with default transport settings.
    ///
    /// A trailing `/` is added to the base URL path if missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if either argument is empty, the URL
    /// does not parse, or the HTTP client cannot be created.
    pub fn new(base_url: &str, token: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            token: token.to_string(),
            ..Default::default()
        })
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] on invalid settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let (base_url, authorization) = validate(&config.base_url, &config.token)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .use_rustls_tls()
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, timeout = ?config.timeout, "Snipe-IT client created");

        Ok(Self {
            http,
            base_url,
            authorization,
        })
    }

    /// Create a client on top of a caller-supplied transport.
    ///
    /// Timeouts, proxies and TLS settings come from `http` as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if either argument is empty or the
    /// URL does not parse.
    pub fn with_http_client(
        base_url: &str,
        token: &str,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let (base_url, authorization) = validate(base_url, token)?;
        Ok(Self {
            http,
            base_url,
            authorization,
        })
    }

    /// The API root every request path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Hardware assets.
    #[must_use]
    pub fn hardware(&self) -> HardwareService<'_> {
        HardwareService::new(self)
    }

    /// Locations.
    #[must_use]
    pub fn locations(&self) -> LocationsService<'_> {
        LocationsService::new(self)
    }

    /// Categories.
    #[must_use]
    pub fn categories(&self) -> CategoriesService<'_> {
        CategoriesService::new(self)
    }

    /// Build a request for `path`, relative to the base URL.
    ///
    /// One leading `/` is stripped so the path never replaces the base URL's
    /// own path. If `body` is given it is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestBuild`] if the URL cannot be resolved or the
    /// body cannot be serialized.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let relative = path.strip_prefix('/').unwrap_or(path);
        let url = self
            .base_url
            .join(relative)
            .map_err(RequestBuildError::Url)?;

        let mut request = Request::new(method, url);
        if let Some(body) = body {
            // serde_json never HTML-escapes, so `<`, `>` and `&` go out verbatim.
            let bytes = serde_json::to_vec(body).map_err(RequestBuildError::Body)?;
            *request.body_mut() = Some(bytes.into());
        }

        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(AUTHORIZATION, self.authorization.clone());

        Ok(request)
    }

    /// Send `request` and deliver a successful body to `target`.
    ///
    /// The body is always read to the end. For statuses outside `200..=299`
    /// nothing is decoded and the response comes back as `Ok`; its body is
    /// available from [`Response::unread_body`]. An empty or blank successful
    /// body leaves a JSON target untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the server could not be reached, and
    /// [`Error::Decode`] if a successful body could not be read or decoded.
    pub async fn execute<T>(
        &self,
        request: Request,
        target: DecodeTarget<'_, T>,
    ) -> Result<Response, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let resp = self.http.execute(request).await.map_err(Error::Transport)?;

        let status = resp.status();
        let mut response = Response {
            status,
            headers: resp.headers().clone(),
            url: resp.url().clone(),
            unread_body: Vec::new(),
        };
        let body = resp.bytes().await;

        tracing::debug!(url = %response.url, status = status.as_u16(), "received response");

        if !status.is_success() {
            response.unread_body = body.map(|b| b.to_vec()).unwrap_or_default();
            return Ok(response);
        }

        let body = match body {
            Ok(body) => body,
            Err(e) => return Err(decode_error(response, DecodeError::Body(e))),
        };

        let outcome = match target {
            DecodeTarget::Discard => Ok(()),
            DecodeTarget::Sink(sink) => sink.write_all(&body).map_err(DecodeError::Sink),
            DecodeTarget::Json(_) if body.iter().all(u8::is_ascii_whitespace) => Ok(()),
            DecodeTarget::Json(value) => serde_json::from_slice(&body)
                .map(|decoded| *value = decoded)
                .map_err(DecodeError::Json),
        };

        match outcome {
            Ok(()) => Ok(response),
            Err(source) => Err(decode_error(response, source)),
        }
    }

    /// `GET path` and decode the body into a fresh `T`.
    ///
    /// On a non-2xx status `T` stays at its default value.
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<(T, Response), Error>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.new_request::<()>(Method::GET, path, None)?;
        let mut value = T::default();
        let response = self.execute(request, DecodeTarget::Json(&mut value)).await?;
        Ok((value, response))
    }
}

fn decode_error(response: Response, source: DecodeError) -> Error {
    Error::Decode {
        response: Box::new(response),
        source,
    }
}

/// Check construction arguments and derive the base URL and auth header.
fn validate(base_url: &str, token: &str) -> Result<(Url, HeaderValue), Error> {
    if base_url.is_empty() {
        return Err(Error::Configuration("a base URL must be provided".to_string()));
    }
    if token.is_empty() {
        return Err(Error::Configuration("a token must be provided".to_string()));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| Error::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "base URL {base_url:?} cannot have relative paths"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::Configuration("token is not a valid header value".to_string()))?;
    authorization.set_sensitive(true);

    Ok((url, authorization))
}

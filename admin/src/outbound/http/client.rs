//! Reqwest-backed admin API client.
//!
//! This adapter owns transport details only: URL assembly, bearer
//! attachment, body encoding, status mapping and envelope decoding. Every
//! failure is logged, broadcast once on the error channel and returned to
//! the caller; success messages reach the notifier only when a request opts
//! in.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{normalize_ids, server_message};
use super::form::MultipartFields;
use crate::domain::ports::{Notifier, TokenStore};
use crate::domain::{ApiError, BearerToken, Envelope, ErrorBroadcast};

/// Request body variants understood by the client.
#[derive(Debug)]
pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartFields),
}

/// One call against the admin API, relative to the base URL.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: RequestBody,
    show_success: bool,
}

impl ApiRequest {
    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|segment| (*segment).to_owned()).collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
            show_success: false,
        }
    }

    pub(crate) fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub(crate) fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub(crate) fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub(crate) fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub(crate) fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    pub(crate) fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|error| {
            ApiError::invalid_request(format!("could not encode request body: {error}"))
        })?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub(crate) fn multipart(mut self, fields: MultipartFields) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// Forward a non-blank server message to the notifier on success.
    pub(crate) const fn show_success(mut self) -> Self {
        self.show_success = true;
        self
    }

    fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Shared HTTP client for every admin endpoint.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
    errors: ErrorBroadcast,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Build a client with an explicit request timeout.
    ///
    /// Failures are broadcast on `errors`; opted-in success messages go to
    /// `notifier`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        tokens: Arc<dyn TokenStore>,
        errors: ErrorBroadcast,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            tokens,
            errors,
            notifier,
        })
    }

    /// Base URL every request path is resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform `request`, decoding the envelope into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Envelope<T>, ApiError> {
        let path = request.path();
        let method = request.method.clone();
        match self.execute(request).await {
            Ok(envelope) => Ok(envelope),
            Err(error) => {
                warn!(
                    method = %method,
                    path = %path,
                    status = ?error.status(),
                    code = ?error.code(),
                    error = %error,
                    "admin API call failed"
                );
                self.errors.broadcast(error.user_message());
                Err(error)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Envelope<T>, ApiError> {
        let url = resolve_url(&self.base_url, &request.segments, &request.query)?;
        let mut builder = self
            .client
            .request(request.method, url)
            .header(ACCEPT, "application/json");
        if let Some(token) = self.current_token() {
            builder = builder.header(AUTHORIZATION, token.authorization_value());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => builder.multipart(fields.into_form()?),
        };

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let envelope = decode_envelope::<T>(body.as_ref())?;
        if request.show_success {
            if let Some(message) = envelope.message() {
                self.notifier.success(message);
            }
        }
        Ok(envelope)
    }

    fn current_token(&self) -> Option<BearerToken> {
        match self.tokens.load() {
            Ok(token) => token,
            Err(error) => {
                debug!(error = %error, "token unreadable; sending request without it");
                None
            }
        }
    }
}

fn resolve_url(
    base_url: &Url,
    segments: &[String],
    query: &[(&'static str, String)],
) -> Result<Url, ApiError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::invalid_request(format!("base URL {base_url} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope {
            success: true,
            data: None,
            message: None,
        });
    }
    let mut value: Value = serde_json::from_slice(body).map_err(|error| {
        ApiError::decode(format!(
            "invalid JSON payload: {error} (body: {})",
            body_preview(body)
        ))
    })?;
    normalize_ids(&mut value);
    serde_json::from_value(value)
        .map_err(|error| ApiError::decode(format!("unexpected response shape: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout(error.to_string())
    } else {
        ApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let error = ApiError::from_status(status.as_u16(), server_message(body));
    debug!(status = status.as_u16(), body = %body_preview(body), "non-success response");
    error
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

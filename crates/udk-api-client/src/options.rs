//! Per-request configuration records

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::{ApiResult, Error};

/// Hook invoked with the fully built request just before dispatch.
///
/// The indicator's request-start transition has already run by the time the
/// hook fires, mirroring how the hide transition runs before the completion
/// hook on the other side of the lifecycle.
pub type BeforeSendHook = Box<dyn FnOnce(&reqwest::Request) + Send>;

/// Hook invoked with the settled transport result once a request finishes,
/// on success and on failure alike.
pub type CompleteHook = Box<dyn FnOnce(&ApiResult<reqwest::Response>) + Send>;

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured data, encoded by the client according to the request
    /// method and content type (JSON body, query string, or form body).
    Data(serde_json::Value),
    /// Pre-encoded bytes passed through to the transport untouched.
    Raw(Vec<u8>),
}

/// Expected response format, driving the request's `Accept` header.
///
/// Defaults to [`ResponseFormat::Json`] when unset on the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// `application/json`
    #[default]
    Json,
    /// `text/plain`
    Text,
    /// `text/html`
    Html,
}

impl ResponseFormat {
    /// The `Accept` header value for this format.
    pub fn accept_header(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Html => "text/html",
        }
    }
}

/// Configuration for a single request issued through
/// [`ApiClient::perform`](crate::ApiClient::perform).
///
/// Constructed per request and consumed by the dispatch; the method string
/// is compared case-insensitively against `GET` when deciding whether the
/// JSON defaults apply.
pub struct RequestOptions {
    pub(crate) method: String,
    pub(crate) url: String,
    pub(crate) body: Option<RequestBody>,
    pub(crate) content_type: Option<String>,
    pub(crate) response_format: Option<ResponseFormat>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) before_send: Option<BeforeSendHook>,
    pub(crate) complete: Option<CompleteHook>,
}

impl RequestOptions {
    /// Create options for an arbitrary method.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
            content_type: None,
            response_format: None,
            headers: Vec::new(),
            timeout: None,
            before_send: None,
            complete: None,
        }
    }

    /// Create options for a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Create options for a `POST` request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Create options for a `PUT` request.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new("PUT", url)
    }

    /// Create options for a `DELETE` request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new("DELETE", url)
    }

    /// Attach a structured payload.
    ///
    /// The payload is captured as a JSON value here; how it is encoded on the
    /// wire (JSON body, query string, or form body) is decided at dispatch
    /// time from the method and content type. Conversion failures surface as
    /// [`Error::Serialization`] at this call site so the caller can fall back
    /// to [`raw`](Self::raw) or abort instead of sending a half-built
    /// request.
    pub fn data(mut self, data: impl Serialize) -> ApiResult<Self> {
        let value = serde_json::to_value(data)?;
        self.body = Some(RequestBody::Data(value));
        Ok(self)
    }

    /// Attach a pre-encoded payload sent byte-for-byte.
    ///
    /// Raw payloads are never re-encoded, which is the typed counterpart of
    /// disabling payload processing on the original transport.
    pub fn raw(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Some(RequestBody::Raw(bytes.into()));
        self
    }

    /// Set an explicit `Content-Type`, disabling the JSON defaults.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Set the expected response format (the `Accept` header).
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Add a request header passed through to the transport.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a request timeout passed through to the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Install a hook that observes the built request before dispatch.
    pub fn before_send(mut self, hook: impl FnOnce(&reqwest::Request) + Send + 'static) -> Self {
        self.before_send = Some(Box::new(hook));
        self
    }

    /// Install a hook that observes the settled result after dispatch.
    pub fn on_complete(
        mut self,
        hook: impl FnOnce(&ApiResult<reqwest::Response>) + Send + 'static,
    ) -> Self {
        self.complete = Some(Box::new(hook));
        self
    }

    pub(crate) fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body)
            .field("content_type", &self.content_type)
            .field("response_format", &self.response_format)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("before_send", &self.before_send.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

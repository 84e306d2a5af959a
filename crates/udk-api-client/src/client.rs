//! API client wrapper

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiResult, Error};
use crate::indicator::LoadingIndicator;
use crate::options::{RequestBody, RequestOptions};

/// API client wrapper over a [`reqwest`] transport.
///
/// Constructed once at startup and shared (it is cheap to clone); every
/// request issued through it drives the same [`LoadingIndicator`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: reqwest::Client,
    indicator: Arc<LoadingIndicator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client with default transport settings and a fresh
    /// per-request indicator.
    pub fn new() -> Self {
        Self::with_indicator(Arc::new(LoadingIndicator::default()))
    }

    /// Create a client sharing the given indicator.
    pub fn with_indicator(indicator: Arc<LoadingIndicator>) -> Self {
        Self {
            transport: reqwest::Client::new(),
            indicator,
        }
    }

    /// Create a client from a preconfigured `reqwest::Client`.
    pub fn from_reqwest(transport: reqwest::Client, indicator: Arc<LoadingIndicator>) -> Self {
        Self {
            transport,
            indicator,
        }
    }

    /// The indicator driven by this client's requests.
    pub fn indicator(&self) -> &Arc<LoadingIndicator> {
        &self.indicator
    }

    /// Dispatch a request described by `options`.
    ///
    /// Structured payloads are encoded by method: non-GET requests without
    /// an explicit content type get an `application/json` body, GET requests
    /// get a query string, and an explicit content type switches the body to
    /// form encoding without ever overriding the caller's header. Raw
    /// payloads pass through untouched. Encoding failures surface as
    /// [`Error::Serialization`].
    ///
    /// The shared indicator's start transition and the caller's
    /// `before_send` hook run before dispatch; the finish transition and the
    /// `complete` hook run after the transport settles, on success and on
    /// failure alike. The settled result is returned unmodified, so HTTP
    /// error statuses are `Ok` responses here exactly as they are on the
    /// bare transport.
    pub async fn perform(&self, options: RequestOptions) -> ApiResult<reqwest::Response> {
        let is_get = options.is_get();
        let RequestOptions {
            method,
            url,
            body,
            content_type,
            response_format,
            headers,
            timeout,
            before_send,
            complete,
        } = options;

        let method = reqwest::Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|err| Error::Build(format!("invalid method {}: {err}", method)))?;

        let mut builder = self.transport.request(method, &url);

        if let Some(ct) = &content_type {
            builder = builder.header(CONTENT_TYPE, ct.as_str());
        }

        match body {
            Some(RequestBody::Data(data)) => {
                if is_get {
                    // GET payloads ride the query string, whatever their shape.
                    let query = serde_urlencoded::to_string(&data)?;
                    if !query.is_empty() {
                        builder = builder.query(&data);
                    }
                } else if content_type.is_some() {
                    // An explicit content type disables the JSON defaults;
                    // the payload is form-encoded under the caller's header.
                    builder = builder.body(serde_urlencoded::to_string(&data)?);
                } else {
                    builder = builder
                        .header(CONTENT_TYPE, "application/json")
                        .body(serde_json::to_string(&data)?);
                }
            }
            Some(RequestBody::Raw(bytes)) => {
                builder = builder.body(bytes);
            }
            None => {}
        }

        if !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("accept")) {
            builder = builder.header(ACCEPT, response_format.unwrap_or_default().accept_header());
        }
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let request = builder.build()?;

        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");

        self.indicator.request_started();
        if let Some(hook) = before_send {
            hook(&request);
        }

        let result = self.transport.execute(request).await.map_err(Error::from);

        self.indicator.request_finished();
        if let Some(hook) = complete {
            hook(&result);
        }

        result
    }

    /// GET request, returns the JSON body deserialized to `R`.
    ///
    /// Unlike [`perform`](Self::perform), a non-2xx status becomes
    /// [`Error::Status`].
    pub async fn get_json<R>(&self, url: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let response = self.perform(RequestOptions::get(url)).await?;
        Self::expect_json(response).await
    }

    /// POST with a JSON body, returns the JSON response deserialized to `R`.
    ///
    /// Unlike [`perform`](Self::perform), a non-2xx status becomes
    /// [`Error::Status`].
    pub async fn post_json<B, R>(&self, url: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.perform(RequestOptions::post(url).data(body)?).await?;
        Self::expect_json(response).await
    }

    async fn expect_json<R>(response: reqwest::Response) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }
        response.json().await.map_err(Error::from)
    }
}

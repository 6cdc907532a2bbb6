//! Shared request/response pipeline for both API scopes.
//!
//! The Application and Client surfaces differ only in their path root and
//! the wording of their key-validation error, so both are thin wrappers
//! around the same [`Session`] primitive.

use crate::error::{ApiError, CrocError, Result};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User-Agent sent with every panel request.
pub(crate) const USER_AGENT: &str = concat!("Crocgodyl v", env!("CARGO_PKG_VERSION"));

/// Timeout applied when the SDK builds its own HTTP client.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which API surface a session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Application,
    Client,
}

impl Scope {
    /// Path prefix inserted between the panel URL and the operation path.
    pub(crate) fn root(self) -> &'static str {
        match self {
            Scope::Application => "/api/application",
            Scope::Client => "/api/client",
        }
    }

    fn key_scope(self) -> &'static str {
        match self {
            Scope::Application => "application",
            Scope::Client => "client",
        }
    }
}

/// One authenticated connection to a panel: base URL, bearer token and a
/// reusable HTTP client. Immutable after construction.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    http: HttpClient,
    panel_url: String,
    api_token: String,
    scope: Scope,
}

impl Session {
    /// Validates the URL and token and builds a default HTTP client.
    /// Performs no network I/O.
    pub(crate) fn new(
        panel_url: impl Into<String>,
        api_token: impl Into<String>,
        scope: Scope,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Self::with_http(panel_url, api_token, scope, http)
    }

    /// Like [`Session::new`] but reuses a caller-supplied HTTP client,
    /// which is where timeouts and cancellation policy live.
    pub(crate) fn with_http(
        panel_url: impl Into<String>,
        api_token: impl Into<String>,
        scope: Scope,
        http: HttpClient,
    ) -> Result<Self> {
        let panel_url = panel_url.into();
        if panel_url.is_empty() {
            return Err(CrocError::MissingUrl);
        }

        let api_token = api_token.into();
        if api_token.is_empty() {
            return Err(CrocError::MissingKey {
                scope: scope.key_scope(),
            });
        }

        Ok(Self {
            http,
            panel_url,
            api_token,
            scope,
        })
    }

    pub(crate) fn panel_url(&self) -> &str {
        &self.panel_url
    }

    /// The bare HTTP client, for requests outside the panel roots
    /// (one-shot download/upload URLs carry their own auth).
    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Starts a request to `{panel_url}{scope_root}{path}` carrying the
    /// four mandatory headers. `path` must already be URL-encoded where
    /// needed.
    pub(crate) fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        self.builder_with(method, path, "application/json", "application/json")
    }

    /// `RequestBuilder::header` appends rather than replaces, so the
    /// `Accept`/`Content-Type` overrides have to be chosen here.
    fn builder_with(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        accept: &str,
    ) -> RequestBuilder {
        let url = format!("{}{}{}", self.panel_url, self.scope.root(), path);

        self.http
            .request(method, url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(header::CONTENT_TYPE, content_type)
            .header(header::ACCEPT, accept)
    }

    /// Sends a prepared request and applies the status policy.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Option<Vec<u8>>> {
        validate(builder.send().await?).await
    }

    /// Sends `method {path}` with an optional JSON body. Returns the body
    /// bytes, or `None` for a 204 response.
    pub(crate) async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Vec<u8>>>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.builder(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.execute(builder).await
    }

    /// GET `path` and deserialize the full body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(Method::GET, path, None::<&()>).await
    }

    /// Send a request and deserialize the full body as `T`. An absent
    /// body (204) deserializes from empty input and surfaces as a decode
    /// error, matching callers that wrongly expect a payload.
    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let buf = self.request(method, path, body).await?.unwrap_or_default();
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Send a request where no response payload is expected.
    pub(crate) async fn send_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await?;
        Ok(())
    }

    /// GET `path` with an overridden `Accept` header, returning the raw
    /// body bytes (file contents are not JSON).
    pub(crate) async fn get_raw(&self, path: &str, accept: &str) -> Result<Vec<u8>> {
        let builder = self.builder_with(Method::GET, path, "application/json", accept);
        Ok(self.execute(builder).await?.unwrap_or_default())
    }

    /// POST a raw body with an overridden `Content-Type` (file writes).
    pub(crate) async fn post_raw(
        &self,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<()> {
        let builder = self
            .builder_with(Method::POST, path, content_type, "application/json")
            .body(body);

        self.execute(builder).await?;
        Ok(())
    }
}

/// Status policy for every panel response: 200/201/202 yield the body,
/// 204 yields nothing, anything else is parsed as the error envelope.
async fn validate(res: Response) -> Result<Option<Vec<u8>>> {
    match res.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
            Ok(Some(res.bytes().await?.to_vec()))
        }

        StatusCode::NO_CONTENT => Ok(None),

        _ => {
            let buf = res.bytes().await?;
            let errors: ApiError = serde_json::from_slice(&buf)?;
            Err(CrocError::Api(errors))
        }
    }
}

/// The panel's single-object envelope, `{object, attributes}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Object<T> {
    pub attributes: T,
}

/// The panel's list envelope, `{object: "list", data: [{attributes}, ...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectList<T> {
    pub data: Vec<Object<T>>,
}

impl<T> ObjectList<T> {
    /// Strips the wrappers, preserving the panel's order.
    pub(crate) fn attributes(self) -> Vec<T> {
        self.data.into_iter().map(|obj| obj.attributes).collect()
    }
}

/// Percent-encodes a value for use in a query string.
pub(crate) fn query_escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

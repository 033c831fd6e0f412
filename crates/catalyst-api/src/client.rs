// HTTP client for the Catalyst Center intent API.
//
// Base path: /dna/intent/api/v1/
// Auth: X-Auth-Token header
//
// Every call goes through `execute`, which owns URL joining and the
// status classification. Endpoint helpers live in sibling modules as
// inherent methods.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Query parameters as `(name, value)` pairs.
pub type Query<'a> = [(&'a str, String)];

/// Async client for the Catalyst Center intent API.
///
/// Holds no per-call state; a single instance is shared by every caller.
#[derive(Debug, Clone)]
pub struct CatalystClient {
    http: reqwest::Client,
    base_url: Url,
    rate_limit_delay: Duration,
}

impl CatalystClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a token and transport config.
    ///
    /// Injects `X-Auth-Token` plus JSON content negotiation headers as
    /// defaults on every request.
    pub fn from_token(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut token_value = HeaderValue::from_str(token.expose_secret())
            .map_err(|e| Error::unexpected(format!("invalid API token header value: {e}")))?;
        token_value.set_sensitive(true);
        headers.insert("X-Auth-Token", token_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self {
            http,
            base_url,
            rate_limit_delay: transport.rate_limit_delay,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            rate_limit_delay: TransportConfig::default().rate_limit_delay,
        })
    }

    /// Override the pause applied after a 429.
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ensure the base path is treated as a directory by `Url::join`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"network-device"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── Forwarding ───────────────────────────────────────────────────

    /// Forward one request and return the decoded JSON body.
    ///
    /// An empty success body decodes to `Value::Null`.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query<'_>>,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let raw = self.execute(method, path, query, body).await?;
        decode(&raw)
    }

    /// Forward one request and decode the body into `T`.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query<'_>>,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let raw = self.execute(method, path, query, body).await?;
        decode(&raw)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Query<'_>>,
    ) -> Result<T, Error> {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request(Method::POST, path, None, Some(body)).await
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query<'_>>,
        body: Option<&B>,
    ) -> Result<String, Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path)?;
        debug!(%method, %url, "forwarding request");

        let mut builder = self.http.request(method, url);
        if let Some(params) = query {
            builder = builder.query(params);
        }
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        let resp = builder.send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response(&self, resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::AuthFailure);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(
                delay = ?self.rate_limit_delay,
                "rate limited by upstream, pausing before reporting"
            );
            tokio::time::sleep(self.rate_limit_delay).await;
            return Err(Error::RateLimited);
        }

        let body = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "upstream rejected request");
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
    let text = if raw.trim().is_empty() { "null" } else { raw };
    serde_json::from_str(text).map_err(|e| {
        let preview = raw.chars().take(200).collect::<String>();
        Error::unexpected(format!("{e} (body preview: {preview:?})"))
    })
}

//! HTTP client for the Mediasite REST API.
//!
//! Holds the bound configuration, the authenticator, and a lazily built
//! `reqwest::Client`. Requests are sent once; there is no retry. Every
//! exchange is captured and classified by the caller.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use ms_core::config::MediasiteConfig;
use ms_core::error::{MsError, MsResult};

use crate::auth::Authenticator;
use crate::response::{expect_status, Exchange};

/// Client for one Mediasite server.
///
/// A configuration can be bound exactly once, either at construction or
/// later through [`MediasiteClient::configure`].
#[derive(Debug, Clone, Default)]
pub struct MediasiteClient {
    config: OnceLock<MediasiteConfig>,
    auth: OnceLock<Authenticator>,
    http: OnceLock<Client>,
}

impl MediasiteClient {
    /// Create an unconfigured client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client bound to `config`.
    pub fn with_config(config: MediasiteConfig) -> Self {
        let client = Self::new();
        let _ = client.config.set(config);
        client
    }

    /// Bind a configuration. Fails if one is already bound.
    pub fn configure(&self, config: MediasiteConfig) -> MsResult<()> {
        self.config
            .set(config)
            .map_err(|_| MsError::AlreadyConfigured)?;
        debug!("mediasite client configured for {}", self.api_root()?);
        Ok(())
    }

    /// The bound configuration.
    pub fn config(&self) -> MsResult<&MediasiteConfig> {
        self.config.get().ok_or(MsError::NotConfigured)
    }

    /// Normalized API endpoint (with trailing slash).
    pub fn api_root(&self) -> MsResult<String> {
        Ok(self.config()?.api_root())
    }

    /// Id of the folder browsing starts from, if configured.
    pub fn root_folder_id(&self) -> Option<&str> {
        self.config.get().and_then(|c| c.root_folder_id.as_deref())
    }

    pub(crate) fn authenticator(&self) -> MsResult<&Authenticator> {
        let config = self.config()?;
        Ok(self.auth.get_or_init(|| Authenticator::from_config(config)))
    }

    /// The shared transport handle, built on first use.
    fn http(&self) -> MsResult<&Client> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }
        let config = self.config()?;
        let client = build_http_client(Duration::from_millis(config.api_timeout_ms))?;
        // A concurrent first call may have won; either handle is equivalent.
        let _ = self.http.set(client);
        self.http
            .get()
            .ok_or_else(|| MsError::Http("transport handle unavailable".into()))
    }

    fn request(&self, method: Method, resource: &str) -> MsResult<RequestBuilder> {
        let url = format!("{}{}", self.api_root()?, resource);
        let builder = self.http()?.request(method, url);
        Ok(self.authenticator()?.apply(builder))
    }

    /// Send a request and capture the outcome. Transport failures are
    /// recorded in the exchange rather than returned as errors.
    async fn dispatch(&self, resource: &str, builder: RequestBuilder) -> Exchange {
        match builder.send().await {
            Ok(response) => {
                let exchange = Exchange::from_response(resource, response).await;
                debug!("{} -> {} {}", resource, exchange.status, exchange.status_text);
                exchange
            }
            Err(e) => Exchange::transport_failure(resource, classify_error(&e)),
        }
    }

    // --- Raw exchanges ---

    /// GET `resource` with query pairs.
    pub async fn get(&self, resource: &str, query: &[(&str, String)]) -> MsResult<Exchange> {
        debug!("GET {} {:?}", resource, query);
        let builder = self.request(Method::GET, resource)?.query(query);
        Ok(self.dispatch(resource, builder).await)
    }

    /// POST `resource` with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, resource: &str, body: &B) -> MsResult<Exchange> {
        debug!("POST {}", resource);
        let builder = self.request(Method::POST, resource)?.json(body);
        Ok(self.dispatch(resource, builder).await)
    }

    /// POST `resource` without a body.
    pub async fn post_empty(&self, resource: &str) -> MsResult<Exchange> {
        debug!("POST {} (no body)", resource);
        let builder = self
            .request(Method::POST, resource)?
            .header(reqwest::header::CONTENT_LENGTH, 0);
        Ok(self.dispatch(resource, builder).await)
    }

    // --- Classified helpers ---

    /// GET, require 200, and decode the body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> MsResult<T> {
        let exchange = self.get(resource, query).await?;
        expect_status(StatusCode::OK, exchange)?.json()
    }

    /// POST a JSON body, require `expected`, and decode the body.
    pub async fn post_json<B, T>(&self, resource: &str, body: &B, expected: StatusCode) -> MsResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let exchange = self.post(resource, body).await?;
        expect_status(expected, exchange)?.json()
    }

    /// POST an action with no body and require `expected`.
    pub async fn post_action(&self, resource: &str, expected: StatusCode) -> MsResult<()> {
        let exchange = self.post_empty(resource).await?;
        expect_status(expected, exchange)?;
        Ok(())
    }
}

/// Build a `reqwest::Client` with the given default timeout.
pub(crate) fn build_http_client(timeout: Duration) -> MsResult<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(15))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| MsError::Http(format!("failed to build HTTP client: {e}")))
}

/// Describe a reqwest error for an exchange's error text.
pub(crate) fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}

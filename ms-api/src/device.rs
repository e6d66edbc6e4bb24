//! Direct device access.
//!
//! Raw media uploads go to the server's `FileServer/` area rather than the
//! REST API, and a recorder's embedded web API is reached on the recorder
//! itself. Both use their own client with its own base URL.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use tracing::debug;

use ms_core::config::MediasiteConfig;
use ms_core::error::MsResult;

use crate::auth::Authenticator;
use crate::client::{build_http_client, classify_error};
use crate::response::Exchange;

/// Client for a device-level HTTP API.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    inner: Client,
    base_url: String,
    auth: Option<Authenticator>,
}

impl DeviceClient {
    /// Client for the server's file-server upload area, authenticated with
    /// the configured credentials.
    pub fn file_server(config: &MediasiteConfig) -> MsResult<Self> {
        Ok(Self {
            inner: build_http_client(Duration::from_millis(config.upload_timeout_ms))?,
            base_url: config.file_server_root(),
            auth: Some(Authenticator::from_config(config)),
        })
    }

    /// Client for a recorder's embedded web API at `recorder_host`.
    pub fn recorder(config: &MediasiteConfig, recorder_host: &str) -> MsResult<Self> {
        Ok(Self {
            inner: build_http_client(Duration::from_millis(config.api_timeout_ms))?,
            base_url: config.recorder_api_root(recorder_host),
            auth: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        self.request_url(method, format!("{}{}", self.base_url, resource))
    }

    fn request_url<U: reqwest::IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let builder = self.inner.request(method, url);
        match &self.auth {
            Some(auth) => auth.apply(builder),
            None => builder,
        }
    }

    async fn dispatch(&self, resource: &str, builder: RequestBuilder) -> Exchange {
        match builder.send().await {
            Ok(response) => {
                let exchange = Exchange::from_response(resource, response).await;
                debug!("device {} -> {} {}", resource, exchange.status, exchange.status_text);
                exchange
            }
            Err(e) => Exchange::transport_failure(resource, classify_error(&e)),
        }
    }

    /// GET `resource`.
    pub async fn get(&self, resource: &str) -> Exchange {
        debug!("device GET {}{}", self.base_url, resource);
        self.dispatch(resource, self.request(Method::GET, resource)).await
    }

    /// POST a JSON body to `resource`.
    pub async fn post_json<B: Serialize + ?Sized>(&self, resource: &str, body: &B) -> Exchange {
        debug!("device POST {}{}", self.base_url, resource);
        self.dispatch(resource, self.request(Method::POST, resource).json(body))
            .await
    }

    /// URL of the path made of `segments` below the base URL. Each segment is
    /// percent-encoded, so `/`, `?` and `#` in a segment stay inside it.
    pub fn segment_url(&self, segments: &[&str]) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
        Some(url)
    }

    /// PUT the contents of `path` to the path made of `segments`, streaming
    /// the file.
    ///
    /// A file that cannot be opened is reported as a failed exchange.
    pub async fn put_file(&self, segments: &[&str], path: &Path, timeout: Duration) -> Exchange {
        let resource = segments.join("/");
        let resource = resource.as_str();
        let Some(url) = self.segment_url(segments) else {
            return Exchange::transport_failure(
                resource,
                format!("invalid upload URL below {}", self.base_url),
            );
        };
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                return Exchange::transport_failure(
                    resource,
                    format!("failed to open {}: {e}", path.display()),
                )
            }
        };
        let length = match file.metadata().await {
            Ok(meta) => meta.len(),
            Err(e) => {
                return Exchange::transport_failure(
                    resource,
                    format!("failed to stat {}: {e}", path.display()),
                )
            }
        };

        debug!("device PUT {} ({} bytes)", url, length);
        let builder = self
            .request_url(Method::PUT, url)
            .timeout(timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .header(reqwest::header::CONTENT_LENGTH, length)
            .body(reqwest::Body::from(file));
        self.dispatch(resource, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediasiteConfig {
        MediasiteConfig::new("https://example.edu/mediasite/api/v1/", "admin", "secret", "key-1")
    }

    #[test]
    fn test_file_server_base_url() {
        let device = DeviceClient::file_server(&test_config()).unwrap();
        assert_eq!(device.base_url(), "https://example.edu/mediasite/");
        assert!(device.auth.is_some());
    }

    #[test]
    fn test_recorder_base_url() {
        let device = DeviceClient::recorder(&test_config(), "10.1.2.3").unwrap();
        assert_eq!(device.base_url(), "http://10.1.2.3:8090/recorderwebapi/v1/");
        assert!(device.auth.is_none());
    }

    #[test]
    fn test_segment_url_encodes_each_segment() {
        let device = DeviceClient::file_server(&test_config()).unwrap();
        let url = device
            .segment_url(&["FileServer", "Presentation", "p-1", "Week #3?.mp4"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.edu/mediasite/FileServer/Presentation/p-1/Week%20%233%3F.mp4"
        );
        assert!(url.fragment().is_none());
        assert!(url.query().is_none());
    }

    #[tokio::test]
    async fn test_put_missing_file_is_failed_exchange() {
        let device = DeviceClient::file_server(&test_config()).unwrap();
        let exchange = device
            .put_file(
                &["FileServer", "Presentation", "p", "x.mp4"],
                Path::new("/nonexistent/x.mp4"),
                Duration::from_secs(1),
            )
            .await;
        assert_eq!(exchange.status, 0);
        assert!(exchange.error.unwrap().contains("failed to open"));
    }
}

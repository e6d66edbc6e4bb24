//! Response classification.
//!
//! Every HTTP exchange is captured as an [`Exchange`], whether or not a
//! response arrived. Operations then either classify it strictly
//! ([`expect_status`], [`expect_single`]) and propagate failures, or wrap it
//! in an [`ApiResponse`] that records success or failure as data.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use ms_core::error::{MsError, MsResult};

/// Observed outcome of one HTTP request.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Resource path the request was sent to.
    pub resource: String,
    /// Status code, 0 when no response was received.
    pub status: u16,
    /// Status description, e.g. "Created".
    pub status_text: String,
    /// Raw response body.
    pub body: String,
    /// Transport-level error, if the exchange did not complete.
    pub error: Option<String>,
}

impl Exchange {
    /// Capture a received response, reading its body as text.
    pub async fn from_response(resource: &str, response: Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        match response.text().await {
            Ok(body) => Self {
                resource: resource.to_string(),
                status: status.as_u16(),
                status_text,
                body,
                error: None,
            },
            Err(e) => Self {
                resource: resource.to_string(),
                status: status.as_u16(),
                status_text,
                body: String::new(),
                error: Some(format!("failed to read response body: {e}")),
            },
        }
    }

    /// An exchange that never produced a response.
    pub fn transport_failure(resource: &str, error: impl Into<String>) -> Self {
        Self {
            resource: resource.to_string(),
            status: 0,
            status_text: String::new(),
            body: String::new(),
            error: Some(error.into()),
        }
    }

    /// Whether the status matches and no transport error occurred.
    pub fn is(&self, expected: StatusCode) -> bool {
        self.status == expected.as_u16() && self.error.is_none()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> MsResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            MsError::Serialization(format!("{}: failed to parse response: {e}", self.resource))
        })
    }
}

/// Fail unless the exchange completed with `expected` status.
pub fn expect_status(expected: StatusCode, exchange: Exchange) -> MsResult<Exchange> {
    if exchange.is(expected) {
        return Ok(exchange);
    }
    warn!(
        "{} returned {} (expected {})",
        exchange.resource,
        exchange.status,
        expected.as_u16()
    );
    Err(MsError::UnexpectedStatus {
        resource: exchange.resource,
        status: exchange.status,
        status_text: exchange.status_text,
        error: exchange.error.unwrap_or_default(),
        body: exchange.body,
    })
}

/// Fail unless `items` holds exactly one element, and return it.
pub fn expect_single<T>(resource: &str, mut items: Vec<T>) -> MsResult<T> {
    if items.len() != 1 {
        return Err(MsError::Cardinality {
            resource: resource.to_string(),
            count: items.len(),
        });
    }
    items
        .pop()
        .ok_or_else(|| MsError::Cardinality {
            resource: resource.to_string(),
            count: 0,
        })
}

/// Success/failure record for workflows that inspect failures instead of
/// propagating them.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = String> {
    pub success: bool,
    pub resource: String,
    pub status: u16,
    pub status_text: String,
    pub error: Option<String>,
    /// Raw response body.
    pub content: Option<String>,
    /// Value extracted from a successful response.
    pub value: Option<T>,
    /// Envelope of a follow-up call chained after this one succeeded.
    pub inner: Option<Box<ApiResponse<T>>>,
}

impl<T> ApiResponse<T> {
    /// Wrap an exchange, judging success against `expected`.
    pub fn from_exchange(expected: StatusCode, exchange: Exchange) -> Self {
        Self {
            success: exchange.is(expected),
            resource: exchange.resource,
            status: exchange.status,
            status_text: exchange.status_text,
            error: exchange.error,
            content: Some(exchange.body),
            value: None,
            inner: None,
        }
    }

    /// A failure that happened before any request could be sent.
    pub fn failed(resource: &str, error: impl Into<String>) -> Self {
        Self::from_exchange(StatusCode::OK, Exchange::transport_failure(resource, error))
    }

    #[must_use]
    pub fn with_value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_inner(mut self, inner: ApiResponse<T>) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Whether this call and every chained call succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.success && self.inner.as_ref().map_or(true, |i| i.all_succeeded())
    }

    /// Convert to a hard error when unsuccessful.
    pub fn into_result(self) -> MsResult<Self> {
        if self.success {
            return Ok(self);
        }
        Err(MsError::UnexpectedStatus {
            resource: self.resource,
            status: self.status,
            status_text: self.status_text,
            error: self.error.unwrap_or_default(),
            body: self.content.unwrap_or_default(),
        })
    }
}

//! Error types for the Mediasite client.
//!
//! Every failure a resource operation can raise is a variant of `MsError`,
//! with conversions from the underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using MsError.
pub type MsResult<T> = Result<T, MsError>;

/// Unified error type for the Mediasite client.
#[derive(Error, Debug)]
pub enum MsError {
    // -- Configuration errors --
    /// Credentials were bound to a client that already has a configuration.
    #[error("Mediasite client is already configured")]
    AlreadyConfigured,

    /// An operation was attempted before any configuration was bound.
    #[error("Mediasite client is not configured")]
    NotConfigured,

    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Response classification errors --
    /// The service answered with a status other than the one the operation
    /// expects, or the transport reported an error.
    #[error("{resource} returned http status = '{status_text}', error = '{error}', content = '{body}'")]
    UnexpectedStatus {
        /// Resource path of the request.
        resource: String,
        /// Observed status code (0 when no response was received).
        status: u16,
        /// Status description, e.g. "Not Found".
        status_text: String,
        /// Transport-level error text, empty when the exchange completed.
        error: String,
        /// Raw response body.
        body: String,
    },

    /// A query expected to match exactly one record matched some other number.
    #[error("{resource} found {count} items")]
    Cardinality {
        /// Resource path of the request.
        resource: String,
        /// Number of records actually returned.
        count: usize,
    },

    // -- Network errors --
    /// The HTTP client could not be constructed.
    #[error("http error: {0}")]
    Http(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MsError {
    /// Status code carried by an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            MsError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from a "find exactly one" query.
    pub fn is_cardinality(&self) -> bool {
        matches!(self, MsError::Cardinality { .. })
    }
}

impl From<serde_json::Error> for MsError {
    fn from(e: serde_json::Error) -> Self {
        MsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for MsError {
    fn from(e: toml::de::Error) -> Self {
        MsError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = MsError::UnexpectedStatus {
            resource: "Folders('abc')".into(),
            status: 404,
            status_text: "Not Found".into(),
            error: String::new(),
            body: "{}".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Folders('abc')"));
        assert!(msg.contains("Not Found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_cardinality_display() {
        let err = MsError::Cardinality {
            resource: "Folders".into(),
            count: 2,
        };
        assert_eq!(err.to_string(), "Folders found 2 items");
        assert!(err.is_cardinality());
    }

    #[test]
    fn test_config_error_display() {
        let err = MsError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
        assert!(err.status().is_none());
    }
}

//! Mediasite Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other Mediasite crates:
//! - Client configuration (endpoint, credentials, timeouts)
//! - The error taxonomy every API operation reports through
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, MediasiteConfig};
pub use error::{MsError, MsResult};
pub use logging::init_logging;

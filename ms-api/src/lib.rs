//! Mediasite API - HTTP client for the Mediasite 7 REST API.
//!
//! This crate provides a typed client covering folders, catalogs, players,
//! presentations, recorders, schedules, templates, jobs, and authorization
//! tickets. Every operation goes through the same pipeline: an OData query
//! built from a typed [`Filter`], an authenticated dispatch, pagination for
//! list queries, and status/cardinality classification of the outcome.
//!
//! Media uploads and the recorder web API bypass the main service and use a
//! separate [`DeviceClient`].

pub mod auth;
pub mod client;
pub mod device;
pub mod endpoints;
pub mod paging;
pub mod query;
pub mod response;

// Re-export key types
pub use auth::Authenticator;
pub use client::MediasiteClient;
pub use device::DeviceClient;
pub use query::{Filter, PagedRequest};
pub use response::{ApiResponse, Exchange};

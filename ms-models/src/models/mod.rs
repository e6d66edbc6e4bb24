//! Entity model definitions.

pub mod auth_ticket;
pub mod catalog;
pub mod folder;
pub mod job;
pub mod player;
pub mod presentation;
pub mod recorder;
pub mod schedule;
pub mod template;

/// Fields returned by the service that the client passes through untouched.
pub type Extra = serde_json::Map<String, serde_json::Value>;

//! Mediasite Models - entity types and request payloads for the REST API.
//!
//! Entities mirror the service's PascalCase JSON. Fields the client does not
//! interpret are kept in an `extra` map so records pass through unmodified.

pub mod models;
pub mod odata;
pub mod payloads;

// Re-export key types
pub use models::auth_ticket::AuthorizationTicket;
pub use models::catalog::Catalog;
pub use models::folder::Folder;
pub use models::job::Job;
pub use models::player::Player;
pub use models::presentation::Presentation;
pub use models::recorder::{Recorder, RecorderStatus};
pub use models::schedule::{Recurrence, Schedule};
pub use models::template::Template;
pub use odata::{ODataPage, StringValue};
pub use payloads::{
    NewAuthorizationTicket, NewFolder, NewMediaUpload, NewPresentation, NewRecorderLogin,
    NewSchedule, NewWeeklyRecurrence,
};

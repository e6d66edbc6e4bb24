//! Resource operations organized by entity.
//!
//! Each module adds methods to [`MediasiteClient`](crate::MediasiteClient)
//! for one group of related endpoints.

pub mod catalogs;
pub mod folders;
pub mod jobs;
pub mod players;
pub mod presentations;
pub mod recorders;
pub mod schedules;
pub mod templates;
pub mod tickets;
pub mod uploads;

/// Resource collection names.
pub mod resource {
    pub const AUTHORIZATION_TICKETS: &str = "AuthorizationTickets";
    pub const CATALOGS: &str = "Catalogs";
    pub const FOLDERS: &str = "Folders";
    pub const JOBS: &str = "Jobs";
    pub const PLAYERS: &str = "Players";
    pub const PRESENTATIONS: &str = "Presentations";
    pub const RECORDERS: &str = "Recorders";
    pub const SCHEDULES: &str = "Schedules";
    pub const TEMPLATES: &str = "Templates";
}

//! Application-wide constants.

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "Mediasite";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of records requested per page in paginated queries (OData `$top`).
pub const PAGE_SIZE: usize = 10;

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Timeout for raw media uploads to the file server (10 minutes).
pub const DEFAULT_UPLOAD_TIMEOUT_MS: u64 = 10 * 60 * 1000;

/// Port of the recorder's embedded web API.
pub const RECORDER_API_PORT: u16 = 8090;

/// Path prefix of the recorder's embedded web API.
pub const RECORDER_API_PATH: &str = "recorderwebapi/v1/";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "sfapikey";

/// Path suffix of the REST API below the site root.
pub const API_PATH_SUFFIX: &str = "api/v1/";

/// Fixed values sent when creating a schedule.
pub mod schedule_defaults {
    pub const TITLE_TYPE: &str = "ScheduleNameAndAirDateTime";
    pub const IS_UPLOAD_AUTOMATIC: bool = true;
    pub const ADVANCE_CREATION_TIME: i32 = 0;
    pub const ADVANCE_LOAD_TIME_SECONDS: i32 = 0;
    pub const CREATE_PRESENTATION: bool = true;
    pub const LOAD_PRESENTATION: bool = true;
    pub const AUTO_START: bool = true;
    pub const AUTO_STOP: bool = true;
    pub const DELETE_INACTIVE: bool = false;
}

/// Fixed values sent when adding a weekly recurrence.
pub mod recurrence_defaults {
    pub const PATTERN: &str = "Weekly";
    pub const FREQUENCY: i32 = 1;
    pub const WEEKDAY_ONLY: bool = true;
}

/// Defaults for presentations created from a template.
pub mod presentation_defaults {
    /// Duration in minutes.
    pub const DURATION: i32 = 60;
    pub const MAX_CONNECTIONS: i32 = 5;
}

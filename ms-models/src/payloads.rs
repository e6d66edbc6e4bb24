//! Request bodies for create and action endpoints.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use ms_core::constants::{presentation_defaults, recurrence_defaults, schedule_defaults};

/// Body of `POST Folders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewFolder {
    pub name: String,
    pub parent_folder_id: String,
}

/// Body of `POST Templates('{id}')/CreatePresentationFromTemplate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewPresentation {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes.
    pub duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    pub folder_id: String,
    pub player_id: String,
    pub record_date_time: DateTime<Utc>,
}

impl NewPresentation {
    /// A titled presentation with the default duration.
    pub fn titled(folder_id: &str, player_id: &str, title: &str, record_time: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            duration: presentation_defaults::DURATION,
            max_connections: None,
            folder_id: folder_id.to_string(),
            player_id: player_id.to_string(),
            record_date_time: record_time,
        }
    }

    /// An interview-room presentation titled after its participants.
    ///
    /// The title shows `now` as wall-clock time in its own zone (the caller
    /// passes local time); the record time is sent in UTC.
    pub fn interview<Tz>(folder_id: &str, player_id: &str, participants: &str, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            title: format!("{} - {}", now.format("%Y-%m-%d %H:%M:%S"), participants),
            description: Some(format!("Participants: {participants}")),
            duration: presentation_defaults::DURATION,
            max_connections: Some(presentation_defaults::MAX_CONNECTIONS),
            folder_id: folder_id.to_string(),
            player_id: player_id.to_string(),
            record_date_time: now.with_timezone(&Utc),
        }
    }
}

/// Body of `POST Presentations('{id}')/CreateMediaUpload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewMediaUpload {
    pub file_name: String,
}

/// Body of `POST Schedules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewSchedule {
    pub name: String,
    pub title_type: String,
    pub folder_id: String,
    pub schedule_template_id: String,
    pub is_upload_automatic: bool,
    pub recorder_id: String,
    pub advance_creation_time: i32,
    pub advance_load_time_in_seconds: i32,
    pub create_presentation: bool,
    pub load_presentation: bool,
    pub auto_start: bool,
    pub auto_stop: bool,
    pub delete_inactive: bool,
}

impl NewSchedule {
    /// A fully automated schedule: presentations are created, loaded,
    /// started, stopped and uploaded without operator action.
    pub fn automated(name: &str, folder_id: &str, template_id: &str, recorder_id: &str) -> Self {
        Self {
            name: name.to_string(),
            title_type: schedule_defaults::TITLE_TYPE.to_string(),
            folder_id: folder_id.to_string(),
            schedule_template_id: template_id.to_string(),
            is_upload_automatic: schedule_defaults::IS_UPLOAD_AUTOMATIC,
            recorder_id: recorder_id.to_string(),
            advance_creation_time: schedule_defaults::ADVANCE_CREATION_TIME,
            advance_load_time_in_seconds: schedule_defaults::ADVANCE_LOAD_TIME_SECONDS,
            create_presentation: schedule_defaults::CREATE_PRESENTATION,
            load_presentation: schedule_defaults::LOAD_PRESENTATION,
            auto_start: schedule_defaults::AUTO_START,
            auto_stop: schedule_defaults::AUTO_STOP,
            delete_inactive: schedule_defaults::DELETE_INACTIVE,
        }
    }
}

/// Body of `POST Schedules('{id}')/Recurrences` for a weekly rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewWeeklyRecurrence {
    /// Recording length in milliseconds.
    pub record_duration: i32,
    pub start_record_date_time: DateTime<Utc>,
    pub end_record_date_time: DateTime<Utc>,
    pub recurrence_pattern: String,
    pub recurrence_frequency: i32,
    pub week_day_only: bool,
    pub days_of_the_week: String,
}

impl NewWeeklyRecurrence {
    pub fn new(
        record_duration_ms: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        days_of_the_week: &str,
    ) -> Self {
        Self {
            record_duration: record_duration_ms,
            start_record_date_time: start,
            end_record_date_time: end,
            recurrence_pattern: recurrence_defaults::PATTERN.to_string(),
            recurrence_frequency: recurrence_defaults::FREQUENCY,
            week_day_only: recurrence_defaults::WEEKDAY_ONLY,
            days_of_the_week: days_of_the_week.to_string(),
        }
    }
}

/// Body of `POST AuthorizationTickets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewAuthorizationTicket {
    pub username: String,
    pub resource_id: String,
    pub minutes_to_live: i32,
}

/// Body of the recorder web API `action/service/Login`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewRecorderLogin {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_new_folder_wire_names() {
        let body = NewFolder {
            name: "Fall 2024".into(),
            parent_folder_id: "root".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Name"], "Fall 2024");
        assert_eq!(json["ParentFolderId"], "root");
    }

    #[test]
    fn test_automated_schedule_defaults() {
        let body = NewSchedule::automated("CS101", "f-1", "t-1", "r-1");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["TitleType"], "ScheduleNameAndAirDateTime");
        assert_eq!(json["ScheduleTemplateId"], "t-1");
        assert_eq!(json["AutoStart"], true);
        assert_eq!(json["DeleteInactive"], false);
        assert_eq!(json["AdvanceLoadTimeInSeconds"], 0);
    }

    #[test]
    fn test_weekly_recurrence() {
        let start = Utc.with_ymd_and_hms(2024, 9, 2, 14, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 13, 14, 50, 0).unwrap();
        let body = NewWeeklyRecurrence::new(3_000_000, start, end, "Monday, Wednesday");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["RecurrencePattern"], "Weekly");
        assert_eq!(json["RecurrenceFrequency"], 1);
        assert_eq!(json["WeekDayOnly"], true);
        assert_eq!(json["StartRecordDateTime"], "2024-09-02T14:00:00Z");
    }

    #[test]
    fn test_titled_presentation_omits_interview_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();
        let json = serde_json::to_value(NewPresentation::titled("f", "p", "Week 1", at)).unwrap();
        assert_eq!(json["Duration"], 60);
        assert!(json.get("Description").is_none());
        assert!(json.get("MaxConnections").is_none());
    }

    #[test]
    fn test_interview_presentation() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();
        let body = NewPresentation::interview("f", "p", "Smith, Jones", at);
        assert_eq!(body.title, "2024-03-01 15:00:00 - Smith, Jones");
        assert_eq!(body.description.as_deref(), Some("Participants: Smith, Jones"));
        assert_eq!(body.max_connections, Some(5));
    }

    #[test]
    fn test_interview_title_uses_callers_wall_clock() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = zone.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap();
        let body = NewPresentation::interview("f", "p", "Smith", at);
        assert_eq!(body.title, "2024-03-01 17:00:00 - Smith");
        assert_eq!(body.record_date_time, Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap());
    }
}

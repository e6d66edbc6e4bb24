//! Schedule and recurrence entity models.

use serde::{Deserialize, Serialize};

use super::Extra;

/// An automated recording schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title_type: Option<String>,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub schedule_template_id: Option<String>,
    #[serde(default)]
    pub recorder_id: Option<String>,
    #[serde(default)]
    pub recorder_name: Option<String>,
    #[serde(default)]
    pub is_upload_automatic: Option<bool>,
    #[serde(default)]
    pub auto_start: Option<bool>,
    #[serde(default)]
    pub auto_stop: Option<bool>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// One recurrence rule of a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recurrence {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub mediasite_id: Option<String>,
    /// Recording length in milliseconds.
    #[serde(default)]
    pub record_duration: i32,
    #[serde(default)]
    pub start_record_date_time: Option<String>,
    #[serde(default)]
    pub end_record_date_time: Option<String>,
    /// Pattern name, e.g. "Weekly".
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
    #[serde(default)]
    pub next_schedule_time: Option<String>,
    #[serde(default)]
    pub recurrence_pattern_type: i32,
    #[serde(default)]
    pub recurrence_frequency: i32,
    #[serde(default)]
    pub week_day_only: bool,
    /// Day-of-week mask, e.g. "Monday, Wednesday".
    #[serde(default)]
    pub days_of_the_week: Option<String>,
    #[serde(default)]
    pub week_of_the_month: Option<String>,
    #[serde(default)]
    pub day_of_the_month: i32,
    #[serde(default)]
    pub month_of_the_year: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_deserialize() {
        let json = r#"{
            "Id": 3,
            "MediasiteId": "sch-1",
            "RecordDuration": 3000000,
            "StartRecordDateTime": "2024-09-02T14:00:00Z",
            "EndRecordDateTime": "2024-12-13T14:50:00Z",
            "RecurrencePattern": "Weekly",
            "RecurrenceFrequency": 1,
            "WeekDayOnly": true,
            "DaysOfTheWeek": "Monday, Wednesday, Friday"
        }"#;
        let r: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 3);
        assert_eq!(r.recurrence_pattern.as_deref(), Some("Weekly"));
        assert!(r.week_day_only);
        assert_eq!(r.day_of_the_month, 0);
    }
}

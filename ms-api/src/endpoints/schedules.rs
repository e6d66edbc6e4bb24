//! Schedule endpoints.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use tracing::info;

use ms_core::constants::PAGE_SIZE;
use ms_core::error::MsResult;
use ms_models::{NewSchedule, NewWeeklyRecurrence, Recurrence, Schedule};

use super::resource::SCHEDULES;
use crate::client::MediasiteClient;
use crate::query::{entity_path, field, Filter, PagedRequest};

fn recurrences_path(schedule_id: &str) -> String {
    format!("{}/Recurrences", entity_path(SCHEDULES, schedule_id))
}

impl MediasiteClient {
    /// All schedules, optionally only those for one recorder.
    pub async fn get_schedules(&self, recorder_id: Option<&str>) -> MsResult<Vec<Schedule>> {
        let mut request = PagedRequest::new(SCHEDULES);
        if let Some(recorder_id) = recorder_id.filter(|r| !r.is_empty()) {
            request = request.filter(Filter::eq(field::RECORDER_ID, recorder_id));
        }
        self.fetch_all(&request).await
    }

    /// Find a schedule by exact name.
    pub async fn find_schedule(&self, name: &str) -> MsResult<Schedule> {
        let filter = Filter::eq(field::NAME, name);
        let request = PagedRequest::paged(SCHEDULES, Some(filter), Some(field::NAME), PAGE_SIZE, 0);
        self.find_single(&request).await
    }

    /// Recurrence rules of a schedule.
    pub async fn get_schedule_recurrences(&self, schedule_id: &str) -> MsResult<Vec<Recurrence>> {
        let request = PagedRequest::new(recurrences_path(schedule_id)).order_by(field::NAME);
        self.fetch_all(&request).await
    }

    /// Create a fully automated schedule for a recorder.
    pub async fn create_schedule(
        &self,
        name: &str,
        folder_id: &str,
        template_id: &str,
        recorder_id: &str,
    ) -> MsResult<Schedule> {
        let body = NewSchedule::automated(name, folder_id, template_id, recorder_id);
        let schedule: Schedule = self.post_json(SCHEDULES, &body, StatusCode::OK).await?;
        info!("created schedule '{}' ({}) on recorder {}", schedule.name, schedule.id, recorder_id);
        Ok(schedule)
    }

    /// Add a weekly recurrence between `start` and `end` on `days_of_the_week`
    /// (e.g. "Monday, Wednesday").
    pub async fn add_weekly_recurrence(
        &self,
        schedule_id: &str,
        duration_ms: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        days_of_the_week: &str,
    ) -> MsResult<Recurrence> {
        let body = NewWeeklyRecurrence::new(duration_ms, start, end, days_of_the_week);
        let recurrence: Recurrence = self
            .post_json(&recurrences_path(schedule_id), &body, StatusCode::OK)
            .await?;
        info!("added weekly recurrence {} to schedule {}", recurrence.id, schedule_id);
        Ok(recurrence)
    }
}

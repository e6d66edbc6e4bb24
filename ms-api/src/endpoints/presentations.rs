//! Presentation endpoints.

use chrono::{DateTime, Local, Utc};
use reqwest::StatusCode;
use tracing::info;

use ms_core::error::MsResult;
use ms_models::{NewPresentation, Presentation};

use super::resource::{PRESENTATIONS, TEMPLATES};
use crate::client::MediasiteClient;
use crate::query::{entity_path, field, Filter, PagedRequest};

/// Projection returning every presentation property.
const SELECT_FULL: &str = "full";

impl MediasiteClient {
    /// Get a presentation by id, in its full representation.
    pub async fn get_presentation(&self, presentation_id: &str) -> MsResult<Presentation> {
        let query = [("$select", SELECT_FULL.to_string())];
        self.get_json(&entity_path(PRESENTATIONS, presentation_id), &query)
            .await
    }

    /// All presentations in a folder, ordered by title.
    pub async fn find_presentations_in_folder(&self, folder_id: &str) -> MsResult<Vec<Presentation>> {
        let request = PagedRequest::new(PRESENTATIONS)
            .filter(Filter::eq(field::PARENT_FOLDER_ID, folder_id))
            .order_by(field::TITLE)
            .select(SELECT_FULL);
        self.fetch_all(&request).await
    }

    /// Create a presentation from a template.
    pub async fn create_presentation(
        &self,
        template_id: &str,
        presentation: &NewPresentation,
    ) -> MsResult<Presentation> {
        let resource = format!(
            "{}/CreatePresentationFromTemplate",
            entity_path(TEMPLATES, template_id)
        );
        let created: Presentation = self
            .post_json(&resource, presentation, StatusCode::OK)
            .await?;
        info!(
            "created presentation '{}' ({}) from template {}",
            created.title, created.id, template_id
        );
        Ok(created)
    }

    /// Create a presentation with a given title and record time.
    pub async fn create_presentation_titled(
        &self,
        template_id: &str,
        folder_id: &str,
        player_id: &str,
        title: &str,
        record_time: DateTime<Utc>,
    ) -> MsResult<Presentation> {
        let body = NewPresentation::titled(folder_id, player_id, title, record_time);
        self.create_presentation(template_id, &body).await
    }

    /// Create an interview-room presentation titled with the current local
    /// time and the participants.
    pub async fn create_interview_presentation(
        &self,
        template_id: &str,
        folder_id: &str,
        player_id: &str,
        participants: &str,
    ) -> MsResult<Presentation> {
        let body = NewPresentation::interview(folder_id, player_id, participants, Local::now());
        self.create_presentation(template_id, &body).await
    }
}

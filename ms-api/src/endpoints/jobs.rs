//! Job endpoints.

use ms_core::error::MsResult;
use ms_models::Job;

use super::resource::JOBS;
use crate::client::MediasiteClient;
use crate::query::entity_path;

impl MediasiteClient {
    /// Get a job by id, e.g. to poll a media upload.
    pub async fn get_job(&self, job_id: &str) -> MsResult<Job> {
        self.get_json(&entity_path(JOBS, job_id), &[]).await
    }
}

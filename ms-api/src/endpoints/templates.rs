//! Template endpoints.

use ms_core::error::MsResult;
use ms_models::Template;

use super::resource::TEMPLATES;
use crate::client::MediasiteClient;
use crate::query::PagedRequest;

impl MediasiteClient {
    /// All presentation templates.
    pub async fn get_templates(&self) -> MsResult<Vec<Template>> {
        self.fetch_all(&PagedRequest::new(TEMPLATES)).await
    }
}

//! Authorization ticket endpoints.

use reqwest::StatusCode;
use tracing::info;

use ms_core::error::MsResult;
use ms_models::{AuthorizationTicket, NewAuthorizationTicket};

use super::resource::AUTHORIZATION_TICKETS;
use crate::client::MediasiteClient;

impl MediasiteClient {
    /// Issue a ticket giving `username` access to `resource_id` for
    /// `minutes_to_live` minutes.
    pub async fn create_auth_ticket(
        &self,
        resource_id: &str,
        minutes_to_live: i32,
        username: &str,
    ) -> MsResult<AuthorizationTicket> {
        let body = NewAuthorizationTicket {
            username: username.to_string(),
            resource_id: resource_id.to_string(),
            minutes_to_live,
        };
        let ticket: AuthorizationTicket = self
            .post_json(AUTHORIZATION_TICKETS, &body, StatusCode::OK)
            .await?;
        info!("issued ticket for {} on {} ({} min)", username, resource_id, minutes_to_live);
        Ok(ticket)
    }
}

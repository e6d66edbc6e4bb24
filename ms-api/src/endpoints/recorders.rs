//! Recorder endpoints.
//!
//! Registry queries and start/stop actions go through the main service.
//! `recorder_status_direct` and `recorder_login` talk to the recorder's own
//! web API instead, whose responses are scraped for a single field.

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::StatusCode;
use tracing::{debug, info};

use ms_core::constants::PAGE_SIZE;
use ms_core::error::MsResult;
use ms_models::{NewRecorderLogin, Recorder, RecorderStatus};

use super::resource::RECORDERS;
use crate::client::MediasiteClient;
use crate::device::DeviceClient;
use crate::query::{entity_path, field, Filter, PagedRequest};
use crate::response::expect_status;

const RECORDER_STATE_JSON: &str = "action/service/RecorderStateJson";
const RECORDER_LOGIN: &str = "action/service/Login";

lazy_static! {
    static ref RECORDER_STATE_RE: Regex =
        Regex::new(r#""RecorderStateString"\s*:\s*"([^"]*)""#).unwrap();
    static ref TICKET_RE: Regex = Regex::new(r#""Ticket"\s*:\s*"([^"]*)""#).unwrap();
}

/// First capture of `re` in `body`.
fn capture(re: &Regex, body: &str) -> Option<String> {
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl MediasiteClient {
    /// All recorders, ordered by name, optionally limited to names starting
    /// with `prefix`. An empty prefix means no filter.
    pub async fn get_recorders(&self, prefix: Option<&str>) -> MsResult<Vec<Recorder>> {
        let mut request = PagedRequest::new(RECORDERS).order_by(field::NAME);
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            request = request.filter(Filter::starts_with(field::NAME, prefix));
        }
        self.fetch_all(&request).await
    }

    /// Find a recorder by exact name.
    pub async fn find_recorder(&self, name: &str) -> MsResult<Recorder> {
        let filter = Filter::eq(field::NAME, name);
        let request = PagedRequest::paged(RECORDERS, Some(filter), Some(field::NAME), PAGE_SIZE, 0);
        self.find_single(&request).await
    }

    /// Current status of a recorder as reported by the service.
    pub async fn get_recorder_status(&self, recorder_id: &str) -> MsResult<RecorderStatus> {
        let resource = format!("{}/Status", entity_path(RECORDERS, recorder_id));
        self.get_json(&resource, &[]).await
    }

    /// Start recording.
    pub async fn start_recorder(&self, recorder_id: &str) -> MsResult<()> {
        let resource = format!("{}/Start", entity_path(RECORDERS, recorder_id));
        self.post_action(&resource, StatusCode::NO_CONTENT).await?;
        info!("started recorder {}", recorder_id);
        Ok(())
    }

    /// Stop recording.
    pub async fn stop_recorder(&self, recorder_id: &str) -> MsResult<()> {
        let resource = format!("{}/Stop", entity_path(RECORDERS, recorder_id));
        self.post_action(&resource, StatusCode::NO_CONTENT).await?;
        info!("stopped recorder {}", recorder_id);
        Ok(())
    }

    /// Read the state string straight from a recorder at `recorder_host`.
    ///
    /// Returns `None` when the response carries no state field.
    pub async fn recorder_status_direct(&self, recorder_host: &str) -> MsResult<Option<String>> {
        let device = DeviceClient::recorder(self.config()?, recorder_host)?;
        let exchange = expect_status(StatusCode::OK, device.get(RECORDER_STATE_JSON).await)?;
        let state = capture(&RECORDER_STATE_RE, &exchange.body);
        debug!("recorder {} reports state {:?}", recorder_host, state);
        Ok(state)
    }

    /// Log in to a recorder's web API and return the session ticket.
    ///
    /// Returns `None` when the response carries no ticket.
    pub async fn recorder_login(
        &self,
        recorder_host: &str,
        username: &str,
        password: &str,
    ) -> MsResult<Option<String>> {
        let device = DeviceClient::recorder(self.config()?, recorder_host)?;
        let body = NewRecorderLogin {
            username: username.to_string(),
            password: password.to_string(),
        };
        let exchange = expect_status(StatusCode::OK, device.post_json(RECORDER_LOGIN, &body).await)?;
        let ticket = capture(&TICKET_RE, &exchange.body);
        if ticket.is_some() {
            info!("logged in to recorder {} as {}", recorder_host, username);
        }
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_state() {
        let body = r#"{"RecorderState":2,"RecorderStateString":"Recording","Uptime":40}"#;
        assert_eq!(capture(&RECORDER_STATE_RE, body).as_deref(), Some("Recording"));
    }

    #[test]
    fn test_capture_tolerates_whitespace() {
        let body = "{ \"Ticket\" : \"abc-123\" }";
        assert_eq!(capture(&TICKET_RE, body).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_capture_missing_field() {
        assert_eq!(capture(&TICKET_RE, r#"{"Error":"denied"}"#), None);
        assert_eq!(capture(&RECORDER_STATE_RE, ""), None);
    }
}

//! Authorization ticket entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// Short-lived ticket granting a user access to one resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationTicket {
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub minutes_to_live: Option<i32>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub expiration_time: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

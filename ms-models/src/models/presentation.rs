//! Presentation entity model (the service's "full" representation).

use serde::{Deserialize, Serialize};

use super::Extra;

/// A presentation as returned with `$select=full`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Presentation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Folder holding the presentation.
    #[serde(default, rename = "ParentFolderId")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub record_date: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub primary_presenter: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

//! Catalog entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A published catalog of presentations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Catalog {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub catalog_url: Option<String>,
    #[serde(default)]
    pub linked_folder_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

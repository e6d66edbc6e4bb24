//! Template entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A presentation template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

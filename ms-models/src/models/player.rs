//! Player entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

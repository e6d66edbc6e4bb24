//! CLI command implementations.

pub mod catalog;
pub mod folders;
pub mod presentations;
pub mod recorders;
pub mod schedules;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use ms_api::MediasiteClient;
use ms_core::config::AppConfig;
use ms_core::error::{MsError, MsResult};

/// Helper to create an API client from config.
pub fn create_client(config: &AppConfig) -> MsResult<MediasiteClient> {
    if !config.is_configured() {
        let path = AppConfig::default_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "config.toml".to_string());
        return Err(MsError::Config(format!(
            "no Mediasite endpoint and credentials configured (expected in {path})"
        )));
    }
    Ok(MediasiteClient::with_config(config.mediasite.clone()))
}

/// The folder to browse from: the argument, else the configured root folder.
pub fn folder_or_root(client: &MediasiteClient, folder_id: Option<String>) -> MsResult<String> {
    folder_id
        .or_else(|| client.root_folder_id().map(str::to_string))
        .ok_or_else(|| MsError::Config("no folder id given and no root_folder_id configured".into()))
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// A table with the shared CLI styling.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Display form of an optional field.
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

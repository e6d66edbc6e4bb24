//! Recorder entity models.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A capture device registered with the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recorder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub web_service_url: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Live status of a recorder, from `Recorders('{id}')/Status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecorderStatus {
    #[serde(default)]
    pub recorder_state: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Known recorder state strings.
pub mod state {
    pub const IDLE: &str = "Idle";
    pub const BUSY: &str = "Busy";
    pub const RECORDING: &str = "Recording";
    pub const RECORD_PAUSED: &str = "RecordPaused";
    pub const OPENING: &str = "Opening";
    pub const UNKNOWN: &str = "Unknown";
}

impl RecorderStatus {
    pub fn is_recording(&self) -> bool {
        self.recorder_state.as_deref() == Some(state::RECORDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_status() {
        let status: RecorderStatus =
            serde_json::from_str(r#"{"RecorderState":"Recording"}"#).unwrap();
        assert!(status.is_recording());
    }

    #[test]
    fn test_recorder_deserialize() {
        let json = r#"{"Id":"r-1","Name":"Room 101","Version":"7.4.1"}"#;
        let r: Recorder = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "Room 101");
        assert_eq!(r.version.as_deref(), Some("7.4.1"));
    }
}

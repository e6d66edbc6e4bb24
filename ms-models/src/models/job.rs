//! Job entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A server-side background job, e.g. processing an uploaded media file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Known job status strings.
pub mod status {
    pub const QUEUED: &str = "Queued";
    pub const WORKING: &str = "Working";
    pub const SUCCESSFUL: &str = "Successful";
    pub const FAILED: &str = "Failed";
}

impl Job {
    /// Whether the job has stopped, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some(status::SUCCESSFUL) | Some(status::FAILED)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_finished() {
        let job: Job = serde_json::from_str(r#"{"Id":"j-1","Status":"Working"}"#).unwrap();
        assert!(!job.is_finished());
        let job: Job = serde_json::from_str(r#"{"Id":"j-1","Status":"Successful"}"#).unwrap();
        assert!(job.is_finished());
    }
}

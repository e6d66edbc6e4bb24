//! OData response envelopes.

use serde::{Deserialize, Serialize};

/// One page of a list query.
///
/// ```json
/// { "odata.metadata": "...", "odata.count": "42", "value": [ ... ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ODataPage<T> {
    #[serde(rename = "odata.metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Total match count, present only when `$inlinecount` was requested.
    #[serde(rename = "odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(rename = "odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

impl<T> ODataPage<T> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Total count reported by the service, if any.
    pub fn total(&self) -> Option<u64> {
        self.count.as_deref().and_then(|c| c.parse().ok())
    }
}

/// Single string result of an action, e.g. the job id from `CreateMediaUpload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringValue {
    #[serde(default)]
    pub value: Option<String>,
}

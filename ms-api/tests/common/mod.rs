//! Shared test utilities for integration tests.

#![allow(dead_code)]

use ms_api::MediasiteClient;
use ms_core::config::MediasiteConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Path prefix of the REST API on the mock server.
pub const API: &str = "/api/v1";

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const API_KEY: &str = "key-1";

/// `Basic base64("admin:secret")`
pub const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// Start a mock server and a client pointed at it.
///
/// The file-server root is derived from the endpoint, and recorder web API
/// calls to host "127.0.0.1" land on the same server.
pub async fn start() -> (MockServer, MediasiteClient) {
    let server = MockServer::start().await;
    let client = MediasiteClient::with_config(test_config(&server));
    (server, client)
}

pub fn test_config(server: &MockServer) -> MediasiteConfig {
    let mut config = MediasiteConfig::new(
        &format!("{}{}/", server.uri(), API),
        USERNAME,
        PASSWORD,
        API_KEY,
    );
    config.recorder_api_port = server.address().port();
    config
}

/// Full path of an API resource on the mock server.
pub fn api_path(resource: &str) -> String {
    format!("{API}/{resource}")
}

/// An OData page wrapping `items`.
pub fn page(items: Vec<Value>) -> Value {
    json!({
        "odata.metadata": "http://localhost/api/v1/$metadata",
        "value": items,
    })
}

pub fn folder(id: &str, name: &str, parent: &str) -> Value {
    json!({ "Id": id, "Name": name, "ParentFolderId": parent })
}

/// `count` folders numbered from `start`, all under `parent`.
pub fn numbered_folders(start: usize, count: usize, parent: &str) -> Vec<Value> {
    (start..start + count)
        .map(|i| folder(&format!("f-{i}"), &format!("Folder {i}"), parent))
        .collect()
}

/// Requests received by the server for `method` on `path`.
pub async fn requests_to(server: &MockServer, method: &str, path: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .collect()
}

/// Value of a query parameter on a received request.
pub fn query_value(request: &wiremock::Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

//! Two-step media upload.

mod common;

use std::io::Write;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEDIA: &[u8] = b"fake mp4 payload";

fn media_file() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let file_path = dir.path().join("lecture.mp4");
    let mut file = std::fs::File::create(&file_path).expect("failed to create media file");
    file.write_all(MEDIA).expect("failed to write media file");
    (dir, file_path)
}

async fn mount_put(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("PUT"))
        .and(path(format!("/FileServer/Presentation/p-1/{name}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn mount_register(server: &MockServer, name: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(api_path("Presentations('p-1')/CreateMediaUpload")))
        .and(body_json(json!({ "FileName": name })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": "job-9" })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_failed_transfer_skips_registration() {
    let (server, client) = start().await;
    let (_dir, file_path) = media_file();
    mount_put(&server, "week1.mp4", 500).await;
    mount_register(&server, "week1.mp4", 0).await;

    let response = client
        .upload_media_file_with_response("p-1", &file_path, "week1.mp4")
        .await;
    assert!(!response.success);
    assert_eq!(response.status, 500);
    assert!(response.inner.is_none());
    assert!(!response.all_succeeded());
}

#[tokio::test]
async fn test_transfer_then_registration() {
    let (server, client) = start().await;
    let (_dir, file_path) = media_file();
    mount_put(&server, "week1.mp4", 201).await;
    mount_register(&server, "week1.mp4", 1).await;

    let response = client
        .upload_media_file_with_response("p-1", &file_path, "week1.mp4")
        .await;
    assert!(response.success);
    assert!(response.all_succeeded());
    let inner = response.inner.expect("registration envelope");
    assert_eq!(inner.value.as_deref(), Some("job-9"));

    let puts = requests_to(&server, "PUT", "/FileServer/Presentation/p-1/week1.mp4").await;
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, MEDIA);
}

#[tokio::test]
async fn test_send_as_name_is_path_encoded() {
    let (server, client) = start().await;
    let (_dir, file_path) = media_file();
    Mock::given(method("PUT"))
        .and(path("/FileServer/Presentation/p-1/Week%20%233.mp4"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mount_register(&server, "Week #3.mp4", 1).await;

    let response = client
        .upload_media_file_with_response("p-1", &file_path, "Week #3.mp4")
        .await;
    assert!(response.all_succeeded());
    assert_eq!(
        response.inner.and_then(|inner| inner.value).as_deref(),
        Some("job-9")
    );

    let puts = requests_to(&server, "PUT", "/FileServer/Presentation/p-1/Week%20%233.mp4").await;
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, MEDIA);
}

#[tokio::test]
async fn test_hard_upload_returns_job_id() {
    let (server, client) = start().await;
    let (_dir, file_path) = media_file();
    Mock::given(method("PUT"))
        .and(path("/FileServer/Presentation/p-1/lecture.mp4"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mount_register(&server, "lecture.mp4", 1).await;

    let job_id = client.upload_media_file("p-1", &file_path).await.unwrap();
    assert_eq!(job_id, "job-9");
}

#[tokio::test]
async fn test_hard_upload_fails_on_non_created() {
    let (server, client) = start().await;
    let (_dir, file_path) = media_file();
    mount_put(&server, "lecture.mp4", 200).await;
    mount_register(&server, "lecture.mp4", 0).await;

    let err = client.upload_media_file("p-1", &file_path).await.unwrap_err();
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_missing_file_is_failure_envelope() {
    let (server, client) = start().await;
    mount_register(&server, "nope.mp4", 0).await;

    let response = client
        .upload_media_file_with_response("p-1", std::path::Path::new("/nonexistent/nope.mp4"), "nope.mp4")
        .await;
    assert!(!response.success);
    assert_eq!(response.status, 0);
    assert!(response.error.unwrap().contains("failed to open"));
}

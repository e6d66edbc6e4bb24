//! Exact-match lookups and entity reads.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_folder_search(server: &wiremock::MockServer, name: &str, items: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(api_path("Folders")))
        .and(query_param("$filter", format!("Name eq '{name}'").as_str()))
        .and(query_param("$orderby", "Name"))
        .and(query_param("$top", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(items)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_find_folder_single_match() {
    let (server, client) = start().await;
    mount_folder_search(&server, "Lectures", vec![folder("f-1", "Lectures", "root")]).await;

    let found = client.find_folder("Lectures").await.unwrap();
    assert_eq!(found.id, "f-1");
}

#[tokio::test]
async fn test_find_folder_no_match() {
    let (server, client) = start().await;
    mount_folder_search(&server, "Missing", vec![]).await;

    let err = client.find_folder("Missing").await.unwrap_err();
    assert!(err.is_cardinality());
    assert_eq!(err.to_string(), "Folders found 0 items");
}

#[tokio::test]
async fn test_find_folder_ambiguous() {
    let (server, client) = start().await;
    mount_folder_search(
        &server,
        "Lectures",
        vec![folder("f-1", "Lectures", "a"), folder("f-2", "Lectures", "b")],
    )
    .await;

    let err = client.find_folder("Lectures").await.unwrap_err();
    assert_eq!(err.to_string(), "Folders found 2 items");
}

#[tokio::test]
async fn test_find_folder_in_parent() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Folders")))
        .and(query_param("$filter", "Name eq 'Fall' and ParentFolderId eq 'root'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![folder("f-9", "Fall", "root")])))
        .expect(1)
        .mount(&server)
        .await;

    let found = client.find_folder_in("Fall", "root").await.unwrap();
    assert_eq!(found.id, "f-9");
}

#[tokio::test]
async fn test_catalog_exact_name_among_substring_matches() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Catalogs")))
        .and(query_param("$filter", "Name eq 'Lecture 1'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            json!({ "Id": "c-1", "Name": "Lecture 1" }),
            json!({ "Id": "c-10", "Name": "Lecture 10" }),
        ])))
        .mount(&server)
        .await;

    let catalog = client.find_catalog("Lecture 1").await.unwrap();
    assert_eq!(catalog.id, "c-1");
}

#[tokio::test]
async fn test_get_presentation_full() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Presentations('p-1')")))
        .and(query_param("$select", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": "p-1",
            "Title": "Week 1",
            "Status": "Viewable",
            "ParentFolderId": "f-1"
        })))
        .mount(&server)
        .await;

    let presentation = client.get_presentation("p-1").await.unwrap();
    assert_eq!(presentation.title, "Week 1");
    assert_eq!(presentation.status.as_deref(), Some("Viewable"));
}

#[tokio::test]
async fn test_find_schedule_and_recurrences() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Schedules")))
        .and(query_param("$filter", "Name eq 'CS101'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            json!({ "Id": "s-1", "Name": "CS101", "RecorderId": "r-1" }),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("Schedules('s-1')/Recurrences")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            json!({ "Id": 1, "RecordDuration": 3000000, "RecurrencePattern": "Weekly" }),
        ])))
        .mount(&server)
        .await;

    let schedule = client.find_schedule("CS101").await.unwrap();
    assert_eq!(schedule.recorder_id.as_deref(), Some("r-1"));
    let recurrences = client.get_schedule_recurrences(&schedule.id).await.unwrap();
    assert_eq!(recurrences.len(), 1);
    assert_eq!(recurrences[0].record_duration, 3_000_000);
}

#[tokio::test]
async fn test_get_job() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Jobs('j-1')")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": "j-1",
            "Status": "Successful"
        })))
        .mount(&server)
        .await;

    let job = client.get_job("j-1").await.unwrap();
    assert!(job.is_finished());
}

//! Recursive folder discovery and folder creation.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_children(server: &MockServer, parent: &str, children: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(api_path("Folders")))
        .and(query_param("$filter", format!("ParentFolderId eq '{parent}'").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(children)))
        .mount(server)
        .await;
}

/// root -> { a -> { a1 }, b }
async fn mount_tree(server: &MockServer) {
    mount_children(server, "root", vec![folder("a", "A", "root"), folder("b", "B", "root")]).await;
    mount_children(server, "a", vec![folder("a1", "A1", "a")]).await;
    mount_children(server, "a1", vec![]).await;
    mount_children(server, "b", vec![]).await;
    Mock::given(method("GET"))
        .and(path(api_path("Folders('root')")))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder("root", "Root", "")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_direct_children_only() {
    let (server, client) = start().await;
    mount_tree(&server).await;

    let folders = client.find_folders_recursive("root", false, false).await.unwrap();
    assert_eq!(folders.len(), 2);
    assert!(folders.iter().all(|f| f.child_folders.is_none()));
}

#[tokio::test]
async fn test_subfolders_attached() {
    let (server, client) = start().await;
    mount_tree(&server).await;

    let folders = client.find_folders_recursive("root", true, false).await.unwrap();
    assert_eq!(folders.len(), 2);
    let a = &folders[0];
    assert_eq!(a.id, "a");
    assert_eq!(a.children().len(), 1);
    assert_eq!(a.children()[0].id, "a1");
    assert!(folders[1].children().is_empty());
}

#[tokio::test]
async fn test_parent_wrapper() {
    let (server, client) = start().await;
    mount_tree(&server).await;

    let folders = client.find_folders_recursive("root", true, true).await.unwrap();
    assert_eq!(folders.len(), 1);
    let root = &folders[0];
    assert_eq!(root.id, "root");
    assert_eq!(root.children().len(), 2);
    let with_children: Vec<_> = root.children().iter().filter(|c| !c.children().is_empty()).collect();
    assert_eq!(with_children.len(), 1);
    assert_eq!(with_children[0].id, "a");
    assert_eq!(with_children[0].children().len(), 1);
    assert_eq!(with_children[0].children()[0].id, "a1");
    assert!(with_children[0].children()[0].children().is_empty());
    assert_eq!(root.subtree_len(), 4);
}

#[tokio::test]
async fn test_no_children_returns_empty_unwrapped() {
    let (server, client) = start().await;
    mount_children(&server, "leaf", vec![]).await;
    Mock::given(method("GET"))
        .and(path(api_path("Folders('leaf')")))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder("leaf", "Leaf", "root")))
        .expect(0)
        .mount(&server)
        .await;

    let folders = client.find_folders_recursive("leaf", true, true).await.unwrap();
    assert!(folders.is_empty());
}

#[tokio::test]
async fn test_prefix_search() {
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Folders")))
        .and(query_param("$filter", "ParentFolderId eq 'root' and startswith(Name, 'CS')"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![folder("c", "CS101", "root")])))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client.find_folders_starting_with("CS", "root").await.unwrap();
    assert_eq!(folders[0].name, "CS101");
}

#[tokio::test]
async fn test_create_folder() {
    let (server, client) = start().await;
    Mock::given(method("POST"))
        .and(path(api_path("Folders")))
        .and(body_json(json!({ "Name": "Fall 2024", "ParentFolderId": "root" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder("f-new", "Fall 2024", "root")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_folder("Fall 2024", "root").await.unwrap();
    assert_eq!(created.id, "f-new");
}

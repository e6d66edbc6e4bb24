//! Folder endpoints.

use std::future::Future;
use std::pin::Pin;

use reqwest::StatusCode;
use tracing::info;

use ms_core::constants::PAGE_SIZE;
use ms_core::error::MsResult;
use ms_models::{Folder, NewFolder};

use super::resource::FOLDERS;
use crate::client::MediasiteClient;
use crate::query::{entity_path, field, Filter, PagedRequest};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

impl MediasiteClient {
    /// Find a folder by exact name.
    pub async fn find_folder(&self, name: &str) -> MsResult<Folder> {
        self.find_folder_matching(Filter::eq(field::NAME, name)).await
    }

    /// Find a folder by exact name within a parent folder.
    pub async fn find_folder_in(&self, name: &str, parent_folder_id: &str) -> MsResult<Folder> {
        let filter = Filter::eq(field::NAME, name)
            .and(Filter::eq(field::PARENT_FOLDER_ID, parent_folder_id));
        self.find_folder_matching(filter).await
    }

    async fn find_folder_matching(&self, filter: Filter) -> MsResult<Folder> {
        let request = PagedRequest::paged(FOLDERS, Some(filter), Some(field::NAME), PAGE_SIZE, 0);
        self.find_single(&request).await
    }

    /// Get a folder by id.
    pub async fn get_folder(&self, folder_id: &str) -> MsResult<Folder> {
        self.get_json(&entity_path(FOLDERS, folder_id), &[]).await
    }

    /// All folders directly inside `parent_folder_id`, ordered by name.
    pub async fn find_folders(&self, parent_folder_id: &str) -> MsResult<Vec<Folder>> {
        let request = PagedRequest::new(FOLDERS)
            .filter(Filter::eq(field::PARENT_FOLDER_ID, parent_folder_id))
            .order_by(field::NAME);
        self.fetch_all(&request).await
    }

    /// Folders directly inside `parent_folder_id` whose name starts with `prefix`.
    pub async fn find_folders_starting_with(
        &self,
        prefix: &str,
        parent_folder_id: &str,
    ) -> MsResult<Vec<Folder>> {
        let filter = Filter::eq(field::PARENT_FOLDER_ID, parent_folder_id)
            .and(Filter::starts_with(field::NAME, prefix));
        let request = PagedRequest::new(FOLDERS).filter(filter).order_by(field::NAME);
        self.fetch_all(&request).await
    }

    /// Folders inside `parent_folder_id`, optionally with their whole subtree.
    ///
    /// With `include_subfolders`, every returned folder has `child_folders`
    /// filled in recursively. With `include_parent_folder` as well, the result
    /// is a single node for the parent folder holding the discovered folders.
    /// A parent without children yields an empty list either way.
    pub async fn find_folders_recursive(
        &self,
        parent_folder_id: &str,
        include_subfolders: bool,
        include_parent_folder: bool,
    ) -> MsResult<Vec<Folder>> {
        if !include_subfolders {
            return self.find_folders(parent_folder_id).await;
        }

        let found = self.folder_subtree(parent_folder_id).await?;
        if found.is_empty() || !include_parent_folder {
            return Ok(found);
        }

        let mut parent = self.get_folder(parent_folder_id).await?;
        parent.child_folders = Some(found);
        Ok(vec![parent])
    }

    fn folder_subtree<'a>(&'a self, parent_folder_id: &'a str) -> BoxFuture<'a, MsResult<Vec<Folder>>> {
        Box::pin(async move {
            let mut folders = self.find_folders(parent_folder_id).await?;
            for folder in &mut folders {
                let children = self.folder_subtree(&folder.id).await?;
                folder.child_folders = Some(children);
            }
            Ok(folders)
        })
    }

    /// Create a folder inside `parent_folder_id`.
    pub async fn create_folder(&self, name: &str, parent_folder_id: &str) -> MsResult<Folder> {
        let body = NewFolder {
            name: name.to_string(),
            parent_folder_id: parent_folder_id.to_string(),
        };
        let folder: Folder = self.post_json(FOLDERS, &body, StatusCode::OK).await?;
        info!("created folder {} ({}) in {}", folder.name, folder.id, parent_folder_id);
        Ok(folder)
    }
}

//! Folder entity model.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A Mediasite folder.
///
/// `child_folders` is a derived view filled in only by recursive folder
/// discovery; the service never returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_folder_id: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub recycled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_folders: Option<Vec<Folder>>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Folder {
    /// Direct children attached by recursive discovery, empty if none.
    pub fn children(&self) -> &[Folder] {
        self.child_folders.as_deref().unwrap_or(&[])
    }

    /// Number of folders in this subtree, this one included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Folder::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_deserialize() {
        let json = r#"{
            "Id": "f-1",
            "Name": "Lectures",
            "ParentFolderId": "root",
            "Owner": "admin",
            "IsShared": true
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, "f-1");
        assert_eq!(folder.parent_folder_id.as_deref(), Some("root"));
        assert!(folder.child_folders.is_none());
        assert_eq!(folder.extra["IsShared"], true);
    }

    #[test]
    fn test_subtree_len() {
        let leaf = Folder { id: "c".into(), ..Default::default() };
        let mid = Folder {
            id: "b".into(),
            child_folders: Some(vec![leaf]),
            ..Default::default()
        };
        let root = Folder {
            id: "a".into(),
            child_folders: Some(vec![mid, Folder { id: "d".into(), ..Default::default() }]),
            ..Default::default()
        };
        assert_eq!(root.subtree_len(), 4);
        assert_eq!(root.children().len(), 2);
    }
}

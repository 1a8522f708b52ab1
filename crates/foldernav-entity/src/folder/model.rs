//! Folder entity model.

use serde::{Deserialize, Serialize};

use foldernav_core::types::id::FolderId;

/// A node in a folder tree as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder display name.
    pub name: String,
    /// Parent folder ID (absent for roots).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Child folder nodes, in display order.
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a leaf node.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: FolderId(id),
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Append a child, setting its parent id to this node.
    pub fn with_child(mut self, mut child: FolderNode) -> Self {
        child.parent_id = Some(self.id);
        self.children.push(child);
        self
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A flat folder row, as some endpoints return folders without nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    /// Folder ID.
    pub id: FolderId,
    /// Folder display name.
    pub name: String,
    /// Parent folder ID (absent for roots).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

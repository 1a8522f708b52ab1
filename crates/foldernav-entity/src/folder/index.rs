//! Path index derived from one folder tree snapshot.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::debug;

use foldernav_core::types::id::FolderId;

use super::model::FolderNode;
use super::tree::{FolderTree, find_ancestor_chain};

/// Separator between folder names in a display path.
pub const PATH_SEPARATOR: char = '/';

/// Build the id → display-path map for every node in the tree.
///
/// A root's path is its own name; every other node's path is its parent's
/// path, a `/`, and its name. Each node is visited once. Sibling folders with
/// the same name produce the same path string.
pub fn build_path_index(tree: &FolderTree) -> HashMap<FolderId, String> {
    let mut paths = HashMap::new();
    let mut stack: Vec<(&FolderNode, String)> = tree
        .roots
        .iter()
        .rev()
        .map(|root| (root, root.name.clone()))
        .collect();

    while let Some((node, path)) = stack.pop() {
        for child in node.children.iter().rev() {
            stack.push((child, format!("{path}{PATH_SEPARATOR}{}", child.name)));
        }
        paths.entry(node.id).or_insert(path);
    }

    paths
}

/// Read-only derived view of a [`FolderTree`] snapshot.
///
/// Paths are materialized for every node when the index is built. Ancestor
/// chains are searched on first request and memoized, so the search cost is
/// only paid for folders somebody actually navigates to.
#[derive(Debug)]
pub struct PathIndex {
    /// The snapshot this index was derived from.
    tree: FolderTree,
    /// id → display path.
    paths: HashMap<FolderId, String>,
    /// Memoized chain lookups, including misses.
    chains: DashMap<FolderId, Option<Vec<FolderId>>>,
}

impl PathIndex {
    /// Build the index, taking ownership of the snapshot.
    pub fn build(tree: FolderTree) -> Self {
        let paths = build_path_index(&tree);
        debug!(folders = paths.len(), "Built folder path index");
        Self {
            tree,
            paths,
            chains: DashMap::new(),
        }
    }

    /// The snapshot this index was built from.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Display path of a folder, if it is in the snapshot.
    pub fn path_of(&self, id: FolderId) -> Option<&str> {
        self.paths.get(&id).map(String::as_str)
    }

    /// Number of folders with a path.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the snapshot was empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All `(id, path)` pairs, sorted by path and then id.
    pub fn entries(&self) -> Vec<(FolderId, &str)> {
        let mut entries: Vec<(FolderId, &str)> = self
            .paths
            .iter()
            .map(|(id, path)| (*id, path.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Root-to-target chain of ids, searched on first use.
    pub fn ancestor_chain_to(&self, id: FolderId) -> Option<Vec<FolderId>> {
        if let Some(cached) = self.chains.get(&id) {
            return cached.value().clone();
        }

        let chain = find_ancestor_chain(&self.tree, id);
        self.chains.insert(id, chain.clone());
        chain
    }

    /// Number of chain lookups memoized so far.
    pub fn memoized_chains(&self) -> usize {
        self.chains.len()
    }
}

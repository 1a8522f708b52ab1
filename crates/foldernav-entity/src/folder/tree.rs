//! Folder forest snapshot and ancestor-chain search.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use foldernav_core::types::id::FolderId;

use super::model::{FolderNode, FolderRecord};

/// A complete folder forest from one backend fetch.
///
/// The backend may return several top-level roots. A tree is never mutated
/// after construction; a refresh produces a new `FolderTree`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderTree {
    /// The root node(s) of the forest, in display order.
    pub roots: Vec<FolderNode>,
}

impl FolderTree {
    /// Create a tree from its roots.
    pub fn new(roots: Vec<FolderNode>) -> Self {
        Self { roots }
    }

    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the forest has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order iterator over every node of the forest.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Find a node by id (first in pre-order).
    pub fn find(&self, id: FolderId) -> Option<&FolderNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Assemble a forest from flat records linked by `parent_id`.
    ///
    /// Records whose parent is absent from the input become roots. Sibling
    /// order follows input order.
    pub fn from_flat(records: &[FolderRecord]) -> Self {
        let known: HashSet<FolderId> = records.iter().map(|r| r.id).collect();
        let mut children_of: HashMap<FolderId, Vec<&FolderRecord>> = HashMap::new();
        let mut roots = Vec::new();

        for record in records {
            match record.parent_id {
                Some(parent) if known.contains(&parent) => {
                    children_of.entry(parent).or_default().push(record)
                }
                _ => roots.push(record),
            }
        }

        let mut visited = HashSet::new();
        let roots = roots
            .into_iter()
            .filter_map(|root| Self::assemble(root, &children_of, &mut visited))
            .collect();

        Self { roots }
    }

    fn assemble(
        record: &FolderRecord,
        children_of: &HashMap<FolderId, Vec<&FolderRecord>>,
        visited: &mut HashSet<FolderId>,
    ) -> Option<FolderNode> {
        if !visited.insert(record.id) {
            return None;
        }

        let children = children_of
            .get(&record.id)
            .map(|kids| {
                kids.iter()
                    .filter_map(|kid| Self::assemble(kid, children_of, visited))
                    .collect()
            })
            .unwrap_or_default();

        Some(FolderNode {
            id: record.id,
            name: record.name.clone(),
            parent_id: record.parent_id,
            children,
        })
    }
}

/// Pre-order traversal over a [`FolderTree`].
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a FolderNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Find the root-to-target chain of ids ending at `target`.
///
/// Depth-first, pre-order, siblings in the tree's order. Ids are assumed
/// unique; if they are not, the first match in traversal order wins.
pub fn find_ancestor_chain(tree: &FolderTree, target: FolderId) -> Option<Vec<FolderId>> {
    let mut chain: Vec<FolderId> = Vec::new();
    let mut stack: Vec<(&FolderNode, usize)> =
        tree.roots.iter().rev().map(|root| (root, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        chain.truncate(depth);
        chain.push(node.id);

        if node.id == target {
            return Some(chain);
        }

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    None
}

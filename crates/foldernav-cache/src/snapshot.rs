//! Snapshot cache with rebuild-and-swap semantics.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, info};

use foldernav_core::config::cache::CacheConfig;
use foldernav_core::types::id::{FolderId, TestRunId, TestRunItemId};
use foldernav_entity::folder::{FolderTree, PathIndex};
use foldernav_entity::test_run::TestRunItem;

use crate::keys;

/// Map from test run item to the folder of its test case.
pub type ItemFolderMap = HashMap<TestRunItemId, FolderId>;

/// Process-scoped cache of path index snapshots and item maps.
///
/// Entries are never patched. `publish_*` builds a complete snapshot first
/// and then swaps it in with a single insert.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    /// Path indexes keyed by project.
    indexes: Cache<String, Arc<PathIndex>>,
    /// Item → folder maps keyed by test run.
    item_folders: Cache<String, Arc<ItemFolderMap>>,
}

impl SnapshotCache {
    /// Create a new snapshot cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let ttl = Duration::from_secs(config.time_to_live_seconds);
        Self {
            indexes: Cache::builder()
                .max_capacity(config.max_snapshots)
                .time_to_live(ttl)
                .build(),
            item_folders: Cache::builder()
                .max_capacity(config.max_snapshots)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Build a path index from a fresh tree and make it the current snapshot.
    pub async fn publish_tree(&self, project_id: &str, tree: FolderTree) -> Arc<PathIndex> {
        let index = Arc::new(PathIndex::build(tree));
        self.indexes
            .insert(keys::project_index(project_id), Arc::clone(&index))
            .await;
        info!(project_id, folders = index.len(), "Published folder path snapshot");
        index
    }

    /// The current path index snapshot of a project.
    pub async fn index(&self, project_id: &str) -> Option<Arc<PathIndex>> {
        self.indexes.get(&keys::project_index(project_id)).await
    }

    /// Build the item → folder map of a test run and make it current.
    ///
    /// Items without a folder are left out.
    pub async fn publish_items(&self, run_id: TestRunId, items: &[TestRunItem]) -> Arc<ItemFolderMap> {
        let map: ItemFolderMap = items
            .iter()
            .filter_map(|item| item.folder_id.map(|folder| (item.id, folder)))
            .collect();
        let map = Arc::new(map);
        self.item_folders
            .insert(keys::run_items(run_id), Arc::clone(&map))
            .await;
        debug!(%run_id, items = map.len(), "Published test run item map");
        map
    }

    /// The current item → folder map of a test run.
    pub async fn items(&self, run_id: TestRunId) -> Option<Arc<ItemFolderMap>> {
        self.item_folders.get(&keys::run_items(run_id)).await
    }

    /// Drop the snapshot of a project.
    pub async fn invalidate_project(&self, project_id: &str) {
        self.indexes.invalidate(&keys::project_index(project_id)).await;
        debug!(project_id, "Invalidated folder path snapshot");
    }
}

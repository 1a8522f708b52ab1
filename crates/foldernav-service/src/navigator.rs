//! Folder navigation use cases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use foldernav_cache::SnapshotCache;
use foldernav_client::TreeSource;
use foldernav_core::config::AppConfig;
use foldernav_core::result::AppResult;
use foldernav_core::traits::surface::{RowSurface, TreeSurface};
use foldernav_core::types::id::FolderId;
use foldernav_entity::folder::PathIndex;
use foldernav_entity::navigation::ExpansionRequest;

use crate::annotate::FolderPathLabels;
use crate::expand::{ExpansionReport, ExpansionSequencer};
use crate::link::{HostContext, LinkBuilder, NavigationParams};

/// Ties the tree source, snapshot cache, link builder, and sequencer
/// together.
#[derive(Debug, Clone)]
pub struct FolderNavigator {
    source: Arc<dyn TreeSource>,
    cache: SnapshotCache,
    links: LinkBuilder,
    sequencer: ExpansionSequencer,
}

impl FolderNavigator {
    /// Creates a new navigator.
    pub fn new(
        source: Arc<dyn TreeSource>,
        cache: SnapshotCache,
        links: LinkBuilder,
        sequencer: ExpansionSequencer,
    ) -> Self {
        Self {
            source,
            cache,
            links,
            sequencer,
        }
    }

    /// Creates a navigator with every component built from configuration.
    pub fn from_config(source: Arc<dyn TreeSource>, config: &AppConfig) -> Self {
        Self::new(
            source,
            SnapshotCache::new(&config.cache),
            LinkBuilder::new(config.link.clone()),
            ExpansionSequencer::new(config.navigation.clone()),
        )
    }

    /// Fetches the project's tree and swaps in a new snapshot.
    pub async fn refresh(&self, project_id: &str) -> AppResult<Arc<PathIndex>> {
        let tree = self.source.fetch_tree(project_id).await?;
        Ok(self.cache.publish_tree(project_id, tree).await)
    }

    /// The current snapshot, fetching one if none is cached.
    pub async fn snapshot(&self, project_id: &str) -> AppResult<Arc<PathIndex>> {
        match self.cache.index(project_id).await {
            Some(index) => Ok(index),
            None => self.refresh(project_id).await,
        }
    }

    /// Builds a share link for a folder.
    ///
    /// The ancestor chain comes from the project's snapshot. When the page
    /// has no project id, the tree cannot be fetched, or the folder is not
    /// in the snapshot, the link is built without a path token.
    pub async fn share_link(&self, host: &HostContext, folder_id: FolderId) -> AppResult<String> {
        let chain = match host.project_id.as_deref() {
            Some(project_id) => match self.snapshot(project_id).await {
                Ok(index) => index.ancestor_chain_to(folder_id),
                Err(e) => {
                    warn!(project_id, error = %e, "Folder tree unavailable, sharing link without path");
                    None
                }
            },
            None => None,
        };

        if chain.is_none() {
            debug!(%folder_id, "No ancestor chain for shared folder");
        }

        let url = self.links.folder_link(host, folder_id, chain.as_deref())?;
        info!(%folder_id, with_path = chain.is_some(), "Built folder link");
        Ok(url)
    }

    /// Follows the navigation parameters in a location hash.
    ///
    /// Returns `Ok(None)` when the hash carries no folder id.
    pub async fn follow<S>(&self, hash: &str, surface: &S) -> AppResult<Option<ExpansionReport>>
    where
        S: TreeSurface + ?Sized,
    {
        let Some(params) = NavigationParams::parse(hash)? else {
            return Ok(None);
        };
        info!(folder_id = %params.folder_id, "Following folder link");

        let report = self.sequencer.run(surface, params.into_request()).await;
        Ok(Some(report))
    }

    /// Reveals a folder of a project using the cached snapshot's chain.
    ///
    /// Falls back to locating the folder directly when no chain is known.
    pub async fn go_to_folder<S>(&self, project_id: &str, folder_id: FolderId, surface: &S) -> ExpansionReport
    where
        S: TreeSurface + ?Sized,
    {
        let request = match self.cache.index(project_id).await {
            Some(index) => index
                .ancestor_chain_to(folder_id)
                .and_then(ExpansionRequest::with_chain),
            None => None,
        }
        .unwrap_or_else(|| ExpansionRequest::direct(folder_id));

        self.sequencer.run(surface, request).await
    }

    /// Loads everything the folder path labels of a test run need.
    ///
    /// The run's items and the folder tree are fetched concurrently and
    /// published as fresh snapshots.
    pub async fn prepare_path_labels(
        &self,
        project_id: &str,
        run_key: &str,
        surface: Arc<dyn RowSurface>,
    ) -> AppResult<FolderPathLabels> {
        let run = self.source.fetch_test_run(project_id, run_key).await?;
        debug!(run_key, run_id = %run.id, "Resolved test run");

        let (items, tree) = tokio::try_join!(
            self.source.fetch_test_run_items(project_id, run.id),
            self.source.fetch_tree(project_id),
        )?;

        let items = self.cache.publish_items(run.id, &items).await;
        let index = self.cache.publish_tree(project_id, tree).await;
        Ok(FolderPathLabels::new(surface, index, items))
    }
}

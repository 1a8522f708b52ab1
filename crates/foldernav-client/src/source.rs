//! Tree source trait.

use async_trait::async_trait;

use foldernav_core::result::AppResult;
use foldernav_core::types::id::TestRunId;
use foldernav_entity::folder::FolderTree;
use foldernav_entity::test_run::{TestRun, TestRunItem};

/// Backend data needed by the folder features.
///
/// Every call returns a complete snapshot; there is no incremental fetch.
#[async_trait]
pub trait TreeSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the full folder forest of a project.
    async fn fetch_tree(&self, project_id: &str) -> AppResult<FolderTree>;

    /// Resolve a test run key (e.g. `PRJ-R2`) to its header.
    async fn fetch_test_run(&self, project_id: &str, key: &str) -> AppResult<TestRun>;

    /// Fetch all items of a test run.
    async fn fetch_test_run_items(
        &self,
        project_id: &str,
        run_id: TestRunId,
    ) -> AppResult<Vec<TestRunItem>>;
}

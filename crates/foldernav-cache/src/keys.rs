//! Cache key builders for all FolderNav cache entries.

use foldernav_core::types::id::TestRunId;

/// Prefix applied to all FolderNav cache keys.
const PREFIX: &str = "foldernav";

/// Cache key for the path index of a project's folder tree.
pub fn project_index(project_id: &str) -> String {
    format!("{PREFIX}:tree:{project_id}")
}

/// Cache key for the item → folder map of a test run.
pub fn run_items(run_id: TestRunId) -> String {
    format!("{PREFIX}:run_items:{run_id}")
}

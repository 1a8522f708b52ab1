//! Test run entity models.

use serde::{Deserialize, Serialize};

use foldernav_core::types::id::{FolderId, TestRunId, TestRunItemId};

/// A test run (test cycle) header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRun {
    /// Numeric test run id.
    pub id: TestRunId,
    /// Human-facing key, e.g. `PRJ-R12`.
    #[serde(default)]
    pub key: String,
    /// Test run name.
    #[serde(default)]
    pub name: String,
}

/// An item (test case slot) of a test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunItem {
    /// Item id; also the grid row id in the host page.
    pub id: TestRunItemId,
    /// Folder of the underlying test case, if any.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
}

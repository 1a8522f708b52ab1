//! Test-management REST API configuration.

use serde::{Deserialize, Serialize};

/// REST endpoint configuration for the tree source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the folder tree endpoint; `{project_id}` is substituted.
    #[serde(default = "default_folder_tree_path")]
    pub folder_tree_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            folder_tree_path: default_folder_tree_path(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://app.tm4j.smartbear.com/backend/rest/tests/2.0".to_string()
}

fn default_folder_tree_path() -> String {
    "/project/{project_id}/foldertree/testcase".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

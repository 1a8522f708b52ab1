//! REST implementation of [`TreeSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use foldernav_core::config::api::ApiConfig;
use foldernav_core::error::{AppError, ErrorKind};
use foldernav_core::result::AppResult;
use foldernav_core::types::id::TestRunId;
use foldernav_entity::folder::FolderTree;
use foldernav_entity::test_run::{TestRun, TestRunItem};

use crate::auth::Credentials;
use crate::source::TreeSource;

/// Header naming the project a request is scoped to.
pub const PROJECT_HEADER: &str = "jira-project-id";

/// Test run items arrive either bare or wrapped, depending on the endpoint
/// version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemsBody {
    Bare(Vec<TestRunItem>),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        test_run_items: Vec<TestRunItem>,
    },
}

impl ItemsBody {
    fn into_items(self) -> Vec<TestRunItem> {
        match self {
            Self::Bare(items) => items,
            Self::Wrapped { test_run_items } => test_run_items,
        }
    }
}

/// Tree source backed by the test-management REST API.
#[derive(Debug, Clone)]
pub struct HttpTreeSource {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Folder tree path template containing `{project_id}`.
    folder_tree_path: String,
    /// Credentials for every request.
    credentials: Credentials,
}

impl HttpTreeSource {
    /// Create a new REST tree source.
    pub fn new(config: &ApiConfig, credentials: Credentials) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            folder_tree_path: config.folder_tree_path.clone(),
            credentials,
        })
    }

    /// URL of the folder tree endpoint for a project.
    pub fn tree_url(&self, project_id: &str) -> String {
        let path = self.folder_tree_path.replace("{project_id}", project_id);
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of the test run lookup endpoint.
    pub fn test_run_url(&self, key: &str) -> String {
        format!("{}/testrun/{key}?fields=id,key,name", self.base_url)
    }

    /// URL of the test run items endpoint.
    pub fn test_run_items_url(&self, run_id: TestRunId) -> String {
        format!(
            "{}/testrun/{run_id}/testrunitems?fields=id,folderId",
            self.base_url
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, project_id: &str) -> AppResult<T> {
        debug!(url, project_id, "GET");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.credentials.authorization())
            .header(CONTENT_TYPE, "application/json")
            .header(PROJECT_HEADER, project_id)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, format!("GET {url} failed"), e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url, status = status.as_u16(), "Backend request failed");
            return Err(AppError::external(format!(
                "GET {url} returned {status}: {body}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid JSON from {url}"),
                e,
            )
        })
    }
}

#[async_trait]
impl TreeSource for HttpTreeSource {
    async fn fetch_tree(&self, project_id: &str) -> AppResult<FolderTree> {
        let tree: FolderTree = self.get_json(&self.tree_url(project_id), project_id).await?;
        debug!(project_id, roots = tree.roots.len(), "Fetched folder tree");
        Ok(tree)
    }

    async fn fetch_test_run(&self, project_id: &str, key: &str) -> AppResult<TestRun> {
        self.get_json(&self.test_run_url(key), project_id).await
    }

    async fn fetch_test_run_items(
        &self,
        project_id: &str,
        run_id: TestRunId,
    ) -> AppResult<Vec<TestRunItem>> {
        let body: ItemsBody = self
            .get_json(&self.test_run_items_url(run_id), project_id)
            .await?;
        Ok(body.into_items())
    }
}

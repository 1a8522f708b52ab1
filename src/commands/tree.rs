//! Folder tree CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use foldernav_client::{Credentials, HttpTreeSource, TreeSource, jwt_from_cookie_header};
use foldernav_core::config::AppConfig;
use foldernav_core::error::{AppError, ErrorKind};
use foldernav_core::result::AppResult;
use foldernav_core::types::id::{FolderId, TestRunId};
use foldernav_entity::folder::{FolderRecord, FolderTree, PathIndex};
use foldernav_entity::test_run::{TestRun, TestRunItem};
use foldernav_service::{FolderNavigator, codec};

/// Project id used for trees read from a file
const LOCAL_PROJECT: &str = "local";

/// Where the folder tree comes from
#[derive(Debug, Args)]
pub struct TreeInput {
    /// Folder tree JSON file
    #[arg(short, long, conflicts_with = "project_id")]
    pub tree: Option<PathBuf>,

    /// Read the file as a flat list of `{id, name, parentId}` records
    #[arg(long, requires = "tree")]
    pub flat: bool,

    /// Fetch the tree of this project from the backend
    #[arg(long)]
    pub project_id: Option<String>,

    /// JWT for backend requests
    #[arg(long)]
    pub jwt: Option<String>,

    /// Cookie header to read the `jwt` cookie from
    #[arg(long)]
    pub cookie: Option<String>,
}

impl TreeInput {
    /// Build a tree source for this input, returning it with the project id
    /// to query.
    pub fn source(&self, config: &AppConfig) -> AppResult<(Arc<dyn TreeSource>, String)> {
        if let Some(path) = &self.tree {
            let source = FileTreeSource {
                path: path.clone(),
                flat: self.flat,
            };
            return Ok((Arc::new(source), LOCAL_PROJECT.to_string()));
        }

        let project_id = self
            .project_id
            .clone()
            .ok_or_else(|| AppError::validation("Either --tree or --project-id is required"))?;
        let credentials = self
            .jwt
            .as_deref()
            .map(Credentials::new)
            .or_else(|| self.cookie.as_deref().and_then(jwt_from_cookie_header))
            .ok_or_else(|| AppError::validation("--jwt or a cookie header with a jwt is required"))?;

        let source = HttpTreeSource::new(&config.api, credentials)?;
        Ok((Arc::new(source), project_id))
    }

    /// Build a navigator over this input and load its snapshot.
    pub async fn load(&self, config: &AppConfig) -> AppResult<(FolderNavigator, String, Arc<PathIndex>)> {
        let (source, project_id) = self.source(config)?;
        let navigator = FolderNavigator::from_config(source, config);
        let index = navigator.refresh(&project_id).await?;
        Ok((navigator, project_id, index))
    }
}

/// Tree source reading a JSON file.
#[derive(Debug)]
struct FileTreeSource {
    path: PathBuf,
    flat: bool,
}

#[async_trait]
impl TreeSource for FileTreeSource {
    async fn fetch_tree(&self, _project_id: &str) -> AppResult<FolderTree> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read {}", self.path.display()),
                e,
            )
        })?;

        if self.flat {
            let records: Vec<FolderRecord> = serde_json::from_str(&raw)?;
            Ok(FolderTree::from_flat(&records))
        } else {
            Ok(serde_json::from_str(&raw)?)
        }
    }

    async fn fetch_test_run(&self, _project_id: &str, key: &str) -> AppResult<TestRun> {
        Err(AppError::validation(format!(
            "Test run {key} is not available from a tree file"
        )))
    }

    async fn fetch_test_run_items(
        &self,
        _project_id: &str,
        run_id: TestRunId,
    ) -> AppResult<Vec<TestRunItem>> {
        Err(AppError::validation(format!(
            "Items of test run {run_id} are not available from a tree file"
        )))
    }
}

/// Arguments for `paths`
#[derive(Debug, Args)]
pub struct PathsArgs {
    /// Tree input
    #[command(flatten)]
    pub input: TreeInput,
}

/// Arguments for `chain`
#[derive(Debug, Args)]
pub struct ChainArgs {
    /// Tree input
    #[command(flatten)]
    pub input: TreeInput,

    /// Target folder ID
    #[arg(short, long)]
    pub id: u64,
}

/// Folder path display row
#[derive(Debug, Serialize, Tabled)]
struct PathRow {
    /// Folder ID
    id: u64,
    /// Display path
    path: String,
}

/// Ancestor chain display row
#[derive(Debug, Serialize, Tabled)]
struct ChainView {
    /// Folder ID
    folder_id: u64,
    /// Display path
    path: String,
    /// Chain ids, root first
    #[tabled(skip)]
    chain: Vec<u64>,
    /// Chain for table output
    #[serde(skip)]
    #[tabled(rename = "chain")]
    chain_display: String,
    /// Path token
    token: String,
}

/// Execute `paths`
pub async fn paths(args: &PathsArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let (_, _, index) = args.input.load(config).await?;
    let rows: Vec<PathRow> = index
        .entries()
        .into_iter()
        .map(|(id, path)| PathRow {
            id: id.get(),
            path: path.to_string(),
        })
        .collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute `chain`
pub async fn chain(args: &ChainArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let (_, _, index) = args.input.load(config).await?;
    let folder_id = FolderId(args.id);
    let chain = index
        .ancestor_chain_to(folder_id)
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} is not in the tree")))?;

    let ids: Vec<u64> = chain.iter().map(|id| id.get()).collect();
    output::print_row(
        &ChainView {
            folder_id: folder_id.get(),
            path: index.path_of(folder_id).unwrap_or_default().to_string(),
            chain_display: ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(" > "),
            chain: ids,
            token: codec::encode(&chain),
        },
        format,
    );
    Ok(())
}

//! Share link CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::tree::TreeInput;
use crate::output::{self, OutputFormat};
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;
use foldernav_core::types::id::FolderId;
use foldernav_service::link::params::decode_component;
use foldernav_service::{HostContext, NavigationParams, PageKind};

/// Arguments for `link`
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Tree input
    #[command(flatten)]
    pub input: TreeInput,

    /// Folder ID to link to
    #[arg(short, long)]
    pub id: u64,

    /// Project key, e.g. `PRJ`
    #[arg(long)]
    pub project_key: String,

    /// Host origin, plain or percent-encoded
    #[arg(long)]
    pub origin: String,
}

/// Arguments for `params`
#[derive(Debug, Args)]
pub struct ParamsArgs {
    /// Location hash, e.g. `#!/v2/testCases#uiExtensionsFolderId=3&p=...`
    pub hash: String,
}

/// Share link display row
#[derive(Debug, Serialize, Tabled)]
struct LinkRow {
    /// Folder ID
    folder_id: u64,
    /// Whether the link carries a path token
    with_path: bool,
    /// Link URL
    url: String,
}

/// Navigation parameter display row
#[derive(Debug, Serialize, Tabled)]
struct ParamsRow {
    /// Host page
    page: String,
    /// Target folder ID
    folder_id: u64,
    /// Whether the path token decoded
    guided: bool,
    /// Chain ids, root first
    #[tabled(skip)]
    chain: Vec<u64>,
    /// Chain for table output
    #[serde(skip)]
    #[tabled(rename = "chain")]
    chain_display: String,
}

/// Execute `link`
pub async fn link(args: &LinkArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let (navigator, project_id, _) = args.input.load(config).await?;
    let host = HostContext {
        project_key: Some(args.project_key.clone()),
        project_id: Some(project_id),
        origin: Some(decode_component("origin", &args.origin)?),
    };

    let url = navigator.share_link(&host, FolderId(args.id)).await?;
    output::print_row(
        &LinkRow {
            folder_id: args.id,
            with_path: url.contains("&p="),
            url,
        },
        format,
    );
    Ok(())
}

/// Execute `params`
pub fn params(args: &ParamsArgs, format: OutputFormat) -> Result<(), AppError> {
    let page = PageKind::detect(&args.hash);
    let Some(params) = NavigationParams::parse(&args.hash)? else {
        output::print_warning("No folder navigation parameters in hash");
        return Ok(());
    };

    let request = params.into_request();
    let chain: Vec<u64> = request
        .chain()
        .map(|chain| chain.iter().map(|id| id.get()).collect())
        .unwrap_or_default();

    output::print_row(
        &ParamsRow {
            page: format!("{page:?}"),
            folder_id: request.target_id.get(),
            guided: !chain.is_empty(),
            chain_display: chain
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(" > "),
            chain,
        },
        format,
    );
    Ok(())
}

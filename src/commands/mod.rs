//! CLI command definitions and dispatch.

pub mod codec;
pub mod config;
pub mod link;
pub mod tree;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;

/// FolderNav: folder paths, share links, and path tokens for the
/// test-management UI
#[derive(Debug, Parser)]
#[command(name = "foldernav", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay, loaded from `config/<env>.toml`
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode an ancestor chain into a path token
    Encode(codec::EncodeArgs),
    /// Decode a path token into its ancestor chain
    Decode(codec::DecodeArgs),
    /// List the display path of every folder
    Paths(tree::PathsArgs),
    /// Show the ancestor chain and path token of a folder
    Chain(tree::ChainArgs),
    /// Build a share link to a folder
    Link(link::LinkArgs),
    /// Inspect the navigation parameters of a location hash
    Params(link::ParamsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration from the selected file and overlay
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let overlay = self.env.as_ref().map(|env| format!("config/{env}"));
        AppConfig::load_from(&self.config, overlay.as_deref())
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Encode(args) => codec::encode(args, self.format),
            Commands::Decode(args) => codec::decode(args, self.format),
            Commands::Paths(args) => tree::paths(args, config, self.format).await,
            Commands::Chain(args) => tree::chain(args, config, self.format).await,
            Commands::Link(args) => link::link(args, config, self.format).await,
            Commands::Params(args) => link::params(args, self.format),
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

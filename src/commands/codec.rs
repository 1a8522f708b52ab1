//! Path token CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use foldernav_core::error::AppError;
use foldernav_core::types::id::folder_chain;
use foldernav_service::codec;

/// Arguments for `encode`
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Folder ids from root to target
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<u64>,
}

/// Arguments for `decode`
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Path token to decode
    pub token: String,
}

/// Encoded token display row
#[derive(Debug, Serialize, Tabled)]
struct TokenRow {
    /// Chain length
    depth: usize,
    /// Path token
    token: String,
}

/// One decoded chain element
#[derive(Debug, Serialize, Tabled)]
struct ChainRow {
    /// Position from the root
    index: usize,
    /// Folder ID
    folder_id: u64,
}

/// Execute `encode`
pub fn encode(args: &EncodeArgs, format: OutputFormat) -> Result<(), AppError> {
    let chain = folder_chain(&args.ids);
    output::print_row(
        &TokenRow {
            depth: chain.len(),
            token: codec::encode(&chain),
        },
        format,
    );
    Ok(())
}

/// Execute `decode`
pub fn decode(args: &DecodeArgs, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<ChainRow> = codec::decode(&args.token)?
        .into_iter()
        .enumerate()
        .map(|(index, id)| ChainRow {
            index,
            folder_id: id.get(),
        })
        .collect();
    output::print_list(&rows, format);
    Ok(())
}

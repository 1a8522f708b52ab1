//! # foldernav-core
//!
//! Core crate for FolderNav. Contains configuration schemas, typed
//! identifiers, the host UI surface traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderNav crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

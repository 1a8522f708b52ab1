//! Core type definitions used across the FolderNav workspace.

pub mod id;

pub use id::*;

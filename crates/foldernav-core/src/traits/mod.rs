//! Core traits defined in `foldernav-core` and implemented by host adapters.

pub mod surface;

pub use surface::{FolderSurface, NodeState, RowSurface, TreeSurface};

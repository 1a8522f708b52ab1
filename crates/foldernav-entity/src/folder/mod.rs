//! Folder domain entities.

pub mod index;
pub mod model;
pub mod tree;

pub use index::{PathIndex, build_path_index};
pub use model::{FolderNode, FolderRecord};
pub use tree::{FolderTree, find_ancestor_chain};

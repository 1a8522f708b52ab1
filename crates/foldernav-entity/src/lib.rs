//! # foldernav-entity
//!
//! Domain models for FolderNav. Folder trees arrive from the backend as a
//! single immutable snapshot; everything derived from them (paths, ancestor
//! chains) lives next to the snapshot in [`folder::PathIndex`] and is
//! discarded with it.

pub mod folder;
pub mod navigation;
pub mod test_run;
